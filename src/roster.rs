use std::fmt;

use serde::Deserialize;
use teloxide::types::UserId;
use thiserror::Error;

use crate::env;

/// Single-character handle of a roster member, as typed in `/cs -vt`
/// and as carried inside button payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key(char);

impl Key {
  pub fn new(c: char) -> Self {
    Self(c)
  }

  pub fn as_char(self) -> char {
    self.0
  }
}

impl fmt::Display for Key {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Member {
  pub key: char,
  pub id: u64,
  pub handle: String,
}

impl Member {
  fn new<T: Into<String>>(key: char, id: u64, handle: T) -> Self {
    Self { key, id, handle: handle.into() }
  }
}

#[derive(Error, Debug)]
pub enum RosterError {
  #[error("roster json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("roster is empty")]
  Empty,

  #[error("key {0:?} must be a lowercase ascii letter or digit")]
  InvalidKey(char),

  #[error("key {0:?} is used twice")]
  DuplicateKey(char),

  #[error("user id {0} is used twice")]
  DuplicateId(u64),

  #[error("member {0:?} has an empty handle")]
  EmptyHandle(char),
}

/// Fixed mapping between Telegram users and their keys. Built once on startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
  members: Vec<Member>,
}

impl Default for Roster {
  fn default() -> Self {
    Self {
      members: vec![
        Member::new('v', 63923, "vladislav805"),
        Member::new('t', 97781725, "Whoops"),
        Member::new('d', 87476169, "leodicapri"),
        Member::new('c', 485056, "longpoll"),
        Member::new('k', 257534697, "soslowman"),
      ],
    }
  }
}

impl Roster {
  pub fn new(members: Vec<Member>) -> Result<Self, RosterError> {
    if members.is_empty() {
      return Err(RosterError::Empty);
    }

    for (idx, member) in members.iter().enumerate() {
      if !(member.key.is_ascii_lowercase() || member.key.is_ascii_digit()) {
        return Err(RosterError::InvalidKey(member.key));
      }
      if member.handle.trim().is_empty() {
        return Err(RosterError::EmptyHandle(member.key));
      }

      let rest = &members[idx + 1..];
      if rest.iter().any(|m| m.key == member.key) {
        return Err(RosterError::DuplicateKey(member.key));
      }
      if rest.iter().any(|m| m.id == member.id) {
        return Err(RosterError::DuplicateId(member.id));
      }
    }

    Ok(Self { members })
  }

  /// `[{ "key": "v", "id": 63923, "handle": "vladislav805" }, ..]`
  pub fn from_json(json: &str) -> Result<Self, RosterError> {
    Self::new(serde_json::from_str(json)?)
  }

  pub fn from_env() -> Result<Self, RosterError> {
    match env::var(env::ROSTER) {
      Some(json) => Self::from_json(&json),
      None => Ok(Self::default()),
    }
  }

  pub fn key_for(&self, id: UserId) -> Option<Key> {
    self
      .members
      .iter()
      .find(|m| m.id == id.0)
      .map(|m| Key(m.key))
  }

  pub fn handle_for(&self, key: Key) -> Option<&str> {
    self
      .members
      .iter()
      .find(|m| m.key == key.0)
      .map(|m| m.handle.as_str())
  }

  /// Resolves a typed character into a key, ignoring case.
  pub fn key(&self, c: char) -> Option<Key> {
    let c = c.to_ascii_lowercase();
    self.members.iter().any(|m| m.key == c).then_some(Key(c))
  }

  pub fn alphabet(&self) -> String {
    self.members.iter().map(|m| m.key).collect()
  }

  pub fn members(&self) -> &[Member] {
    &self.members
  }
}
