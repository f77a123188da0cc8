mod payload;

pub use payload::{Payload, PayloadError};

use thiserror::Error;

use crate::roster::Key;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Game {
  Cs,
  Pl,
}

impl Game {
  pub const ALL: [Game; 2] = [Game::Cs, Game::Pl];

  const PREFIX: &'static str = "game_";

  /// Literal carried in button payloads.
  pub fn literal(self) -> &'static str {
    match self {
      Game::Cs => "game_cs",
      Game::Pl => "game_pl",
    }
  }

  pub fn from_literal(literal: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|g| g.literal() == literal)
  }

  pub fn command(self) -> &'static str {
    match self {
      Game::Cs => "cs",
      Game::Pl => "pubg",
    }
  }

  pub fn from_command(command: &str) -> Option<Self> {
    Self::ALL
      .into_iter()
      .find(|g| g.command().eq_ignore_ascii_case(command))
  }

  pub fn title(self) -> String {
    self
      .literal()
      .trim_start_matches(Self::PREFIX)
      .to_uppercase()
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
  Yes,
  No,
}

impl Answer {
  pub fn tag(self) -> &'static str {
    match self {
      Answer::Yes => "y",
      Answer::No => "n",
    }
  }

  pub fn from_tag(tag: &str) -> Option<Self> {
    match tag {
      "y" => Some(Answer::Yes),
      "n" => Some(Answer::No),
      _ => None,
    }
  }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PollError {
  #[error("{0} is not waited for")]
  NotPending(Key),
}

/// Invited keys split into three disjoint lists. `accepted` and `declined`
/// keep answer order, `pending` keeps invite order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poll {
  pub game: Game,
  pub pending: Vec<Key>,
  pub accepted: Vec<Key>,
  pub declined: Vec<Key>,
}

impl Poll {
  pub fn new(game: Game, invited: Vec<Key>) -> Self {
    Self { game, pending: invited, accepted: vec![], declined: vec![] }
  }

  /// Moves `key` out of `pending`. A key answers once; anything not pending
  /// is rejected and the poll stays as it was.
  pub fn respond(&mut self, key: Key, answer: Answer) -> Result<(), PollError> {
    let idx = self
      .pending
      .iter()
      .position(|k| *k == key)
      .ok_or(PollError::NotPending(key))?;

    self.pending.remove(idx);
    match answer {
      Answer::Yes => self.accepted.push(key),
      Answer::No => self.declined.push(key),
    }
    Ok(())
  }

  pub fn is_complete(&self) -> bool {
    self.pending.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn keys(s: &str) -> Vec<Key> {
    s.chars().map(Key::new).collect()
  }

  #[test]
  fn game_names() {
    assert_eq!(Game::Cs.title(), "CS");
    assert_eq!(Game::Pl.title(), "PL");
    assert_eq!(Game::from_literal("game_pl"), Some(Game::Pl));
    assert_eq!(Game::from_literal("game_dota"), None);
    assert_eq!(Game::from_command("PUBG"), Some(Game::Pl));
    assert_eq!(Game::from_command("Cs"), Some(Game::Cs));
    assert_eq!(Game::from_command("help"), None);
  }

  #[test]
  fn respond_moves_key() {
    let mut poll = Poll::new(Game::Cs, keys("vt"));
    poll.respond(Key::new('v'), Answer::Yes).unwrap();
    assert_eq!(poll.pending, keys("t"));
    assert_eq!(poll.accepted, keys("v"));
    assert!(poll.declined.is_empty());
    assert!(!poll.is_complete());

    poll.respond(Key::new('t'), Answer::No).unwrap();
    assert!(poll.pending.is_empty());
    assert_eq!(poll.declined, keys("t"));
    assert!(poll.is_complete());
  }

  #[test]
  fn respond_is_one_shot() {
    let mut poll = Poll::new(Game::Pl, keys("vtd"));
    poll.respond(Key::new('t'), Answer::No).unwrap();
    let before = poll.clone();

    assert_eq!(poll.respond(Key::new('t'), Answer::No), Err(PollError::NotPending(Key::new('t'))));
    assert_eq!(poll.respond(Key::new('t'), Answer::Yes), Err(PollError::NotPending(Key::new('t'))));
    assert_eq!(poll, before);
  }

  #[test]
  fn respond_rejects_not_invited() {
    let mut poll = Poll::new(Game::Cs, keys("vt"));
    let before = poll.clone();
    assert!(poll.respond(Key::new('k'), Answer::Yes).is_err());
    assert_eq!(poll, before);
  }

  /// Every ordering of `keys`.
  pub(super) fn permutations(keys: &[Key]) -> Vec<Vec<Key>> {
    if keys.is_empty() {
      return vec![vec![]];
    }

    let mut result = vec![];
    for (idx, &first) in keys.iter().enumerate() {
      let mut rest = keys.to_vec();
      rest.remove(idx);
      for mut tail in permutations(&rest) {
        tail.insert(0, first);
        result.push(tail);
      }
    }
    result
  }

  fn sorted(mut keys: Vec<Key>) -> Vec<Key> {
    keys.sort_by_key(|k| k.as_char());
    keys
  }

  #[test]
  fn answers_keep_partition() {
    let invited = keys("vtdck");
    let orders = permutations(&invited);
    assert_eq!(orders.len(), 120);

    for order in orders {
      for mask in 0..1u32 << invited.len() {
        let mut poll = Poll::new(Game::Cs, invited.clone());
        let (mut yes, mut no) = (vec![], vec![]);

        for (idx, &key) in order.iter().enumerate() {
          let answer = match mask & (1 << idx) != 0 {
            true => Answer::Yes,
            false => Answer::No,
          };
          poll.respond(key, answer).unwrap();
          match answer {
            Answer::Yes => yes.push(key),
            Answer::No => no.push(key),
          }

          assert_eq!(poll.accepted, yes);
          assert_eq!(poll.declined, no);
          let waiting = invited.iter().filter(|k| !order[..=idx].contains(*k)).copied().collect::<Vec<Key>>();
          assert_eq!(poll.pending, waiting);
          assert_eq!(sorted([poll.pending.clone(), yes.clone(), no.clone()].concat()), sorted(invited.clone()));
        }

        assert!(poll.is_complete());
        let done = poll.clone();
        for &key in order.iter().chain(&[Key::new('x')]) {
          assert!(poll.respond(key, Answer::Yes).is_err());
          assert!(poll.respond(key, Answer::No).is_err());
        }
        assert_eq!(poll, done);
      }
    }
  }

  #[test]
  fn stray_answers_keep_partition() {
    let invited = keys("vtdck");
    let mut poll = Poll::new(Game::Cs, invited.clone());
    let answers = [('d', Answer::Yes), ('v', Answer::No), ('d', Answer::No), ('x', Answer::Yes), ('k', Answer::Yes)];

    for (key, answer) in answers {
      _ = poll.respond(Key::new(key), answer);
      let all = [poll.pending.clone(), poll.accepted.clone(), poll.declined.clone()].concat();
      assert_eq!(sorted(all), sorted(invited.clone()));
    }

    assert_eq!(poll.pending, keys("tc"));
    assert_eq!(poll.accepted, keys("dk"));
    assert_eq!(poll.declined, keys("v"));
  }
}
