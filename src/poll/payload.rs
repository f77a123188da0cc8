use thiserror::Error;

use super::{Answer, Game, Poll};
use crate::roster::Key;

const DELIMITER: &str = "/";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PayloadError {
  #[error("unknown game {0:?}")]
  UnknownGame(String),

  #[error("expected 5 fields, got {0}")]
  Malformed(usize),

  #[error("unknown answer {0:?}")]
  UnknownAnswer(String),
}

/// Poll snapshot plus the answer a particular button stands for.
///
/// Wire format: `game/pending/accepted/declined/answer`, e.g. `game_cs/t/v//y`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payload {
  pub poll: Poll,
  pub answer: Answer,
}

impl Payload {
  pub fn new(poll: Poll, answer: Answer) -> Self {
    Self { poll, answer }
  }

  pub fn encode(&self) -> String {
    fn join(keys: &[Key]) -> String {
      keys.iter().map(|k| k.as_char()).collect()
    }

    [
      self.poll.game.literal().to_string(),
      join(&self.poll.pending),
      join(&self.poll.accepted),
      join(&self.poll.declined),
      self.answer.tag().to_string(),
    ]
    .join(DELIMITER)
  }

  /// Key characters are taken as-is; checking them against the roster is
  /// up to the caller.
  pub fn decode(data: &str) -> Result<Self, PayloadError> {
    fn split(keys: &str) -> Vec<Key> {
      keys.chars().map(Key::new).collect()
    }

    let fields = data.split(DELIMITER).collect::<Vec<&str>>();
    let game = Game::from_literal(fields[0]).ok_or_else(|| PayloadError::UnknownGame(fields[0].into()))?;

    let &[_, pending, accepted, declined, answer] = fields.as_slice() else {
      return Err(PayloadError::Malformed(fields.len()));
    };

    let answer = Answer::from_tag(answer).ok_or_else(|| PayloadError::UnknownAnswer(answer.into()))?;
    let poll = Poll { game, pending: split(pending), accepted: split(accepted), declined: split(declined) };
    Ok(Self { poll, answer })
  }
}
