mod handler;

use std::sync::Arc;

use async_trait::async_trait;
use teloxide::{
  types::{CallbackQuery, InlineKeyboardButton, InlineKeyboardMarkup, UserId},
  Bot,
};

use crate::{
  bot::{BotResult, Dispatch},
  error::BotError,
  poll::{Answer, Payload, PayloadError, Poll},
  roster::Roster,
};

use self::handler::{deny, update};

/// Telegram refuses callback data longer than this.
const MAX_DATA_LEN: usize = 64;

#[derive(Debug, PartialEq, Eq)]
pub enum VoteOutcome {
  /// Not our button, or broken data. No reply at all.
  Ignore,
  /// Presser is not on the roster or was not waited for.
  Denied,
  Update(Poll),
}

pub fn vote_keyboard(poll: &Poll) -> Result<InlineKeyboardMarkup, BotError> {
  let button = |text: &str, answer: Answer| {
    let data = Payload::new(poll.clone(), answer).encode();
    debug!("{:?} encoded to {:?}", answer, data);
    match data.len() > MAX_DATA_LEN {
      true => Err(BotError::PayloadTooLong(data.len())),
      false => Ok(InlineKeyboardButton::callback(text, data)),
    }
  };

  Ok(InlineKeyboardMarkup::new(vec![vec![button("Y", Answer::Yes)?, button("N", Answer::No)?]]))
}

pub fn resolve_vote(roster: &Roster, from: UserId, data: &str) -> VoteOutcome {
  let Payload { mut poll, answer } = match Payload::decode(data) {
    Ok(payload) => payload,
    Err(PayloadError::UnknownGame(_)) => return VoteOutcome::Ignore,
    Err(err) => {
      warn!("Dropping callback {:?}: {}", data, err);
      return VoteOutcome::Ignore;
    }
  };

  let key = match roster.key_for(from) {
    Some(key) => key,
    None => return VoteOutcome::Denied,
  };

  match poll.respond(key, answer) {
    Ok(_) => VoteOutcome::Update(poll),
    Err(_) => VoteOutcome::Denied,
  }
}

#[async_trait]
impl Dispatch for VoteOutcome {
  type Kind = CallbackQuery;

  async fn dispatch(self, bot: Bot, q: CallbackQuery, roster: Arc<Roster>) -> BotResult {
    match self {
      VoteOutcome::Ignore => Ok(()),
      VoteOutcome::Denied => deny(bot, q).await,
      VoteOutcome::Update(poll) => update(bot, q, poll, &roster).await,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{poll::Game, roster::Key};

  const V: UserId = UserId(63923);
  const T: UserId = UserId(97781725);
  const STRANGER: UserId = UserId(42);

  fn keys(s: &str) -> Vec<Key> {
    s.chars().map(Key::new).collect()
  }

  fn callback_data(markup: &InlineKeyboardMarkup) -> Vec<String> {
    use teloxide::types::InlineKeyboardButtonKind;

    markup.inline_keyboard[0]
      .iter()
      .map(|b| match &b.kind {
        InlineKeyboardButtonKind::CallbackData(data) => data.clone(),
        kind => panic!("unexpected button {:?}", kind),
      })
      .collect()
  }

  #[test]
  fn keyboard_carries_both_answers() {
    let markup = vote_keyboard(&Poll::new(Game::Cs, keys("vt"))).unwrap();
    assert_eq!(markup.inline_keyboard.len(), 1);
    assert_eq!(markup.inline_keyboard[0][0].text, "Y");
    assert_eq!(markup.inline_keyboard[0][1].text, "N");
    assert_eq!(callback_data(&markup), vec!["game_cs/vt///y", "game_cs/vt///n"]);
  }

  #[test]
  fn keyboard_refuses_oversized_payload() {
    let invited = "abcdefghijklmnopqrstuvwxyz0123456789abcdefghijklmnopqrstuvwxyz";
    let poll = Poll::new(Game::Cs, keys(invited));
    assert!(matches!(vote_keyboard(&poll), Err(BotError::PayloadTooLong(_))));
  }

  #[test]
  fn invited_user_votes() {
    let outcome = resolve_vote(&Roster::default(), V, "game_cs/vt///y");
    let expected = Poll { game: Game::Cs, pending: keys("t"), accepted: keys("v"), declined: vec![] };
    assert_eq!(outcome, VoteOutcome::Update(expected));

    let outcome = resolve_vote(&Roster::default(), T, "game_cs/t/v//n");
    let expected = Poll { game: Game::Cs, pending: vec![], accepted: keys("v"), declined: keys("t") };
    assert_eq!(outcome, VoteOutcome::Update(expected));
  }

  #[test]
  fn stranger_is_denied() {
    assert_eq!(resolve_vote(&Roster::default(), STRANGER, "game_cs/vt///y"), VoteOutcome::Denied);
  }

  #[test]
  fn roster_member_not_invited_is_denied() {
    assert_eq!(resolve_vote(&Roster::default(), T, "game_pl/v///y"), VoteOutcome::Denied);
  }

  #[test]
  fn second_answer_is_denied() {
    assert_eq!(resolve_vote(&Roster::default(), V, "game_cs/t/v//n"), VoteOutcome::Denied);
  }

  #[test]
  fn foreign_and_broken_payloads_are_ignored() {
    let roster = Roster::default();
    assert_eq!(resolve_vote(&roster, V, "game_dota/vt///y"), VoteOutcome::Ignore);
    assert_eq!(resolve_vote(&roster, STRANGER, "game_dota/vt///y"), VoteOutcome::Ignore);
    assert_eq!(resolve_vote(&roster, V, "game_cs/vt"), VoteOutcome::Ignore);
    assert_eq!(resolve_vote(&roster, V, "game_cs/vt///?"), VoteOutcome::Ignore);
  }
}
