use teloxide::{
  payloads::{AnswerCallbackQuerySetters, EditMessageTextSetters},
  requests::Requester,
  types::{CallbackQuery, ParseMode},
  Bot,
};

use super::vote_keyboard;
use crate::{
  bot::{format::PollFormatter, BotResult},
  poll::Poll,
  roster::Roster,
};

const DENIED_CACHE_SECS: u32 = 1800;

pub(super) async fn deny(bot: Bot, q: CallbackQuery) -> BotResult {
  bot
    .answer_callback_query(q.id)
    .text("Вас не спрашивали")
    .show_alert(true)
    .cache_time(DENIED_CACHE_SECS)
    .await?;
  Ok(())
}

pub(super) async fn update(bot: Bot, q: CallbackQuery, poll: Poll, roster: &Roster) -> BotResult {
  bot.answer_callback_query(q.id).await?;

  let msg = match q.message {
    Some(msg) => msg,
    None => {
      warn!("Vote from {} has no message to edit", q.from.id);
      return Ok(());
    }
  };

  let edit = bot
    .edit_message_text(msg.chat.id, msg.id, poll.describe(roster))
    .parse_mode(ParseMode::Html);

  // everyone answered, the buttons go away
  match poll.is_complete() {
    true => edit.await?,
    false => edit.reply_markup(vote_keyboard(&poll)?).await?,
  };
  Ok(())
}
