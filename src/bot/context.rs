use std::{ops::Deref, sync::Arc};
use teloxide::{
  payloads::SendMessageSetters,
  requests::Requester,
  types::{ChatId, Message, ParseMode, UserId},
  Bot,
};

use crate::{bot::BotResult, roster::Roster};

pub struct Context {
  bot: Bot,
  pub msg: Message,
  pub roster: Arc<Roster>,
}

impl Deref for Context {
  type Target = Bot;

  fn deref(&self) -> &Self::Target {
    &self.bot
  }
}

impl Context {
  pub fn new(bot: Bot, msg: Message, roster: Arc<Roster>) -> Self {
    Self { bot, msg, roster }
  }

  pub fn chat_id(&self) -> ChatId {
    self.msg.chat.id
  }

  pub fn user_id(&self) -> UserId {
    self.msg.from().map(|f| f.id).unwrap_or(UserId(0))
  }

  pub fn sender_name(&self) -> String {
    self.msg.from().map(|f| f.full_name()).unwrap_or_default()
  }

  pub async fn reply<T: Into<String>>(&self, text: T) -> BotResult {
    self
      .bot
      .send_message(self.chat_id(), text)
      .parse_mode(ParseMode::Html)
      .disable_web_page_preview(true)
      .reply_to_message_id(self.msg.id)
      .await?;
    Ok(())
  }

  /// Logs a failed handler. Usage errors are also replied to the chat.
  pub async fn report(&self, result: BotResult) -> BotResult {
    let err = match result {
      Ok(_) => return Ok(()),
      Err(err) => err,
    };

    error!("{}", err);
    match err.user_notice() {
      Some(notice) => self.reply(notice).await,
      None => Ok(()),
    }
  }
}
