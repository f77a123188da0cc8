use teloxide::{payloads::SendMessageSetters, requests::Requester, types::ParseMode};

use crate::poll::Poll;

use super::{
  bot_commands,
  callback::vote_keyboard,
  context::Context,
  format::{format_help, format_roster, PollFormatter},
  invite::Invite,
  BotResult,
};

impl Context {
  pub async fn reply_help(&self) -> BotResult {
    self.reply(format_help(&bot_commands(), &self.roster)).await
  }

  pub async fn reply_roster(&self) -> BotResult {
    self.reply(format_roster(&self.roster)).await
  }

  pub async fn send_poll(&self, invite: Invite) -> BotResult {
    let poll = Poll::new(invite.game, invite.keys);
    let markup = vote_keyboard(&poll)?;

    self
      .send_message(self.chat_id(), poll.describe(&self.roster))
      .parse_mode(ParseMode::Html)
      .reply_to_message_id(self.msg.id)
      .reply_markup(markup)
      .await?;
    Ok(())
  }
}
