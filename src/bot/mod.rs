use std::sync::Arc;

use async_trait::async_trait;
use teloxide::{
  dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler},
  dptree as dp,
  macros::BotCommands,
  prelude::Dispatcher,
  requests::Requester,
  types::{BotCommand, CallbackQuery, Me, Message, Update},
  utils::command::BotCommands as _,
  Bot,
};

use crate::{error::BotError, poll::Game, roster::Roster};

use self::{context::Context, invite::Invite};

mod callback;
mod context;
mod format;
mod invite;
mod replies;

pub type BotResult = Result<(), BotError>;

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "snake_case")]
pub enum Command {
  #[command(description = "Старт")]
  Start,

  #[command(description = "Список команд")]
  Help,

  #[command(description = "Ключи тиммейтов")]
  Roster,
}

#[async_trait]
pub trait Dispatch {
  type Kind;

  async fn dispatch(self, bot: Bot, kind: Self::Kind, roster: Arc<Roster>) -> BotResult;
}

#[async_trait]
impl Dispatch for Command {
  type Kind = Message;

  async fn dispatch(self, bot: Bot, msg: Message, roster: Arc<Roster>) -> BotResult {
    let ctx = Context::new(bot, msg, roster);
    info!("Command {:?} from {} [{}]", self, ctx.sender_name(), ctx.user_id());

    let result = match self {
      Command::Start | Command::Help => ctx.reply_help().await,
      Command::Roster => ctx.reply_roster().await,
    };
    ctx.report(result).await
  }
}

#[async_trait]
impl Dispatch for Invite {
  type Kind = Message;

  async fn dispatch(self, bot: Bot, msg: Message, roster: Arc<Roster>) -> BotResult {
    let ctx = Context::new(bot, msg, roster);
    info!("Ping {:?} from {} [{}]", self, ctx.sender_name(), ctx.user_id());

    let result = match self.keys.is_empty() {
      true => Err(BotError::no_teammates(&ctx.roster.alphabet(), self.game.command())),
      false => ctx.send_poll(self).await,
    };
    ctx.report(result).await
  }
}

/// Every command the bot answers to, game pings included.
pub fn bot_commands() -> Vec<BotCommand> {
  let mut commands = Command::bot_commands();
  commands.extend(
    Game::ALL
      .into_iter()
      .map(|g| BotCommand::new(g.command(), format!("-[ключи] Позвать тиммейтов в {}", g.title()))),
  );
  commands
}

pub async fn start(bot: Bot, roster: Roster) {
  bot
    .set_my_commands(bot_commands())
    .await
    .expect("Couldn't set bot commands");

  let me = bot.get_me().await.expect("Login error");

  bot.delete_webhook().await.expect("Couldn't delete webhook");
  info!("Logged in as {} [@{}]", me.full_name(), me.username());
  info!("Roster: {}", roster.alphabet());
  info!("Started");

  Dispatcher::builder(bot, dispatch_scheme())
    .dependencies(dp::deps![Arc::new(roster)])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;
}

fn dispatch_scheme() -> UpdateHandler<BotError> {
  let message_handler = Update::filter_message()
    .branch(
      dp::filter_map(|msg: Message, me: Me, roster: Arc<Roster>| {
        msg
          .text()
          .and_then(|text| Invite::parse(text, me.username(), &roster))
      })
      .endpoint(invite_handler),
    )
    .branch(dp::entry().filter_command::<Command>().endpoint(command_handler));

  let callback_handler = Update::filter_callback_query().endpoint(dispatch_callback_query);

  dp::entry()
    .branch(message_handler)
    .branch(callback_handler)
}

async fn command_handler(bot: Bot, msg: Message, cmd: Command, roster: Arc<Roster>) -> BotResult {
  cmd.dispatch(bot, msg, roster).await
}

async fn invite_handler(bot: Bot, msg: Message, invite: Invite, roster: Arc<Roster>) -> BotResult {
  invite.dispatch(bot, msg, roster).await
}

async fn dispatch_callback_query(bot: Bot, q: CallbackQuery, roster: Arc<Roster>) -> BotResult {
  let outcome = match q.data.as_deref() {
    Some(data) => callback::resolve_vote(&roster, q.from.id, data),
    None => return Ok(()),
  };

  info!("Vote {:?} from {} [{}]: {:?}", q.data, q.from.full_name(), q.from.id, outcome);

  if let Err(err) = outcome.dispatch(bot, q, roster).await {
    error!("{}", err);
  }
  Ok(())
}
