use teloxide::Bot;

#[macro_use]
extern crate log;

mod bot;
mod env;
mod error;
mod poll;
mod roster;

#[tokio::main]
async fn main() {
  init();
  let roster = roster::Roster::from_env().expect("Couldn't load roster");
  let bot = Bot::from_env();
  bot::start(bot, roster).await
}

fn init() {
  dotenvy::dotenv().ok();
  pretty_env_logger::init();
  env::check_env_vars();
}
