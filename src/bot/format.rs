use teloxide::{types::BotCommand, utils::html};

use crate::{
  poll::Poll,
  roster::{Key, Roster},
};

pub trait PollFormatter {
  fn describe(&self, roster: &Roster) -> String;
}

impl PollFormatter for Poll {
  fn describe(&self, roster: &Roster) -> String {
    let mut blocks = vec![format!("<b>Ping for {}</b>", self.game.title())];

    if !self.pending.is_empty() {
      blocks.push(format!("<b>Wait for</b>\n{}", user_list(roster, &self.pending, "\n")));
    }

    if !self.accepted.is_empty() {
      blocks.push(format!("Y: {}", user_list(roster, &self.accepted, ", ")));
    }

    if !self.declined.is_empty() {
      blocks.push(format!("N: {}", user_list(roster, &self.declined, ", ")));
    }

    blocks.join("\n\n")
  }
}

pub fn format_roster(roster: &Roster) -> String {
  let members = roster
    .members()
    .iter()
    .map(|m| format!("<code>{}</code> · @{}", m.key, html::escape(&m.handle)))
    .collect::<Vec<String>>()
    .join("\n");
  format!("<b>Тиммейты</b>\n\n{}", members)
}

pub fn format_help(commands: &[BotCommand], roster: &Roster) -> String {
  let commands = commands
    .iter()
    .map(|c| format!("/{} {}", c.command, html::escape(&c.description)))
    .collect::<Vec<String>>()
    .join("\n");
  format!("{}\n\nКлючи склеиваются без пробелов: <code>/cs -{}</code>", commands, html::escape(&roster.alphabet()))
}

fn user_list(roster: &Roster, keys: &[Key], joiner: &str) -> String {
  keys
    .iter()
    .map(|&key| match roster.handle_for(key) {
      Some(handle) => format!("@{}", html::escape(handle)),
      None => html::escape(&key.to_string()),
    })
    .collect::<Vec<String>>()
    .join(joiner)
}
