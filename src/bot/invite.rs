use crate::{
  poll::Game,
  roster::{Key, Roster},
};

/// Parsed `/cs -vt` or `/pubg -dk`. `keys` is empty when no valid teammate
/// was given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invite {
  pub game: Game,
  pub keys: Vec<Key>,
}

impl Invite {
  /// Returns `None` for anything that is not a game command addressed to this bot.
  ///
  /// Commands and keys are case-insensitive. Keys are read up to the first
  /// character outside the roster alphabet, repeats are dropped. A dash glued
  /// to the command (`/cs-vt`) still names the game but carries no keys.
  pub fn parse(text: &str, bot_username: &str, roster: &Roster) -> Option<Self> {
    let text = text.trim_start();
    let (head, args) = match text.split_once(char::is_whitespace) {
      Some((head, args)) => (head, args.trim_start()),
      None => (text, ""),
    };

    let head = head.strip_prefix('/')?;
    let (head, glued) = match head.split_once('-') {
      Some((head, _)) => (head, true),
      None => (head, false),
    };
    let command = match head.split_once('@') {
      Some((command, mention)) if mention.eq_ignore_ascii_case(bot_username) => command,
      Some(_) => return None,
      None => head,
    };
    let game = Game::from_command(command)?;

    let mut keys: Vec<Key> = vec![];
    if let Some(raw) = args.strip_prefix('-').filter(|_| !glued) {
      for key in raw.chars().map_while(|c| roster.key(c)) {
        if !keys.contains(&key) {
          keys.push(key);
        }
      }
    }

    Some(Self { game, keys })
  }
}
