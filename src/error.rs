use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
  #[error("Ошибка: TeloxideAPI: {0}")]
  Api(#[from] teloxide::ApiError),

  #[error("Ошибка: TeloxideRequest: {0}")]
  Request(#[from] teloxide::RequestError),

  #[error("Ошибка: кнопка не влезает в лимит Telegram ({0} байт)")]
  PayloadTooLong(usize),

  #[error("Не указаны тиммейты. Доступные ключи: {keys}\nПример: <code>{example}</code>")]
  NoTeammates { keys: String, example: String },
}

impl BotError {
  pub fn no_teammates(alphabet: &str, command: &str) -> Self {
    let keys = alphabet
      .chars()
      .map(|c| format!("<code>{}</code>", c))
      .collect::<Vec<String>>()
      .join(", ");
    let example = format!("/{} -{}", command, alphabet.chars().take(2).collect::<String>());
    Self::NoTeammates { keys, example }
  }

  /// Text worth showing in the chat. Transport failures stay in the log.
  pub fn user_notice(&self) -> Option<String> {
    match self {
      Self::NoTeammates { .. } | Self::PayloadTooLong(_) => Some(self.to_string()),
      Self::Api(_) | Self::Request(_) => None,
    }
  }
}
