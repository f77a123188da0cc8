use std::str::FromStr;

macro_rules! env_var {
  ($var_name: ident) => {
    pub const $var_name: &'static str = stringify!($var_name);
  };
}

env_var!(TELOXIDE_TOKEN);
env_var!(ROSTER);

pub fn parse_var<T: FromStr>(var: &'static str) -> Option<T> {
  self::var(var).and_then(|x| x.parse().ok())
}

pub fn var(var: &'static str) -> Option<String> {
  dotenvy::var(var).ok()
}

pub fn check<T: FromStr>(var: &'static str) -> bool {
  parse_var::<T>(var)
    .is_none()
    .then(|| error!("Var {}: {} is not present", var, std::any::type_name::<T>().rsplit("::").next().unwrap_or("?")))
    .is_none()
}

pub fn check_env_vars() {
  info!("Validating .env vars");
  let mut failed = false;

  failed |= !check::<String>(TELOXIDE_TOKEN);

  match var(ROSTER) {
    Some(_) => info!("Using roster from {}", ROSTER),
    None => info!("{} is not set, using built-in roster", ROSTER),
  }

  failed.then(|| {
    error!("Not all .env args are set");
    panic!("Not all .env args are set");
  });
}
