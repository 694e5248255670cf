use std::{
  env::{self, VarError},
  fmt::Display,
  path::PathBuf,
  str::FromStr,
};

use libvigimatch::prelude::{DSC_FEED_URL, ScorePolicy};

use crate::api::errors::AppError;

#[derive(Clone, Debug)]
pub struct Config {
  pub env: Env,
  pub listen_addr: String,

  // Collaborators
  pub feed_url: String,
  pub registry_path: PathBuf,
  pub cache_path: PathBuf,

  // Match policy overrides
  pub accept_threshold: f64,
  pub exact_threshold: f64,
}

impl Config {
  pub fn from_env() -> Result<Config, AppError> {
    let config = Config {
      env: Env::from(env::var("ENV").unwrap_or("dev".into())),
      listen_addr: env::var("LISTEN_ADDR").unwrap_or("0.0.0.0:8000".into()),
      feed_url: env::var("FEED_URL").unwrap_or(DSC_FEED_URL.into()),
      registry_path: env::var("REGISTRY_PATH").unwrap_or("data/registry.json".into()).into(),
      cache_path: env::var("CACHE_PATH").unwrap_or("data/seen_alerts.json".into()).into(),
      accept_threshold: parse_env("ACCEPT_THRESHOLD", 0.5)?,
      exact_threshold: parse_env("EXACT_THRESHOLD", 0.85)?,
    };

    if !(0.0..=1.0).contains(&config.accept_threshold) || !(0.0..=1.0).contains(&config.exact_threshold) {
      return Err(AppError::ConfigError("match thresholds must lie within [0, 1]".into()));
    }

    if config.exact_threshold < config.accept_threshold {
      return Err(AppError::ConfigError("EXACT_THRESHOLD cannot be lower than ACCEPT_THRESHOLD".into()));
    }

    Ok(config)
  }

  pub fn policy(&self) -> ScorePolicy {
    ScorePolicy {
      accept: self.accept_threshold,
      exact: self.exact_threshold,
      ..Default::default()
    }
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Env {
  Dev,
  Production,
}

impl From<String> for Env {
  fn from(value: String) -> Self {
    match value.as_ref() {
      "production" => Env::Production,
      _ => Env::Dev,
    }
  }
}

pub fn parse_env<T>(name: &str, default: T) -> anyhow::Result<T>
where
  T: FromStr,
  T::Err: Display,
{
  match env::var(name) {
    Ok(value) if value.is_empty() => Ok(default),
    Ok(value) => Ok(value.parse::<T>().map_err(|err| AppError::ConfigError(format!("could not read {name}: {err}")))?),
    Err(err) => match err {
      VarError::NotPresent => Ok(default),
      _ => Err(AppError::ConfigError(format!("could not read {name}: {err}")).into()),
    },
  }
}

#[cfg(test)]
mod tests {
  use super::{Config, Env};

  use std::env;

  #[serial_test::serial]
  #[test]
  fn parse_config_from_env() {
    unsafe {
      env::set_var("ENV", "production");
      env::set_var("LISTEN_ADDR", "0.0.0.0:8080");
      env::set_var("FEED_URL", "http://feed");
      env::set_var("REGISTRY_PATH", "/tmp/registry.json");
      env::set_var("CACHE_PATH", "/tmp/seen.json");
      env::set_var("ACCEPT_THRESHOLD", "0.6");
      env::set_var("EXACT_THRESHOLD", "0.9");
    }

    let config = Config::from_env().unwrap();

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.listen_addr, "0.0.0.0:8080");
    assert_eq!(config.feed_url, "http://feed");
    assert_eq!(config.registry_path.to_str(), Some("/tmp/registry.json"));
    assert_eq!(config.accept_threshold, 0.6);
    assert_eq!(config.exact_threshold, 0.9);

    let policy = config.policy();

    assert_eq!(policy.accept, 0.6);
    assert_eq!(policy.exact, 0.9);
    assert_eq!(policy.ingredient_exact, 0.6);

    unsafe {
      for name in ["ENV", "LISTEN_ADDR", "FEED_URL", "REGISTRY_PATH", "CACHE_PATH", "ACCEPT_THRESHOLD", "EXACT_THRESHOLD"] {
        env::remove_var(name);
      }
    }
  }

  #[serial_test::serial]
  #[test]
  fn invalid_threshold_combination() {
    unsafe {
      env::set_var("ACCEPT_THRESHOLD", "0.9");
      env::set_var("EXACT_THRESHOLD", "0.5");
    }

    assert!(Config::from_env().is_err());

    unsafe {
      env::set_var("ACCEPT_THRESHOLD", "1.5");
      env::set_var("EXACT_THRESHOLD", "");
    }

    assert!(Config::from_env().is_err());

    unsafe {
      env::remove_var("ACCEPT_THRESHOLD");
      env::remove_var("EXACT_THRESHOLD");
    }
  }

  #[serial_test::serial]
  #[test]
  fn parse_env() {
    unsafe {
      env::set_var("FLOAT", "0.42");
      env::set_var("NOT_A_FLOAT", "abc");
    }

    assert_eq!(super::parse_env::<f64>("FLOAT", 0.0).unwrap(), 0.42);
    assert_eq!(super::parse_env::<f64>("ABSENT", 0.7).unwrap(), 0.7);
    assert!(super::parse_env::<f64>("NOT_A_FLOAT", 0.0).is_err());

    unsafe {
      env::remove_var("FLOAT");
      env::remove_var("NOT_A_FLOAT");
    }
  }
}
