//! Configuration management for AlphaVantage client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main configuration struct for AlphaVantage client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// AlphaVantage API key
  pub api_key: String,

  /// API rate limit (requests per minute)
  pub rate_limit: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Maximum retries for failed requests
  pub max_retries: u32,

  /// Full query endpoint, e.g. `https://www.alphavantage.co/query`
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("ALPHA_VANTAGE_API_KEY")
      .ok()
      .filter(|key| !key.trim().is_empty())
      .ok_or_else(|| {
        Error::ApiKey(
          "ALPHA_VANTAGE_API_KEY not set. Store it in the environment or a .env file".to_string(),
        )
      })?;

    let rate_limit = setting("AV_RATE_LIMIT", crate::DEFAULT_RATE_LIMIT)?;
    let timeout_secs = setting("AV_TIMEOUT_SECS", 30)?;
    let max_retries = setting("AV_MAX_RETRIES", 0)?;

    let base_url =
      env::var("AV_BASE_URL").unwrap_or_else(|_| crate::ALPHA_VANTAGE_BASE_URL.to_string());

    Ok(Config { api_key, rate_limit, timeout_secs, max_retries, base_url })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      timeout_secs: 30,
      max_retries: 0,
      base_url: crate::ALPHA_VANTAGE_BASE_URL.to_string(),
    }
  }

  /// Point the config at another endpoint (mock servers, proxies)
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Check the values a client cannot work without.
  pub fn validate(&self) -> Result<()> {
    if self.api_key.trim().is_empty() {
      return Err(Error::ApiKey("API key is empty".to_string()));
    }
    if self.base_url.trim().is_empty() {
      return Err(Error::Config("base_url is empty".to_string()));
    }
    Ok(())
  }
}

/// Numeric override from the environment, or `default` when unset
fn setting<T: FromStr>(name: &str, default: T) -> Result<T> {
  parse_setting(name, env::var(name).ok(), default)
}

fn parse_setting<T: FromStr>(name: &str, value: Option<String>, default: T) -> Result<T> {
  match value {
    None => Ok(default),
    Some(raw) => {
      raw.trim().parse().map_err(|_| Error::Config(format!("Invalid {}: {:?}", name, raw)))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_from_env() {
    env::set_var("ALPHA_VANTAGE_API_KEY", "test_key");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, "test_key");
    assert_eq!(config.rate_limit, 75);
    assert_eq!(config.max_retries, 0);
  }

  #[test]
  fn test_default_with_key() {
    let config = Config::default_with_key("abc".to_string());
    assert_eq!(config.base_url, crate::ALPHA_VANTAGE_BASE_URL);
    assert_eq!(config.timeout_secs, 30);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_validate_rejects_empty_key() {
    let config = Config::default_with_key("  ".to_string());
    assert!(matches!(config.validate(), Err(Error::ApiKey(_))));
  }

  #[test]
  fn test_with_base_url() {
    let config =
      Config::default_with_key("abc".to_string()).with_base_url("http://127.0.0.1:9000/query");
    assert_eq!(config.base_url, "http://127.0.0.1:9000/query");
  }

  #[test]
  fn test_numeric_override_parsing() {
    assert_eq!(parse_setting("AV_RATE_LIMIT", None, 75u32).unwrap(), 75);
    assert_eq!(parse_setting("AV_RATE_LIMIT", Some(" 600 ".to_string()), 75u32).unwrap(), 600);

    let err = parse_setting("AV_TIMEOUT_SECS", Some("thirty".to_string()), 30u64).unwrap_err();
    assert!(matches!(err, Error::Config(ref msg) if msg.contains("AV_TIMEOUT_SECS")));
    assert!(matches!(
      parse_setting("AV_MAX_RETRIES", Some("-1".to_string()), 0u32),
      Err(Error::Config(_))
    ));
  }
}
