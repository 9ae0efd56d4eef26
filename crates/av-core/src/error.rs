use thiserror::Error;

/// The main error type for av-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key missing or rejected by the API
  #[error("API key error: {0}")]
  ApiKey(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// API rate limit exceeded
  #[error("Rate limit exceeded: {0}")]
  RateLimit(String),

  /// Invalid response from API
  #[error("Invalid API response: {0}")]
  InvalidResponse(String),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// API error from AlphaVantage
  #[error("API error: {0}")]
  Api(String),

  /// Parse error for data processing
  #[error("Parse error: {0}")]
  Parse(String),

  /// Ticker symbol that cannot be used for requests or file names
  #[error("Invalid ticker: {0:?}")]
  InvalidTicker(String),
}

impl Error {
  /// Errors after which no further request with the same credentials can succeed.
  pub fn is_fatal(&self) -> bool {
    matches!(self, Error::ApiKey(_) | Error::Config(_))
  }
}

/// Result type alias for av-* crates
pub type Result<T> = std::result::Result<T, Error>;
