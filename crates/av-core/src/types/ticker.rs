use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MAX_TICKER_LEN: usize = 16;

/// A normalised ticker symbol.
///
/// Tickers are trimmed and upper-cased on construction. Only ASCII letters,
/// digits, `.` and `-` are accepted, since the symbol ends up both in a query
/// string and in the artifact file names (`data/{TICKER}_raw_data.json`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
  pub fn new(raw: &str) -> Result<Self> {
    let symbol = raw.trim().to_ascii_uppercase();

    if symbol.is_empty() || symbol.len() > MAX_TICKER_LEN {
      return Err(Error::InvalidTicker(raw.to_string()));
    }
    if symbol.starts_with('.') {
      return Err(Error::InvalidTicker(raw.to_string()));
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-') {
      return Err(Error::InvalidTicker(raw.to_string()));
    }

    Ok(Self(symbol))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Ticker {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl FromStr for Ticker {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Ticker::new(s)
  }
}

impl TryFrom<String> for Ticker {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> {
    Ticker::new(&value)
  }
}

impl From<Ticker> for String {
  fn from(ticker: Ticker) -> Self {
    ticker.0
  }
}

impl AsRef<str> for Ticker {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ticker_is_normalised() {
    let ticker = Ticker::new("  aapl ").unwrap();
    assert_eq!(ticker.as_str(), "AAPL");
    assert_eq!(ticker.to_string(), "AAPL");
  }

  #[test]
  fn test_ticker_accepts_share_classes() {
    assert_eq!(Ticker::new("brk.b").unwrap().as_str(), "BRK.B");
    assert_eq!(Ticker::new("bf-a").unwrap().as_str(), "BF-A");
  }

  #[test]
  fn test_ticker_rejects_bad_input() {
    for raw in ["", "   ", "../etc", "AA PL", "A/B", ".HIDDEN", "ABCDEFGHIJKLMNOPQ"] {
      assert!(
        matches!(Ticker::new(raw), Err(Error::InvalidTicker(_))),
        "expected {raw:?} to be rejected"
      );
    }
  }

  #[test]
  fn test_ticker_serde_roundtrip_validates() {
    let ticker: Ticker = serde_json::from_str("\"msft\"").unwrap();
    assert_eq!(ticker.as_str(), "MSFT");
    assert!(serde_json::from_str::<Ticker>("\"a/b\"").is_err());
  }
}
