/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Common types shared by the fundamentals response models

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder used when a field is missing from an API payload.
pub const NOT_AVAILABLE: &str = "N/A";

/// A single value from an AlphaVantage payload.
///
/// The API reports nearly everything as strings (`"2500000000"`, `"None"`),
/// but cached or hand-edited payloads may carry plain JSON numbers. Both are
/// kept as text; `null` and absent keys become an empty field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ApiField(Option<String>);

impl ApiField {
  pub fn new(value: impl Into<String>) -> Self {
    Self(Some(value.into()))
  }

  pub fn empty() -> Self {
    Self(None)
  }

  pub fn as_deref(&self) -> Option<&str> {
    self.0.as_deref()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_none()
  }

  /// The raw value, or the `"N/A"` placeholder when absent.
  pub fn or_na(&self) -> String {
    self.0.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
  }

  /// The same field with an absent value replaced by `"N/A"`.
  pub fn with_placeholder(&self) -> ApiField {
    ApiField(Some(self.or_na()))
  }

  /// Parse the value as a number. AlphaVantage uses `"None"` and `"-"` for
  /// missing figures; those parse as `None` too.
  pub fn as_f64(&self) -> Option<f64> {
    let value = self.0.as_deref()?.trim();
    if value.is_empty() || value == "None" || value == "-" {
      return None;
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
  }
}

impl PartialEq<&str> for ApiField {
  fn eq(&self, other: &&str) -> bool {
    self.0.as_deref() == Some(*other)
  }
}

impl From<&str> for ApiField {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl<'de> Deserialize<'de> for ApiField {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
      Value::Null => ApiField(None),
      Value::String(s) => ApiField(Some(s)),
      Value::Number(n) => ApiField(Some(n.to_string())),
      Value::Bool(b) => ApiField(Some(b.to_string())),
      // Nested values are never expected in a scalar slot; keep the JSON text.
      other => ApiField(Some(other.to_string())),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Default, Deserialize)]
  #[serde(default)]
  struct Sample {
    a: ApiField,
    b: ApiField,
  }

  #[test]
  fn test_accepts_strings_and_numbers() {
    let sample: Sample = serde_json::from_str(r#"{"a": "12.5", "b": 7}"#).unwrap();
    assert_eq!(sample.a.as_deref(), Some("12.5"));
    assert_eq!(sample.b.as_deref(), Some("7"));
    assert_eq!(sample.b.as_f64(), Some(7.0));
  }

  #[test]
  fn test_missing_and_null_are_empty() {
    let sample: Sample = serde_json::from_str(r#"{"a": null}"#).unwrap();
    assert!(sample.a.is_empty());
    assert!(sample.b.is_empty());
    assert_eq!(sample.a.or_na(), "N/A");
  }

  #[test]
  fn test_none_string_is_kept_but_not_numeric() {
    let field = ApiField::new("None");
    assert_eq!(field.or_na(), "None");
    assert_eq!(field.as_f64(), None);
    assert_eq!(ApiField::new("-").as_f64(), None);
  }

  #[test]
  fn test_placeholder_and_str_comparison() {
    assert_eq!(ApiField::empty().with_placeholder(), "N/A");
    assert_eq!(ApiField::new("IBM").with_placeholder(), "IBM");
    assert!(ApiField::empty() != "");
  }
}
