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

//! Corporate action models (dividends)

use crate::common::ApiField;
use serde::{Deserialize, Serialize};

/// Dividend history, most recent first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dividends {
  pub symbol: ApiField,

  pub data: Vec<DividendRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividendRecord {
  pub ex_dividend_date: ApiField,

  pub declaration_date: ApiField,

  pub record_date: ApiField,

  pub payment_date: ApiField,

  /// Cash amount per share
  pub amount: ApiField,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_dividends_deserialization() {
    let json = r#"{
      "symbol": "IBM",
      "data": [
        {"ex_dividend_date": "2024-05-09", "declaration_date": "2024-04-30",
         "record_date": "2024-05-10", "payment_date": "2024-06-10", "amount": "1.67"},
        {"ex_dividend_date": "2024-02-08", "payment_date": "None", "amount": 1.66}
      ]
    }"#;

    let dividends: Dividends = serde_json::from_str(json).unwrap();
    assert_eq!(dividends.data.len(), 2);
    assert_eq!(dividends.data[0].amount.as_f64(), Some(1.67));
    assert_eq!(dividends.data[1].amount.as_deref(), Some("1.66"));
    assert!(dividends.data[1].record_date.is_empty());
  }
}
