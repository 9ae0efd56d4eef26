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

//! Earnings history, analyst estimates and the earnings calendar

use crate::common::ApiField;
use serde::{Deserialize, Serialize};

/// Earnings data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Earnings {
  /// Stock symbol
  pub symbol: ApiField,

  /// Annual earnings
  #[serde(rename = "annualEarnings")]
  pub annual_earnings: Vec<AnnualEarnings>,

  /// Quarterly earnings
  #[serde(rename = "quarterlyEarnings")]
  pub quarterly_earnings: Vec<QuarterlyEarnings>,
}

/// Annual earnings report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnualEarnings {
  /// Fiscal date ending
  #[serde(rename = "fiscalDateEnding")]
  pub fiscal_date_ending: ApiField,

  /// Reported EPS
  #[serde(rename = "reportedEPS")]
  pub reported_eps: ApiField,
}

/// Quarterly earnings report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuarterlyEarnings {
  /// Fiscal date ending
  #[serde(rename = "fiscalDateEnding")]
  pub fiscal_date_ending: ApiField,

  /// Reported date
  #[serde(rename = "reportedDate")]
  pub reported_date: ApiField,

  /// Reported EPS
  #[serde(rename = "reportedEPS")]
  pub reported_eps: ApiField,

  /// Estimated EPS
  #[serde(rename = "estimatedEPS")]
  pub estimated_eps: ApiField,

  /// Surprise, in currency units per share
  #[serde(rename = "surprise")]
  pub surprise: ApiField,

  /// Surprise in percentage points (`"4.2"` means 4.2%)
  #[serde(rename = "surprisePercentage")]
  pub surprise_percentage: ApiField,
}

/// Analyst EPS and revenue estimates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarningsEstimates {
  pub symbol: ApiField,

  pub estimates: Vec<EarningsEstimate>,
}

/// Estimates for one fiscal period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarningsEstimate {
  /// Fiscal period end
  pub date: ApiField,

  /// e.g. "current quarter", "next fiscal year"
  pub horizon: ApiField,

  pub eps_estimate_average: ApiField,

  pub eps_estimate_analyst_count: ApiField,

  pub revenue_estimate_average: ApiField,
}

/// One row of the EARNINGS_CALENDAR CSV
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarningsCalendarEntry {
  pub symbol: ApiField,

  pub name: ApiField,

  #[serde(rename = "reportDate")]
  pub report_date: ApiField,

  #[serde(rename = "fiscalDateEnding")]
  pub fiscal_date_ending: ApiField,

  /// Consensus EPS estimate
  pub estimate: ApiField,

  pub currency: ApiField,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_earnings_deserialization() {
    let json = r#"{
      "symbol": "IBM",
      "annualEarnings": [{"fiscalDateEnding": "2023-12-31", "reportedEPS": "9.61"}],
      "quarterlyEarnings": [{
        "fiscalDateEnding": "2024-03-31",
        "reportedDate": "2024-04-24",
        "reportedEPS": "1.68",
        "estimatedEPS": "1.6",
        "surprise": "0.08",
        "surprisePercentage": "5"
      }]
    }"#;

    let earnings: Earnings = serde_json::from_str(json).unwrap();
    assert_eq!(earnings.annual_earnings.len(), 1);
    assert_eq!(earnings.quarterly_earnings[0].reported_eps.as_deref(), Some("1.68"));
    assert_eq!(earnings.quarterly_earnings[0].surprise_percentage.as_f64(), Some(5.0));
  }

  #[test]
  fn test_calendar_row_from_csv_columns() {
    let json = r#"{
      "symbol": "IBM",
      "name": "International Business Machines Corp",
      "reportDate": "2024-07-24",
      "fiscalDateEnding": "2024-06-30",
      "estimate": "2.19",
      "currency": "USD",
      "timeOfTheDay": "post-market"
    }"#;

    let entry: EarningsCalendarEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.report_date.as_deref(), Some("2024-07-24"));
    assert_eq!(entry.estimate.as_deref(), Some("2.19"));
  }

  #[test]
  fn test_estimates_with_numeric_counts() {
    let json = r#"{"estimates": [{"date": "2024-12-31", "eps_estimate_analyst_count": 14}]}"#;
    let estimates: EarningsEstimates = serde_json::from_str(json).unwrap();
    assert_eq!(estimates.estimates[0].eps_estimate_analyst_count.as_deref(), Some("14"));
    assert!(estimates.estimates[0].horizon.is_empty());
  }
}
