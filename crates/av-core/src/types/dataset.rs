use crate::FuncType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One logical category of fundamental data, fetched with a single API call.
///
/// The declaration order is the fetch order, and the serde names are the keys
/// used in the raw-data artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
  Overview,
  IncomeStatement,
  BalanceSheet,
  CashFlows,
  EarningsHistory,
  EarningsEstimates,
  EarningsCalendar,
  Dividends,
}

impl Dataset {
  /// Every dataset, in fetch order.
  pub const ALL: [Dataset; 8] = [
    Dataset::Overview,
    Dataset::IncomeStatement,
    Dataset::BalanceSheet,
    Dataset::CashFlows,
    Dataset::EarningsHistory,
    Dataset::EarningsEstimates,
    Dataset::EarningsCalendar,
    Dataset::Dividends,
  ];

  /// API function that serves this dataset
  pub fn func_type(self) -> FuncType {
    match self {
      Dataset::Overview => FuncType::Overview,
      Dataset::IncomeStatement => FuncType::IncomeStatement,
      Dataset::BalanceSheet => FuncType::BalanceSheet,
      Dataset::CashFlows => FuncType::CashFlow,
      Dataset::EarningsHistory => FuncType::Earnings,
      Dataset::EarningsEstimates => FuncType::EarningsEstimates,
      Dataset::EarningsCalendar => FuncType::EarningsCalendar,
      Dataset::Dividends => FuncType::Dividends,
    }
  }

  /// Key used in the raw-data artifact
  pub fn key(self) -> &'static str {
    match self {
      Dataset::Overview => "overview",
      Dataset::IncomeStatement => "income_statement",
      Dataset::BalanceSheet => "balance_sheet",
      Dataset::CashFlows => "cash_flows",
      Dataset::EarningsHistory => "earnings_history",
      Dataset::EarningsEstimates => "earnings_estimates",
      Dataset::EarningsCalendar => "earnings_calendar",
      Dataset::Dividends => "dividends",
    }
  }

  /// Human readable label for progress output
  pub fn label(self) -> &'static str {
    match self {
      Dataset::Overview => "Company Overview",
      Dataset::IncomeStatement => "Income Statement",
      Dataset::BalanceSheet => "Balance Sheet",
      Dataset::CashFlows => "Statement of Cash Flows",
      Dataset::EarningsHistory => "Earnings History",
      Dataset::EarningsEstimates => "Earnings Estimates",
      Dataset::EarningsCalendar => "Earnings Calendar (Upcoming 12 Months)",
      Dataset::Dividends => "Dividend Information",
    }
  }

  /// Whether the API answers this dataset with CSV instead of JSON
  pub fn is_csv(self) -> bool {
    matches!(self, Dataset::EarningsCalendar)
  }
}

impl fmt::Display for Dataset {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}
