pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{Dataset, Ticker};

/// The AlphaVantage API functions used by the fundamentals pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuncType {
  // Company fundamentals
  Overview,
  IncomeStatement,
  BalanceSheet,
  CashFlow,

  // Earnings
  Earnings,
  EarningsEstimates,
  EarningsCalendar,

  // Corporate actions
  Dividends,
}

impl std::fmt::Display for FuncType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      FuncType::Overview => write!(f, "OVERVIEW"),
      FuncType::IncomeStatement => write!(f, "INCOME_STATEMENT"),
      FuncType::BalanceSheet => write!(f, "BALANCE_SHEET"),
      FuncType::CashFlow => write!(f, "CASH_FLOW"),

      FuncType::Earnings => write!(f, "EARNINGS"),
      FuncType::EarningsEstimates => write!(f, "EARNINGS_ESTIMATES"),
      FuncType::EarningsCalendar => write!(f, "EARNINGS_CALENDAR"),

      FuncType::Dividends => write!(f, "DIVIDENDS"),
    }
  }
}

/// Base URL for AlphaVantage API
pub const ALPHA_VANTAGE_BASE_URL: &str = "https://www.alphavantage.co/query";

/// API rate limits
pub const DEFAULT_RATE_LIMIT: u32 = 75; // requests per minute
pub const PREMIUM_RATE_LIMIT: u32 = 600; // requests per minute
