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

//! Fundamental analysis data models for company financials
//!
//! Only the fields the pipeline reads are modelled; unknown keys are ignored.

use crate::common::ApiField;
use serde::{Deserialize, Serialize};

/// Company overview with key financial metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyOverview {
  #[serde(rename = "Symbol")]
  pub symbol: ApiField,

  #[serde(rename = "Name")]
  pub name: ApiField,

  #[serde(rename = "Description")]
  pub description: ApiField,

  /// Exchange where the stock is traded
  #[serde(rename = "Exchange")]
  pub exchange: ApiField,

  #[serde(rename = "Sector")]
  pub sector: ApiField,

  /// Industry classification
  #[serde(rename = "Industry")]
  pub industry: ApiField,

  #[serde(rename = "MarketCapitalization")]
  pub market_capitalization: ApiField,

  #[serde(rename = "EBITDA")]
  pub ebitda: ApiField,

  /// Price to Earnings ratio
  #[serde(rename = "PERatio")]
  pub pe_ratio: ApiField,

  /// Price to Earnings to Growth ratio
  #[serde(rename = "PEGRatio")]
  pub peg_ratio: ApiField,

  #[serde(rename = "BookValue")]
  pub book_value: ApiField,

  #[serde(rename = "DividendPerShare")]
  pub dividend_per_share: ApiField,

  #[serde(rename = "DividendYield")]
  pub dividend_yield: ApiField,

  #[serde(rename = "EPS")]
  pub eps: ApiField,

  #[serde(rename = "ProfitMargin")]
  pub profit_margin: ApiField,

  #[serde(rename = "OperatingMarginTTM")]
  pub operating_margin_ttm: ApiField,

  #[serde(rename = "ReturnOnAssetsTTM")]
  pub return_on_assets_ttm: ApiField,

  #[serde(rename = "ReturnOnEquityTTM")]
  pub return_on_equity_ttm: ApiField,

  #[serde(rename = "RevenueTTM")]
  pub revenue_ttm: ApiField,

  #[serde(rename = "GrossProfitTTM")]
  pub gross_profit_ttm: ApiField,

  #[serde(rename = "DilutedEPSTTM")]
  pub diluted_eps_ttm: ApiField,

  #[serde(rename = "PriceToSalesRatioTTM")]
  pub price_to_sales_ratio_ttm: ApiField,

  #[serde(rename = "PriceToBookRatio")]
  pub price_to_book_ratio: ApiField,

  #[serde(rename = "EVToRevenue")]
  pub ev_to_revenue: ApiField,

  #[serde(rename = "EVToEBITDA")]
  pub ev_to_ebitda: ApiField,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeStatement {
  /// Stock symbol
  pub symbol: ApiField,

  /// Annual reports, most recent first
  #[serde(rename = "annualReports")]
  pub annual_reports: Vec<IncomeStatementReport>,

  /// Quarterly reports, most recent first
  #[serde(rename = "quarterlyReports")]
  pub quarterly_reports: Vec<IncomeStatementReport>,
}

/// Individual income statement report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeStatementReport {
  /// Fiscal date ending
  #[serde(rename = "fiscalDateEnding")]
  pub fiscal_date_ending: ApiField,

  #[serde(rename = "grossProfit")]
  pub gross_profit: ApiField,

  #[serde(rename = "totalRevenue")]
  pub total_revenue: ApiField,

  #[serde(rename = "costOfRevenue")]
  pub cost_of_revenue: ApiField,

  #[serde(rename = "operatingIncome")]
  pub operating_income: ApiField,

  #[serde(rename = "ebitda")]
  pub ebitda: ApiField,

  #[serde(rename = "netIncome")]
  pub net_income: ApiField,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSheet {
  pub symbol: ApiField,

  #[serde(rename = "annualReports")]
  pub annual_reports: Vec<BalanceSheetReport>,

  #[serde(rename = "quarterlyReports")]
  pub quarterly_reports: Vec<BalanceSheetReport>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSheetReport {
  #[serde(rename = "fiscalDateEnding")]
  pub fiscal_date_ending: ApiField,

  #[serde(rename = "totalAssets")]
  pub total_assets: ApiField,

  #[serde(rename = "totalCurrentAssets")]
  pub total_current_assets: ApiField,

  #[serde(rename = "cashAndCashEquivalentsAtCarryingValue")]
  pub cash_and_cash_equivalents_at_carrying_value: ApiField,

  #[serde(rename = "totalLiabilities")]
  pub total_liabilities: ApiField,

  #[serde(rename = "totalCurrentLiabilities")]
  pub total_current_liabilities: ApiField,

  #[serde(rename = "shortLongTermDebtTotal")]
  pub short_long_term_debt_total: ApiField,

  #[serde(rename = "totalShareholderEquity")]
  pub total_shareholder_equity: ApiField,
}

/// Cash flow statement data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlow {
  pub symbol: ApiField,

  #[serde(rename = "annualReports")]
  pub annual_reports: Vec<CashFlowReport>,

  #[serde(rename = "quarterlyReports")]
  pub quarterly_reports: Vec<CashFlowReport>,
}

/// Individual cash flow report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlowReport {
  #[serde(rename = "fiscalDateEnding")]
  pub fiscal_date_ending: ApiField,

  #[serde(rename = "operatingCashflow")]
  pub operating_cashflow: ApiField,

  #[serde(rename = "capitalExpenditures")]
  pub capital_expenditures: ApiField,

  #[serde(rename = "dividendPayout")]
  pub dividend_payout: ApiField,
}

impl CashFlowReport {
  /// Operating cash flow less capital expenditures, when both are reported.
  pub fn free_cash_flow(&self) -> Option<f64> {
    Some(self.operating_cashflow.as_f64()? - self.capital_expenditures.as_f64()?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_company_overview_deserialization() {
    let json = r#"{
            "Symbol": "AAPL",
            "AssetType": "Common Stock",
            "Name": "Apple Inc",
            "Exchange": "NASDAQ",
            "Sector": "TECHNOLOGY",
            "Industry": "Consumer Electronics",
            "MarketCapitalization": "3000000000000",
            "PERatio": "25.5",
            "ProfitMargin": "0.270",
            "DividendYield": "None"
        }"#;

    let overview: CompanyOverview = serde_json::from_str(json).unwrap();
    assert_eq!(overview.symbol.as_deref(), Some("AAPL"));
    assert_eq!(overview.name.as_deref(), Some("Apple Inc"));
    assert_eq!(overview.sector.as_deref(), Some("TECHNOLOGY"));
    assert_eq!(overview.dividend_yield.as_deref(), Some("None"));
    assert!(overview.ev_to_ebitda.is_empty());
  }

  #[test]
  fn test_rate_limit_payload_decodes_as_empty_overview() {
    let overview: CompanyOverview =
      serde_json::from_str(r#"{"Information": "rate limit"}"#).unwrap();
    assert_eq!(overview, CompanyOverview::default());
  }

  #[test]
  fn test_statement_without_reports() {
    let sheet: BalanceSheet = serde_json::from_str(r#"{"symbol": "XYZ"}"#).unwrap();
    assert!(sheet.annual_reports.is_empty());
    assert!(sheet.quarterly_reports.is_empty());
  }

  #[test]
  fn test_free_cash_flow() {
    let report = CashFlowReport {
      operating_cashflow: ApiField::new("1000"),
      capital_expenditures: ApiField::new("250"),
      ..CashFlowReport::default()
    };
    assert_eq!(report.free_cash_flow(), Some(750.0));

    let missing = CashFlowReport {
      operating_cashflow: ApiField::new("1000"),
      capital_expenditures: ApiField::new("None"),
      ..CashFlowReport::default()
    };
    assert_eq!(missing.free_cash_flow(), None);
  }
}
