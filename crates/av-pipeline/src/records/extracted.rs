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

//! The projected, still-unformatted view of a ticker's fundamentals.
//!
//! Values are the strings the API reported, or `"N/A"` when a field was
//! missing. Reading a file back is lenient: a leaf may be a string, a number
//! or `null`, and absent or `null` leaves render as `"N/A"` when formatted.

use av_models::ApiField;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedRecord {
  pub company_info: CompanyInfo,
  pub financial_metrics: FinancialMetrics,
  pub valuation_metrics: ValuationMetrics,
  pub profitability_metrics: ProfitabilityMetrics,
  pub per_share_metrics: PerShareMetrics,
  #[serde(with = "empty_as_none")]
  pub balance_sheet: Option<BalanceSheetSnapshot>,
  #[serde(with = "empty_as_none")]
  pub income_statement: Option<IncomeStatementSnapshot>,
  #[serde(with = "empty_as_none")]
  pub cash_flow: Option<CashFlowSnapshot>,
  pub earnings: EarningsSummary,
  pub corporate_actions: CorporateActions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
  pub name: ApiField,
  pub symbol: ApiField,
  pub exchange: ApiField,
  pub sector: ApiField,
  pub industry: ApiField,
  pub description: ApiField,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialMetrics {
  pub market_cap: ApiField,
  pub revenue_ttm: ApiField,
  pub gross_profit_ttm: ApiField,
  pub ebitda: ApiField,
  pub profit_margin: ApiField,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationMetrics {
  pub pe_ratio: ApiField,
  pub peg_ratio: ApiField,
  pub price_to_book: ApiField,
  pub price_to_sales: ApiField,
  pub ev_to_revenue: ApiField,
  pub ev_to_ebitda: ApiField,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitabilityMetrics {
  pub profit_margin: ApiField,
  pub operating_margin: ApiField,
  pub return_on_assets: ApiField,
  pub return_on_equity: ApiField,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerShareMetrics {
  pub eps: ApiField,
  pub diluted_eps: ApiField,
  pub book_value: ApiField,
  pub dividend_per_share: ApiField,
  pub dividend_yield: ApiField,
}

/// Latest annual balance sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSheetSnapshot {
  pub fiscal_date: ApiField,
  pub total_assets: ApiField,
  pub total_liabilities: ApiField,
  pub total_shareholder_equity: ApiField,
  pub current_assets: ApiField,
  pub current_liabilities: ApiField,
  pub cash: ApiField,
  pub total_debt: ApiField,
}

/// Latest annual income statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeStatementSnapshot {
  pub fiscal_date: ApiField,
  pub revenue: ApiField,
  pub cost_of_revenue: ApiField,
  pub gross_profit: ApiField,
  pub operating_income: ApiField,
  pub net_income: ApiField,
  pub ebitda: ApiField,
}

/// Latest annual cash flow statement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlowSnapshot {
  pub fiscal_date: ApiField,
  pub operating_cashflow: ApiField,
  pub capital_expenditures: ApiField,
  pub free_cash_flow: ApiField,
  pub dividend_payout: ApiField,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarningsSummary {
  pub quarterly_earnings: Vec<QuarterlyEps>,
  pub annual_earnings: Vec<AnnualEps>,
  pub upcoming_earnings: Vec<UpcomingEarnings>,
  pub estimates: Vec<EstimateRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuarterlyEps {
  pub date: ApiField,
  pub reported_eps: ApiField,
  pub estimated_eps: ApiField,
  pub surprise: ApiField,
  pub surprise_percentage: ApiField,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnualEps {
  pub year: ApiField,
  pub reported_eps: ApiField,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpcomingEarnings {
  pub report_date: ApiField,
  pub fiscal_date_ending: ApiField,
  pub estimate: ApiField,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateRow {
  pub date: ApiField,
  pub horizon: ApiField,
  pub eps_estimate_average: ApiField,
  pub revenue_estimate_average: ApiField,
  pub analyst_count: ApiField,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorporateActions {
  pub dividends: Vec<DividendEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividendEntry {
  pub ex_date: ApiField,
  pub payment_date: ApiField,
  pub amount: ApiField,
}

/// A statement section with no annual report is written as `{}`.
mod empty_as_none {
  use serde::de::{DeserializeOwned, Error as _};
  use serde::ser::SerializeMap;
  use serde::{Deserialize, Deserializer, Serialize, Serializer};
  use serde_json::Value;

  pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
  where
    T: Serialize,
    S: Serializer,
  {
    match value {
      Some(section) => section.serialize(serializer),
      None => serializer.serialize_map(Some(0))?.end(),
    }
  }

  pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
  where
    T: DeserializeOwned,
    D: Deserializer<'de>,
  {
    let value = Value::deserialize(deserializer)?;
    match value {
      Value::Null => Ok(None),
      Value::Object(ref map) if map.is_empty() => Ok(None),
      other => serde_json::from_value(other).map(Some).map_err(D::Error::custom),
    }
  }
}
