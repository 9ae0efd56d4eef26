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

//! Display-ready view of a ticker's fundamentals, keyed by dashboard labels.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormattedRecord {
  pub company_info: CompanyInfoView,
  pub financial_metrics: FinancialMetricsView,
  pub valuation_metrics: ValuationMetricsView,
  pub profitability_metrics: ProfitabilityMetricsView,
  pub per_share_metrics: PerShareMetricsView,
  pub balance_sheet: BalanceSheetView,
  pub income_statement: IncomeStatementView,
  pub cash_flow: CashFlowView,
  pub earnings: EarningsView,
  pub corporate_actions: CorporateActionsView,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfoView {
  #[serde(rename = "Company Name")]
  pub company_name: String,
  #[serde(rename = "Symbol")]
  pub symbol: String,
  #[serde(rename = "Exchange")]
  pub exchange: String,
  #[serde(rename = "Sector")]
  pub sector: String,
  #[serde(rename = "Industry")]
  pub industry: String,
  #[serde(rename = "Description")]
  pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetricsView {
  #[serde(rename = "Market Cap")]
  pub market_cap: String,
  #[serde(rename = "Revenue (TTM)")]
  pub revenue_ttm: String,
  #[serde(rename = "Gross Profit (TTM)")]
  pub gross_profit_ttm: String,
  #[serde(rename = "EBITDA")]
  pub ebitda: String,
  #[serde(rename = "Profit Margin")]
  pub profit_margin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuationMetricsView {
  #[serde(rename = "P/E Ratio")]
  pub pe_ratio: String,
  #[serde(rename = "PEG Ratio")]
  pub peg_ratio: String,
  #[serde(rename = "Price-to-Book(P/B) Ratio")]
  pub price_to_book: String,
  #[serde(rename = "Price-to-Sales(P/S) Ratio")]
  pub price_to_sales: String,
  #[serde(rename = "EV-to-Revenue(EV/R) Ratio")]
  pub ev_to_revenue: String,
  #[serde(rename = "EV/EBITDA Ratio")]
  pub ev_to_ebitda: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityMetricsView {
  #[serde(rename = "Profit Margin")]
  pub profit_margin: String,
  #[serde(rename = "Operating Margin")]
  pub operating_margin: String,
  #[serde(rename = "Return-on-Assets (ROA)")]
  pub return_on_assets: String,
  #[serde(rename = "Return-on-Equity (ROE)")]
  pub return_on_equity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerShareMetricsView {
  #[serde(rename = "EPS")]
  pub eps: String,
  #[serde(rename = "Diluted EPS")]
  pub diluted_eps: String,
  #[serde(rename = "Book Value")]
  pub book_value: String,
  #[serde(rename = "Dividend Per Share")]
  pub dividend_per_share: String,
  #[serde(rename = "Dividend Yield")]
  pub dividend_yield: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetView {
  #[serde(rename = "Fiscal Date")]
  pub fiscal_date: String,
  #[serde(rename = "Total Assets")]
  pub total_assets: String,
  #[serde(rename = "Total Liabilities")]
  pub total_liabilities: String,
  #[serde(rename = "Shareholder Equity")]
  pub shareholder_equity: String,
  #[serde(rename = "Current Assets")]
  pub current_assets: String,
  #[serde(rename = "Current Liabilities")]
  pub current_liabilities: String,
  #[serde(rename = "Cash")]
  pub cash: String,
  #[serde(rename = "Total Debt")]
  pub total_debt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatementView {
  #[serde(rename = "Fiscal Date")]
  pub fiscal_date: String,
  #[serde(rename = "Revenue")]
  pub revenue: String,
  #[serde(rename = "Cost of Revenue")]
  pub cost_of_revenue: String,
  #[serde(rename = "Gross Profit")]
  pub gross_profit: String,
  #[serde(rename = "Operating Income")]
  pub operating_income: String,
  #[serde(rename = "Net Income")]
  pub net_income: String,
  #[serde(rename = "EBITDA")]
  pub ebitda: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowView {
  #[serde(rename = "Fiscal Date")]
  pub fiscal_date: String,
  #[serde(rename = "Operating Cash Flow")]
  pub operating_cash_flow: String,
  #[serde(rename = "Capital Expenditures")]
  pub capital_expenditures: String,
  #[serde(rename = "Free Cash Flow")]
  pub free_cash_flow: String,
  #[serde(rename = "Dividend Payout")]
  pub dividend_payout: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsView {
  #[serde(rename = "Quarterly Earnings")]
  pub quarterly: Vec<QuarterlyEpsView>,
  #[serde(rename = "Annual Earnings")]
  pub annual: Vec<AnnualEpsView>,
  #[serde(rename = "Upcoming Earnings")]
  pub upcoming: Vec<UpcomingEarningsView>,
  #[serde(rename = "Analyst Estimates")]
  pub estimates: Vec<EstimateView>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyEpsView {
  #[serde(rename = "Date")]
  pub date: String,
  #[serde(rename = "Reported EPS")]
  pub reported_eps: String,
  #[serde(rename = "Estimated EPS")]
  pub estimated_eps: String,
  #[serde(rename = "Surprise")]
  pub surprise: String,
  #[serde(rename = "Surprise %")]
  pub surprise_percentage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnualEpsView {
  #[serde(rename = "Year")]
  pub year: String,
  #[serde(rename = "Reported EPS")]
  pub reported_eps: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpcomingEarningsView {
  #[serde(rename = "Report Date")]
  pub report_date: String,
  #[serde(rename = "Fiscal Period End")]
  pub fiscal_period_end: String,
  #[serde(rename = "EPS Estimate")]
  pub eps_estimate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimateView {
  #[serde(rename = "Date")]
  pub date: String,
  #[serde(rename = "Horizon")]
  pub horizon: String,
  #[serde(rename = "EPS Estimate")]
  pub eps_estimate: String,
  #[serde(rename = "Revenue Estimate")]
  pub revenue_estimate: String,
  #[serde(rename = "Analysts")]
  pub analyst_count: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorporateActionsView {
  #[serde(rename = "Dividends")]
  pub dividends: Vec<DividendView>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DividendView {
  #[serde(rename = "Ex-Date")]
  pub ex_date: String,
  #[serde(rename = "Payment Date")]
  pub payment_date: String,
  #[serde(rename = "Amount")]
  pub amount: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sections_use_display_labels() {
    let record = FormattedRecord {
      financial_metrics: FinancialMetricsView {
        market_cap: "$2,500,000,000".to_string(),
        ..FinancialMetricsView::default()
      },
      ..FormattedRecord::default()
    };

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["financial_metrics"]["Market Cap"], "$2,500,000,000");
    assert!(value["valuation_metrics"].get("P/E Ratio").is_some());
    assert!(value["earnings"]["Quarterly Earnings"].is_array());
    assert!(value["corporate_actions"]["Dividends"].is_array());
  }
}
