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

//! Projection of the raw API payloads onto the fields the dashboard shows

use async_trait::async_trait;
use av_core::{Dataset, Ticker};
use av_models::{
  ApiField, BalanceSheet, CashFlow, CompanyOverview, Dividends, Earnings, EarningsCalendarEntry,
  EarningsEstimates, IncomeStatement, NOT_AVAILABLE,
};
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::records::extracted::*;
use crate::records::{ExtractedRecord, RawDataset};
use crate::store::{Artifact, DataStore};
use crate::{PipelineResult, Stage};

pub const QUARTERS_KEPT: usize = 4;
pub const YEARS_KEPT: usize = 3;
pub const UPCOMING_KEPT: usize = 5;
pub const ESTIMATES_KEPT: usize = 4;
pub const DIVIDENDS_KEPT: usize = 10;

/// Reads `{TICKER}_raw_data.json` and writes `{TICKER}_extracted_data.json`
pub struct ExtractStage {
  store: DataStore,
}

impl ExtractStage {
  pub fn new(store: DataStore) -> Self {
    Self { store }
  }

  /// Load the raw file and project it, without writing anything
  pub async fn extract_all(&self, ticker: &Ticker) -> PipelineResult<ExtractedRecord> {
    let raw: RawDataset = self.store.read(ticker, Artifact::Raw).await?;
    Ok(extract(&raw))
  }
}

#[async_trait]
impl Stage for ExtractStage {
  fn name(&self) -> &'static str {
    "extract"
  }

  fn description(&self) -> &'static str {
    "Extract key metrics"
  }

  #[instrument(name = "extract", skip(self), fields(ticker = %ticker))]
  async fn run(&self, ticker: &Ticker) -> PipelineResult<PathBuf> {
    let record = self.extract_all(ticker).await?;
    let path = self.store.write(ticker, Artifact::Extracted, &record).await?;

    info!("✓ Extracted data saved to {}", path.display());
    Ok(path)
  }
}

/// Build the extracted record. Missing or malformed content becomes `"N/A"`.
pub fn extract(raw: &RawDataset) -> ExtractedRecord {
  let overview: CompanyOverview = raw.decode(Dataset::Overview);
  let income: IncomeStatement = raw.decode(Dataset::IncomeStatement);
  let balance: BalanceSheet = raw.decode(Dataset::BalanceSheet);
  let cash_flow: CashFlow = raw.decode(Dataset::CashFlows);
  let earnings: Earnings = raw.decode(Dataset::EarningsHistory);
  let estimates: EarningsEstimates = raw.decode(Dataset::EarningsEstimates);
  let calendar: Vec<EarningsCalendarEntry> = raw.decode(Dataset::EarningsCalendar);
  let dividends: Dividends = raw.decode(Dataset::Dividends);

  ExtractedRecord {
    company_info: CompanyInfo {
      name: overview.name.with_placeholder(),
      symbol: overview.symbol.with_placeholder(),
      exchange: overview.exchange.with_placeholder(),
      sector: overview.sector.with_placeholder(),
      industry: overview.industry.with_placeholder(),
      description: overview.description.with_placeholder(),
    },
    financial_metrics: FinancialMetrics {
      market_cap: overview.market_capitalization.with_placeholder(),
      revenue_ttm: overview.revenue_ttm.with_placeholder(),
      gross_profit_ttm: overview.gross_profit_ttm.with_placeholder(),
      ebitda: overview.ebitda.with_placeholder(),
      profit_margin: overview.profit_margin.with_placeholder(),
    },
    valuation_metrics: ValuationMetrics {
      pe_ratio: overview.pe_ratio.with_placeholder(),
      peg_ratio: overview.peg_ratio.with_placeholder(),
      price_to_book: overview.price_to_book_ratio.with_placeholder(),
      price_to_sales: overview.price_to_sales_ratio_ttm.with_placeholder(),
      ev_to_revenue: overview.ev_to_revenue.with_placeholder(),
      ev_to_ebitda: overview.ev_to_ebitda.with_placeholder(),
    },
    profitability_metrics: ProfitabilityMetrics {
      profit_margin: overview.profit_margin.with_placeholder(),
      operating_margin: overview.operating_margin_ttm.with_placeholder(),
      return_on_assets: overview.return_on_assets_ttm.with_placeholder(),
      return_on_equity: overview.return_on_equity_ttm.with_placeholder(),
    },
    per_share_metrics: PerShareMetrics {
      eps: overview.eps.with_placeholder(),
      diluted_eps: overview.diluted_eps_ttm.with_placeholder(),
      book_value: overview.book_value.with_placeholder(),
      dividend_per_share: overview.dividend_per_share.with_placeholder(),
      dividend_yield: overview.dividend_yield.with_placeholder(),
    },
    balance_sheet: balance.annual_reports.first().map(|latest| BalanceSheetSnapshot {
      fiscal_date: latest.fiscal_date_ending.with_placeholder(),
      total_assets: latest.total_assets.with_placeholder(),
      total_liabilities: latest.total_liabilities.with_placeholder(),
      total_shareholder_equity: latest.total_shareholder_equity.with_placeholder(),
      current_assets: latest.total_current_assets.with_placeholder(),
      current_liabilities: latest.total_current_liabilities.with_placeholder(),
      cash: latest.cash_and_cash_equivalents_at_carrying_value.with_placeholder(),
      total_debt: latest.short_long_term_debt_total.with_placeholder(),
    }),
    income_statement: income.annual_reports.first().map(|latest| IncomeStatementSnapshot {
      fiscal_date: latest.fiscal_date_ending.with_placeholder(),
      revenue: latest.total_revenue.with_placeholder(),
      cost_of_revenue: latest.cost_of_revenue.with_placeholder(),
      gross_profit: latest.gross_profit.with_placeholder(),
      operating_income: latest.operating_income.with_placeholder(),
      net_income: latest.net_income.with_placeholder(),
      ebitda: latest.ebitda.with_placeholder(),
    }),
    cash_flow: cash_flow.annual_reports.first().map(|latest| CashFlowSnapshot {
      fiscal_date: latest.fiscal_date_ending.with_placeholder(),
      operating_cashflow: latest.operating_cashflow.with_placeholder(),
      capital_expenditures: latest.capital_expenditures.with_placeholder(),
      free_cash_flow: latest
        .free_cash_flow()
        .map_or_else(|| ApiField::new(NOT_AVAILABLE), |fcf| ApiField::new(fcf.to_string())),
      dividend_payout: latest.dividend_payout.with_placeholder(),
    }),
    earnings: EarningsSummary {
      quarterly_earnings: earnings
        .quarterly_earnings
        .iter()
        .take(QUARTERS_KEPT)
        .map(|q| QuarterlyEps {
          date: q.fiscal_date_ending.with_placeholder(),
          reported_eps: q.reported_eps.with_placeholder(),
          estimated_eps: q.estimated_eps.with_placeholder(),
          surprise: q.surprise.with_placeholder(),
          surprise_percentage: q.surprise_percentage.with_placeholder(),
        })
        .collect(),
      annual_earnings: earnings
        .annual_earnings
        .iter()
        .take(YEARS_KEPT)
        .map(|a| AnnualEps { year: a.fiscal_date_ending.with_placeholder(), reported_eps: a.reported_eps.with_placeholder() })
        .collect(),
      upcoming_earnings: calendar
        .iter()
        .take(UPCOMING_KEPT)
        .map(|e| UpcomingEarnings {
          report_date: e.report_date.with_placeholder(),
          fiscal_date_ending: e.fiscal_date_ending.with_placeholder(),
          estimate: e.estimate.with_placeholder(),
        })
        .collect(),
      estimates: estimates
        .estimates
        .iter()
        .take(ESTIMATES_KEPT)
        .map(|e| EstimateRow {
          date: e.date.with_placeholder(),
          horizon: e.horizon.with_placeholder(),
          eps_estimate_average: e.eps_estimate_average.with_placeholder(),
          revenue_estimate_average: e.revenue_estimate_average.with_placeholder(),
          analyst_count: e.eps_estimate_analyst_count.with_placeholder(),
        })
        .collect(),
    },
    corporate_actions: CorporateActions {
      dividends: dividends
        .data
        .iter()
        .take(DIVIDENDS_KEPT)
        .map(|d| DividendEntry {
          ex_date: d.ex_dividend_date.with_placeholder(),
          payment_date: d.payment_date.with_placeholder(),
          amount: d.amount.with_placeholder(),
        })
        .collect(),
    },
  }
}
