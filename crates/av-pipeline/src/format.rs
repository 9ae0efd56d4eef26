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

use async_trait::async_trait;
use av_core::Ticker;
use av_models::ApiField;
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::formatters::{
  currency_format, currency_format_decimal, number_format, points_format, rate_format, text_or_na,
};
use crate::records::extracted::{BalanceSheetSnapshot, CashFlowSnapshot, IncomeStatementSnapshot};
use crate::records::formatted::*;
use crate::records::{ExtractedRecord, FormattedRecord};
use crate::store::{Artifact, DataStore};
use crate::{PipelineResult, Stage};

/// Reads `{TICKER}_extracted_data.json` and writes `{TICKER}_formatted_data.json`
pub struct FormatStage {
  store: DataStore,
}

impl FormatStage {
  pub fn new(store: DataStore) -> Self {
    Self { store }
  }

  /// Load the extracted file and format it, without writing anything
  pub async fn format_all(&self, ticker: &Ticker) -> PipelineResult<FormattedRecord> {
    let extracted: ExtractedRecord = self.store.read(ticker, Artifact::Extracted).await?;
    Ok(format_record(&extracted))
  }
}

#[async_trait]
impl Stage for FormatStage {
  fn name(&self) -> &'static str {
    "format"
  }

  fn description(&self) -> &'static str {
    "Format data for display"
  }

  #[instrument(name = "format", skip(self), fields(ticker = %ticker))]
  async fn run(&self, ticker: &Ticker) -> PipelineResult<PathBuf> {
    let formatted = self.format_all(ticker).await?;
    let path = self.store.write(ticker, Artifact::Formatted, &formatted).await?;

    info!("✓ Formatted data saved to {}", path.display());
    Ok(path)
  }
}

fn text(value: &ApiField) -> String {
  text_or_na(value.as_deref())
}

fn dollars(value: &ApiField) -> String {
  currency_format(value.as_deref())
}

fn cents(value: &ApiField) -> String {
  currency_format_decimal(value.as_deref())
}

fn ratio(value: &ApiField) -> String {
  number_format(value.as_deref())
}

fn rate(value: &ApiField) -> String {
  rate_format(value.as_deref())
}

fn points(value: &ApiField) -> String {
  points_format(value.as_deref())
}

/// Render every numeric field of `extracted` for display.
///
/// A statement that was empty after extraction still yields its full set of
/// labels, each `"N/A"`.
pub fn format_record(extracted: &ExtractedRecord) -> FormattedRecord {
  let info = &extracted.company_info;
  let financial = &extracted.financial_metrics;
  let valuation = &extracted.valuation_metrics;
  let profitability = &extracted.profitability_metrics;
  let per_share = &extracted.per_share_metrics;

  let balance = extracted.balance_sheet.clone().unwrap_or_default();
  let income = extracted.income_statement.clone().unwrap_or_default();
  let cash_flow = extracted.cash_flow.clone().unwrap_or_default();

  FormattedRecord {
    company_info: CompanyInfoView {
      company_name: text(&info.name),
      symbol: text(&info.symbol),
      exchange: text(&info.exchange),
      sector: text(&info.sector),
      industry: text(&info.industry),
      description: text(&info.description),
    },
    financial_metrics: FinancialMetricsView {
      market_cap: dollars(&financial.market_cap),
      revenue_ttm: dollars(&financial.revenue_ttm),
      gross_profit_ttm: dollars(&financial.gross_profit_ttm),
      ebitda: dollars(&financial.ebitda),
      profit_margin: rate(&financial.profit_margin),
    },
    valuation_metrics: ValuationMetricsView {
      pe_ratio: ratio(&valuation.pe_ratio),
      peg_ratio: ratio(&valuation.peg_ratio),
      price_to_book: ratio(&valuation.price_to_book),
      price_to_sales: ratio(&valuation.price_to_sales),
      ev_to_revenue: ratio(&valuation.ev_to_revenue),
      ev_to_ebitda: ratio(&valuation.ev_to_ebitda),
    },
    profitability_metrics: ProfitabilityMetricsView {
      profit_margin: rate(&profitability.profit_margin),
      operating_margin: rate(&profitability.operating_margin),
      return_on_assets: rate(&profitability.return_on_assets),
      return_on_equity: rate(&profitability.return_on_equity),
    },
    per_share_metrics: PerShareMetricsView {
      eps: cents(&per_share.eps),
      diluted_eps: cents(&per_share.diluted_eps),
      book_value: cents(&per_share.book_value),
      dividend_per_share: cents(&per_share.dividend_per_share),
      dividend_yield: rate(&per_share.dividend_yield),
    },
    balance_sheet: format_balance_sheet(&balance),
    income_statement: format_income_statement(&income),
    cash_flow: format_cash_flow(&cash_flow),
    earnings: EarningsView {
      quarterly: extracted
        .earnings
        .quarterly_earnings
        .iter()
        .map(|q| QuarterlyEpsView {
          date: text(&q.date),
          reported_eps: cents(&q.reported_eps),
          estimated_eps: cents(&q.estimated_eps),
          surprise: cents(&q.surprise),
          surprise_percentage: points(&q.surprise_percentage),
        })
        .collect(),
      annual: extracted
        .earnings
        .annual_earnings
        .iter()
        .map(|a| AnnualEpsView { year: text(&a.year), reported_eps: cents(&a.reported_eps) })
        .collect(),
      upcoming: extracted
        .earnings
        .upcoming_earnings
        .iter()
        .map(|u| UpcomingEarningsView {
          report_date: text(&u.report_date),
          fiscal_period_end: text(&u.fiscal_date_ending),
          eps_estimate: cents(&u.estimate),
        })
        .collect(),
      estimates: extracted
        .earnings
        .estimates
        .iter()
        .map(|e| EstimateView {
          date: text(&e.date),
          horizon: text(&e.horizon),
          eps_estimate: cents(&e.eps_estimate_average),
          revenue_estimate: dollars(&e.revenue_estimate_average),
          analyst_count: text(&e.analyst_count),
        })
        .collect(),
    },
    corporate_actions: CorporateActionsView {
      dividends: extracted
        .corporate_actions
        .dividends
        .iter()
        .map(|d| DividendView {
          ex_date: text(&d.ex_date),
          payment_date: text(&d.payment_date),
          amount: cents(&d.amount),
        })
        .collect(),
    },
  }
}

fn format_balance_sheet(sheet: &BalanceSheetSnapshot) -> BalanceSheetView {
  BalanceSheetView {
    fiscal_date: text(&sheet.fiscal_date),
    total_assets: dollars(&sheet.total_assets),
    total_liabilities: dollars(&sheet.total_liabilities),
    shareholder_equity: dollars(&sheet.total_shareholder_equity),
    current_assets: dollars(&sheet.current_assets),
    current_liabilities: dollars(&sheet.current_liabilities),
    cash: dollars(&sheet.cash),
    total_debt: dollars(&sheet.total_debt),
  }
}

fn format_income_statement(statement: &IncomeStatementSnapshot) -> IncomeStatementView {
  IncomeStatementView {
    fiscal_date: text(&statement.fiscal_date),
    revenue: dollars(&statement.revenue),
    cost_of_revenue: dollars(&statement.cost_of_revenue),
    gross_profit: dollars(&statement.gross_profit),
    operating_income: dollars(&statement.operating_income),
    net_income: dollars(&statement.net_income),
    ebitda: dollars(&statement.ebitda),
  }
}

fn format_cash_flow(statement: &CashFlowSnapshot) -> CashFlowView {
  CashFlowView {
    fiscal_date: text(&statement.fiscal_date),
    operating_cash_flow: dollars(&statement.operating_cashflow),
    capital_expenditures: dollars(&statement.capital_expenditures),
    free_cash_flow: dollars(&statement.free_cash_flow),
    dividend_payout: dollars(&statement.dividend_payout),
  }
}
