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

//! Company fundamentals, earnings and dividend endpoints

use super::{DirectRateLimiter, EndpointBase, impl_endpoint_base};
use crate::transport::{CsvRows, Transport};
use av_core::{Dataset, FuncType, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Horizon requested for the earnings calendar when none is given
pub const DEFAULT_EARNINGS_HORIZON: &str = "12month";

/// Fundamental data endpoints for company financial information
///
/// Every call waits on the client's shared rate limiter and returns the API
/// payload untouched, so callers can persist exactly what was received.
pub struct FundamentalsEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<DirectRateLimiter>,
}

impl FundamentalsEndpoints {
  /// Create a new fundamentals endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<DirectRateLimiter>) -> Self {
    Self { transport, rate_limiter }
  }

  /// Get company overview with key financial metrics
  ///
  /// # Arguments
  ///
  /// * `symbol` - The stock symbol (e.g., "AAPL", "MSFT")
  #[instrument(skip(self), fields(symbol))]
  pub async fn company_overview(&self, symbol: &str) -> Result<Value> {
    self.get_for_symbol(FuncType::Overview, symbol).await
  }

  /// Get annual and quarterly income statements
  #[instrument(skip(self), fields(symbol))]
  pub async fn income_statement(&self, symbol: &str) -> Result<Value> {
    self.get_for_symbol(FuncType::IncomeStatement, symbol).await
  }

  /// Get annual and quarterly balance sheets
  #[instrument(skip(self), fields(symbol))]
  pub async fn balance_sheet(&self, symbol: &str) -> Result<Value> {
    self.get_for_symbol(FuncType::BalanceSheet, symbol).await
  }

  /// Get annual and quarterly cash flow statements
  #[instrument(skip(self), fields(symbol))]
  pub async fn cash_flow(&self, symbol: &str) -> Result<Value> {
    self.get_for_symbol(FuncType::CashFlow, symbol).await
  }

  /// Get annual and quarterly reported earnings
  #[instrument(skip(self), fields(symbol))]
  pub async fn earnings(&self, symbol: &str) -> Result<Value> {
    self.get_for_symbol(FuncType::Earnings, symbol).await
  }

  /// Get analyst EPS and revenue estimates
  #[instrument(skip(self), fields(symbol))]
  pub async fn earnings_estimates(&self, symbol: &str) -> Result<Value> {
    self.get_for_symbol(FuncType::EarningsEstimates, symbol).await
  }

  /// Get historical and declared dividends
  #[instrument(skip(self), fields(symbol))]
  pub async fn dividends(&self, symbol: &str) -> Result<Value> {
    self.get_for_symbol(FuncType::Dividends, symbol).await
  }

  /// Get upcoming earnings announcements
  ///
  /// The API answers this function with CSV; rows are keyed by the header.
  ///
  /// # Arguments
  ///
  /// * `symbol` - The stock symbol
  /// * `horizon` - Time horizon ("3month", "6month", or "12month")
  #[instrument(skip(self), fields(symbol, horizon))]
  pub async fn earnings_calendar(&self, symbol: &str, horizon: &str) -> Result<CsvRows> {
    self.get_csv_for_symbol(FuncType::EarningsCalendar, symbol, horizon).await
  }

  /// Fetch one dataset as JSON
  ///
  /// CSV datasets are converted to an array of row objects so every dataset
  /// can be stored side by side in one document.
  pub async fn fetch_dataset(&self, dataset: Dataset, symbol: &str, horizon: &str) -> Result<Value> {
    debug!("Fetching {} for {}", dataset, symbol);

    let function = dataset.func_type();
    if dataset.is_csv() {
      let rows = self.get_csv_for_symbol(function, symbol, horizon).await?;
      return Ok(serde_json::to_value(rows)?);
    }

    self.get_for_symbol(function, symbol).await
  }

  async fn get_for_symbol(&self, function: FuncType, symbol: &str) -> Result<Value> {
    self.wait_for_rate_limit().await?;

    self.transport.get(function, &[("symbol", symbol)]).await
  }

  async fn get_csv_for_symbol(&self, function: FuncType, symbol: &str, horizon: &str) -> Result<CsvRows> {
    self.wait_for_rate_limit().await?;

    let params = [("symbol", symbol), ("horizon", horizon)];
    self.transport.get_csv(function, &params).await
  }
}

impl_endpoint_base!(FundamentalsEndpoints);
