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

//! The client entry point and its shared rate limiter

use crate::endpoints::{DirectRateLimiter, fundamentals::FundamentalsEndpoints};
use crate::transport::Transport;
use av_core::{Config, Result};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Main AlphaVantage API client
///
/// Handles authentication, rate limiting, and transport concerns automatically.
/// Cloning is cheap; clones share the transport and the rate limiter.
///
/// # Examples
///
/// ```ignore
/// use av_client::AlphaVantageClient;
/// use av_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = AlphaVantageClient::new(config)?;
///
///     let overview = client.fundamentals().company_overview("AAPL").await?;
///     println!("Apple market cap: {}", overview["MarketCapitalization"]);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct AlphaVantageClient {
  rate_limiter: Arc<DirectRateLimiter>,
  transport: Arc<Transport>,
}

impl AlphaVantageClient {
  /// Create a new AlphaVantage API client
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration is invalid or the HTTP client
  /// cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let quota = Quota::per_minute(Self::rate_limit_value(config.rate_limit));
    let rate_limiter = Arc::new(RateLimiter::direct(quota));

    Self::with_rate_limiter(config, rate_limiter)
  }

  /// Create a new client with custom rate limiting
  pub fn with_rate_limiter(config: Config, rate_limiter: Arc<DirectRateLimiter>) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?), rate_limiter })
  }

  /// Get access to fundamentals endpoints
  ///
  /// ```ignore
  /// let income = client.fundamentals().income_statement("MSFT").await?;
  /// let calendar = client.fundamentals().earnings_calendar("MSFT", "12month").await?;
  /// ```
  pub fn fundamentals(&self) -> FundamentalsEndpoints {
    FundamentalsEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Wait for rate limit to allow next request
  ///
  /// Endpoints call this themselves; it is exposed for callers that pace
  /// their own batches.
  pub async fn wait_for_rate_limit(&self) -> Result<()> {
    self.rate_limiter.until_ready().await;
    Ok(())
  }

  /// Base URL requests are sent to
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }

  // A zero limit would make the quota panic; fall back to the free tier.
  fn rate_limit_value(rate_limit: u32) -> NonZeroU32 {
    NonZeroU32::new(rate_limit)
      .or_else(|| NonZeroU32::new(av_core::DEFAULT_RATE_LIMIT))
      .unwrap_or(NonZeroU32::MIN)
  }
}

impl std::fmt::Debug for AlphaVantageClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AlphaVantageClient")
      .field("transport", &self.transport)
      .field("rate_limiter", &"RateLimiter")
      .finish()
  }
}
