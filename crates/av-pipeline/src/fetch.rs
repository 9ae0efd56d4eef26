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
use av_client::AlphaVantageClient;
use av_core::{Dataset, Ticker};
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use std::path::PathBuf;
use tracing::{debug, error, info, instrument, warn};

use crate::records::RawDataset;
use crate::store::{Artifact, DataStore};
use crate::{PipelineConfig, PipelineError, PipelineResult, Stage};

/// Which datasets came back and which did not
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchReport {
  pub succeeded: Vec<Dataset>,
  pub failed: Vec<(Dataset, String)>,
}

impl FetchReport {
  pub fn is_complete(&self) -> bool {
    self.failed.is_empty()
  }

  fn failure_summary(&self) -> String {
    self
      .failed
      .iter()
      .map(|(dataset, reason)| format!("{}: {}", dataset, reason))
      .collect::<Vec<_>>()
      .join("; ")
  }
}

/// Result of downloading every dataset for one ticker
#[derive(Debug, Clone)]
pub struct FetchOutcome {
  pub raw: RawDataset,
  pub report: FetchReport,
}

/// Downloads all datasets for a ticker and writes `{TICKER}_raw_data.json`
pub struct FetchStage {
  client: AlphaVantageClient,
  store: DataStore,
  config: PipelineConfig,
}

impl FetchStage {
  pub fn new(client: AlphaVantageClient, store: DataStore, config: PipelineConfig) -> Self {
    Self { client, store, config }
  }

  /// Request every dataset, without writing anything.
  ///
  /// Individual failures are recorded in the report and skipped. The fetch
  /// fails outright when the API key is rejected, when nothing could be
  /// downloaded, or when partial results are not allowed.
  pub async fn fetch_all(&self, ticker: &Ticker) -> PipelineResult<FetchOutcome> {
    let total = Dataset::ALL.len();
    let progress = if self.config.show_progress {
      Some(ProgressBar::new(total as u64))
    } else {
      None
    };

    let fundamentals = self.client.fundamentals();
    let fundamentals = &fundamentals;
    let progress_ref = progress.as_ref();
    let symbol = ticker.as_str();
    let horizon = self.config.earnings_horizon.as_str();

    debug!("Fetching {} datasets for {} ({} at a time)", total, ticker, self.config.concurrency());

    let mut responses = std::pin::pin!(
      stream::iter(Dataset::ALL.into_iter().enumerate())
        .map(move |(index, dataset)| async move {
          info!("[{}/{}] Fetching {}...", index + 1, total, dataset.label());
          if let Some(pb) = progress_ref {
            pb.set_message(format!("Fetching {}", dataset.label()));
          }

          let result = fundamentals.fetch_dataset(dataset, symbol, horizon).await;

          if let Some(pb) = progress_ref {
            pb.inc(1);
          }
          (dataset, result)
        })
        .buffered(self.config.concurrency())
    );

    let mut raw = RawDataset::new();
    let mut report = FetchReport::default();

    while let Some((dataset, result)) = responses.next().await {
      match result {
        Ok(payload) => {
          if payload.as_object().is_some_and(|body| body.is_empty()) {
            warn!("Empty {} response for {}; is the symbol listed?", dataset.label(), ticker);
          }
          raw.insert(dataset, payload);
          report.succeeded.push(dataset);
        }
        Err(e) if e.is_fatal() => {
          error!("✗ {} request rejected: {}", dataset.label(), e);
          if let Some(pb) = &progress {
            pb.abandon_with_message("Fetch aborted");
          }
          return Err(e.into());
        }
        Err(e) => {
          warn!("✗ Failed to fetch {}: {}", dataset.label(), e);
          report.failed.push((dataset, e.to_string()));
        }
      }
    }

    if let Some(pb) = &progress {
      pb.finish_with_message("Fetch complete");
    }

    if raw.is_empty() {
      return Err(PipelineError::FetchFailed(format!(
        "no dataset could be fetched for {}: {}",
        ticker,
        report.failure_summary()
      )));
    }

    if !report.is_complete() {
      if !self.config.allow_partial_fetch {
        return Err(PipelineError::FetchFailed(format!(
          "{} of {} datasets failed for {}: {}",
          report.failed.len(),
          total,
          ticker,
          report.failure_summary()
        )));
      }
      warn!("Fetched {}/{} datasets for {}", report.succeeded.len(), total, ticker);
    }

    Ok(FetchOutcome { raw, report })
  }
}

#[async_trait]
impl Stage for FetchStage {
  fn name(&self) -> &'static str {
    "fetch"
  }

  fn description(&self) -> &'static str {
    "Fetch data from Alpha Vantage API"
  }

  #[instrument(name = "fetch", skip(self), fields(ticker = %ticker))]
  async fn run(&self, ticker: &Ticker) -> PipelineResult<PathBuf> {
    let outcome = self.fetch_all(ticker).await?;
    let path = self.store.write(ticker, Artifact::Raw, &outcome.raw).await?;

    info!("✓ Raw data saved to {}", path.display());
    Ok(path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use av_core::Config;
  use serde_json::json;
  use wiremock::matchers::query_param;
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn stage_for(server: &MockServer, dir: &std::path::Path, allow_partial_fetch: bool) -> FetchStage {
    let config =
      Config::default_with_key("test_key".to_string()).with_base_url(format!("{}/query", server.uri()));
    let client = AlphaVantageClient::new(config).unwrap();
    let pipeline_config = PipelineConfig {
      data_dir: dir.to_path_buf(),
      show_progress: false,
      allow_partial_fetch,
      ..PipelineConfig::default()
    };
    FetchStage::new(client, DataStore::new(dir), pipeline_config)
  }

  async fn mount_json(server: &MockServer, function: &str, body: serde_json::Value) {
    Mock::given(query_param("function", function))
      .respond_with(ResponseTemplate::new(200).set_body_json(body))
      .mount(server)
      .await;
  }

  #[tokio::test]
  async fn test_partial_fetch_records_failures() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    mount_json(&server, "OVERVIEW", json!({"Symbol": "IBM"})).await;
    mount_json(&server, "DIVIDENDS", json!({"symbol": "IBM", "data": []})).await;
    Mock::given(query_param("function", "EARNINGS_CALENDAR"))
      .respond_with(ResponseTemplate::new(200).set_body_string("symbol,name,reportDate\nIBM,IBM,2025-01-22\n"))
      .mount(&server)
      .await;
    Mock::given(wiremock::matchers::any())
      .respond_with(ResponseTemplate::new(500))
      .with_priority(10)
      .mount(&server)
      .await;

    let outcome = stage_for(&server, dir.path(), true).fetch_all(&Ticker::new("IBM").unwrap()).await.unwrap();

    assert_eq!(
      outcome.report.succeeded,
      vec![Dataset::Overview, Dataset::EarningsCalendar, Dataset::Dividends]
    );
    assert_eq!(outcome.report.failed.len(), 5);
    assert!(!outcome.raw.contains(Dataset::BalanceSheet));
    assert_eq!(outcome.raw.get(Dataset::EarningsCalendar).unwrap()[0]["reportDate"], "2025-01-22");
  }

  #[tokio::test]
  async fn test_strict_mode_rejects_partial_fetch() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    mount_json(&server, "OVERVIEW", json!({"Symbol": "IBM"})).await;
    Mock::given(wiremock::matchers::any())
      .respond_with(ResponseTemplate::new(500))
      .with_priority(10)
      .mount(&server)
      .await;

    let stage = stage_for(&server, dir.path(), false);
    let err = stage.run(&Ticker::new("IBM").unwrap()).await.unwrap_err();

    assert!(matches!(err, PipelineError::FetchFailed(_)));
    assert!(!dir.path().join("IBM_raw_data.json").exists());
  }

  #[tokio::test]
  async fn test_rejected_key_stops_immediately() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    Mock::given(wiremock::matchers::any())
      .respond_with(
        ResponseTemplate::new(200)
          .set_body_json(json!({"Error Message": "the parameter apikey is invalid or missing."})),
      )
      .expect(1)
      .mount(&server)
      .await;

    let err = stage_for(&server, dir.path(), true).fetch_all(&Ticker::new("IBM").unwrap()).await.unwrap_err();
    assert!(matches!(err, PipelineError::ConfigurationError(_)));
  }

  #[test]
  fn test_failure_summary() {
    let report = FetchReport {
      succeeded: vec![Dataset::Overview],
      failed: vec![(Dataset::Dividends, "HTTP error: 500".to_string())],
    };
    assert!(!report.is_complete());
    assert_eq!(report.failure_summary(), "dividends: HTTP error: 500");
  }
}
