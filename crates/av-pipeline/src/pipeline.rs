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

use av_client::AlphaVantageClient;
use av_core::Ticker;
use chrono::{DateTime, Duration, Utc};
use std::path::PathBuf;
use tracing::{error, info};

use crate::extract::ExtractStage;
use crate::fetch::FetchStage;
use crate::format::FormatStage;
use crate::store::DataStore;
use crate::{PipelineConfig, PipelineError, PipelineResult, Stage};

/// Timing and output of one completed stage
#[derive(Debug, Clone)]
pub struct StageReport {
  pub stage: &'static str,
  pub artifact: PathBuf,
  pub elapsed: Duration,
}

/// Summary of a successful pipeline run
#[derive(Debug, Clone)]
pub struct PipelineReport {
  pub ticker: Ticker,
  pub started_at: DateTime<Utc>,
  pub finished_at: DateTime<Utc>,
  pub stages: Vec<StageReport>,
}

impl PipelineReport {
  pub fn elapsed(&self) -> Duration {
    self.finished_at - self.started_at
  }

  /// Path written by the named stage, if it ran
  pub fn artifact(&self, stage: &str) -> Option<&PathBuf> {
    self.stages.iter().find(|report| report.stage == stage).map(|report| &report.artifact)
  }
}

/// Ordered list of stages run one after the other for a ticker.
///
/// The first failing stage ends the run; stages after it are never invoked
/// and files written by earlier stages are left in place.
pub struct Pipeline {
  stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
  /// fetch → extract → format, sharing one data directory
  pub fn standard(client: AlphaVantageClient, config: PipelineConfig) -> Self {
    let store = DataStore::new(config.data_dir.clone());

    Self::with_stages(vec![
      Box::new(FetchStage::new(client, store.clone(), config)),
      Box::new(ExtractStage::new(store.clone())),
      Box::new(FormatStage::new(store)),
    ])
  }

  pub fn with_stages(stages: Vec<Box<dyn Stage>>) -> Self {
    Self { stages }
  }

  pub fn stage_names(&self) -> Vec<&'static str> {
    self.stages.iter().map(|stage| stage.name()).collect()
  }

  pub async fn run(&self, ticker: &Ticker) -> PipelineResult<PipelineReport> {
    let started_at = Utc::now();
    let total = self.stages.len();

    info!("{}", "=".repeat(60));
    info!("STOCK DATA PIPELINE: {}", ticker);
    info!("{}", "=".repeat(60));

    let mut reports = Vec::with_capacity(total);

    for (index, stage) in self.stages.iter().enumerate() {
      info!("STEP {}/{}: {}", index + 1, total, stage.description());

      let stage_started = Utc::now();
      let artifact = stage.run(ticker).await.map_err(|e| {
        error!("✗ Pipeline failed at step {} ({}): {}", index + 1, stage.name(), e);
        PipelineError::in_stage(stage.name(), e)
      })?;
      let elapsed = Utc::now() - stage_started;

      info!("✓ Step {} complete in {}ms", index + 1, elapsed.num_milliseconds());
      reports.push(StageReport { stage: stage.name(), artifact, elapsed });
    }

    let report =
      PipelineReport { ticker: ticker.clone(), started_at, finished_at: Utc::now(), stages: reports };

    info!("{}", "=".repeat(60));
    info!("✓ PIPELINE COMPLETE for {} in {}ms", ticker, report.elapsed().num_milliseconds());
    info!("{}", "=".repeat(60));

    Ok(report)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use async_trait::async_trait;
  use std::sync::Arc;
  use std::sync::atomic::{AtomicUsize, Ordering};

  struct Recording {
    name: &'static str,
    calls: Arc<AtomicUsize>,
  }

  #[async_trait]
  impl Stage for Recording {
    fn name(&self) -> &'static str {
      self.name
    }

    fn description(&self) -> &'static str {
      "records invocations"
    }

    async fn run(&self, ticker: &Ticker) -> PipelineResult<PathBuf> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      Ok(PathBuf::from(format!("{}_{}.json", ticker, self.name)))
    }
  }

  struct Failing;

  #[async_trait]
  impl Stage for Failing {
    fn name(&self) -> &'static str {
      "fetch"
    }

    fn description(&self) -> &'static str {
      "always fails"
    }

    async fn run(&self, _ticker: &Ticker) -> PipelineResult<PathBuf> {
      Err(PipelineError::FetchFailed("HTTP error: 500".to_string()))
    }
  }

  fn recording(name: &'static str, calls: &Arc<AtomicUsize>) -> Box<dyn Stage> {
    Box::new(Recording { name, calls: calls.clone() })
  }

  #[tokio::test]
  async fn test_stages_run_in_order() {
    let calls = Arc::new(AtomicUsize::new(0));
    let pipeline = Pipeline::with_stages(vec![recording("a", &calls), recording("b", &calls)]);

    let report = pipeline.run(&Ticker::new("IBM").unwrap()).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(report.stages.iter().map(|s| s.stage).collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(report.artifact("b"), Some(&PathBuf::from("IBM_b.json")));
    assert!(report.elapsed() >= Duration::zero());
  }

  #[tokio::test]
  async fn test_first_failure_stops_the_run() {
    let calls = Arc::new(AtomicUsize::new(0));
    let pipeline = Pipeline::with_stages(vec![
      Box::new(Failing),
      recording("extract", &calls),
      recording("format", &calls),
    ]);

    let err = pipeline.run(&Ticker::new("IBM").unwrap()).await.unwrap_err();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    match err {
      PipelineError::Stage { stage, message } => {
        assert_eq!(stage, "fetch");
        assert!(message.contains("HTTP error: 500"));
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[test]
  fn test_standard_pipeline_order() {
    let client =
      AlphaVantageClient::new(av_core::Config::default_with_key("test_key".to_string())).unwrap();
    let pipeline = Pipeline::standard(client, PipelineConfig::default());
    assert_eq!(pipeline.stage_names(), vec!["fetch", "extract", "format"]);
  }
}
