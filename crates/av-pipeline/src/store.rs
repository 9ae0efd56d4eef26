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

//! File-backed storage for the per-ticker artifacts

use crate::{PipelineError, PipelineResult};
use av_core::Ticker;
use serde::{Serialize, de::DeserializeOwned};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The three JSON documents produced for every ticker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
  Raw,
  Extracted,
  Formatted,
}

impl Artifact {
  fn suffix(self) -> &'static str {
    match self {
      Artifact::Raw => "raw_data",
      Artifact::Extracted => "extracted_data",
      Artifact::Formatted => "formatted_data",
    }
  }
}

/// Reads and writes `{data_dir}/{TICKER}_{kind}.json`
#[derive(Debug, Clone)]
pub struct DataStore {
  data_dir: PathBuf,
}

impl DataStore {
  pub fn new(data_dir: impl Into<PathBuf>) -> Self {
    Self { data_dir: data_dir.into() }
  }

  pub fn data_dir(&self) -> &Path {
    &self.data_dir
  }

  pub fn path(&self, ticker: &Ticker, artifact: Artifact) -> PathBuf {
    self.data_dir.join(format!("{}_{}.json", ticker, artifact.suffix()))
  }

  /// Serialise `value` as pretty JSON, replacing any previous file.
  pub async fn write<T: Serialize>(
    &self,
    ticker: &Ticker,
    artifact: Artifact,
    value: &T,
  ) -> PipelineResult<PathBuf> {
    let path = self.path(ticker, artifact);
    tokio::fs::create_dir_all(&self.data_dir).await?;

    let bytes = serde_json::to_vec_pretty(value)?;
    tokio::fs::write(&path, bytes).await?;

    debug!("Wrote {}", path.display());
    Ok(path)
  }

  /// Load an artifact written by an earlier stage.
  pub async fn read<T: DeserializeOwned>(
    &self,
    ticker: &Ticker,
    artifact: Artifact,
  ) -> PipelineResult<T> {
    let path = self.path(ticker, artifact);

    let bytes = match tokio::fs::read(&path).await {
      Ok(bytes) => bytes,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        return Err(PipelineError::MissingInput { path });
      }
      Err(e) => return Err(e.into()),
    };

    debug!("Read {} ({} bytes)", path.display(), bytes.len());
    Ok(serde_json::from_slice(&bytes)?)
  }
}
