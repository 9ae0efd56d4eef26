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

//! Configuration for the fundamentals pipeline

use av_client::DEFAULT_EARNINGS_HORIZON;
use std::path::PathBuf;

/// Directory the artifacts are written to unless configured otherwise
pub const DEFAULT_DATA_DIR: &str = "data";

/// Configuration for pipeline stages
#[derive(Debug, Clone)]
pub struct PipelineConfig {
  /// Directory holding the per-ticker JSON artifacts
  pub data_dir: PathBuf,

  /// Maximum concurrent dataset requests during fetch
  pub max_concurrent_requests: usize,

  /// Keep going when some datasets fail to download
  pub allow_partial_fetch: bool,

  /// Enable progress bar output
  pub show_progress: bool,

  /// Horizon passed to the earnings calendar
  pub earnings_horizon: String,
}

impl Default for PipelineConfig {
  fn default() -> Self {
    Self {
      data_dir: PathBuf::from(DEFAULT_DATA_DIR),
      max_concurrent_requests: 1,
      allow_partial_fetch: true,
      show_progress: true,
      earnings_horizon: DEFAULT_EARNINGS_HORIZON.to_string(),
    }
  }
}

impl PipelineConfig {
  /// Number of requests allowed in flight, never less than one
  pub fn concurrency(&self) -> usize {
    self.max_concurrent_requests.max(1)
  }
}
