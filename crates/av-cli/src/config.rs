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

use anyhow::{Context, Result};
use av_core::Config as CoreConfig;
use av_pipeline::PipelineConfig;
use clap::Args;
use std::path::PathBuf;

/// Options shared by every subcommand
#[derive(Args, Clone, Debug)]
pub struct PipelineArgs {
  /// Directory holding the JSON artifacts
  #[arg(long, global = true, env = "AV_DATA_DIR", default_value = av_pipeline::config::DEFAULT_DATA_DIR)]
  pub data_dir: PathBuf,

  /// Number of concurrent dataset requests during fetch
  #[arg(short, long, global = true, default_value = "1")]
  pub concurrent: usize,

  /// Fail the fetch if any dataset could not be downloaded
  #[arg(long, global = true)]
  pub strict: bool,

  /// Disable the progress bar
  #[arg(long, global = true)]
  pub no_progress: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
  pub api_config: Option<CoreConfig>,
  pub pipeline_config: PipelineConfig,
}

impl Config {
  /// Build the configuration; the API key is only read when `needs_api` is set.
  pub fn load(args: &PipelineArgs, needs_api: bool) -> Result<Self> {
    let api_config = if needs_api {
      Some(
        CoreConfig::from_env()
          .context("ALPHA_VANTAGE_API_KEY must be set in the environment or a .env file")?,
      )
    } else {
      None
    };

    Ok(Self { api_config, pipeline_config: Self::pipeline_config(args) })
  }

  pub fn pipeline_config(args: &PipelineArgs) -> PipelineConfig {
    PipelineConfig {
      data_dir: args.data_dir.clone(),
      max_concurrent_requests: args.concurrent,
      allow_partial_fetch: !args.strict,
      show_progress: !args.no_progress,
      ..PipelineConfig::default()
    }
  }

  pub fn api_config(&self) -> Result<&CoreConfig> {
    self.api_config.as_ref().context("API configuration was not loaded")
  }
}
