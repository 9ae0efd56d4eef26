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
use av_client::AlphaVantageClient;
use av_pipeline::Pipeline;
use tracing::info;

use super::TickerArgs;
use crate::config::Config;

/// fetch → extract → format for one ticker
pub async fn execute(args: TickerArgs, config: Config) -> Result<()> {
  let ticker = args.resolve()?;
  let data_dir = config.pipeline_config.data_dir.clone();

  let client = AlphaVantageClient::new(config.api_config()?.clone())
    .context("Failed to create API client")?;
  let pipeline = Pipeline::standard(client, config.pipeline_config);

  let report = pipeline.run(&ticker).await.with_context(|| format!("Pipeline failed for {}", ticker))?;

  for stage in &report.stages {
    info!("  {:<8} {} ({}ms)", stage.stage, stage.artifact.display(), stage.elapsed.num_milliseconds());
  }
  info!("Next steps:");
  info!("  1. Review the data files in {}/{}_*.json", data_dir.display(), ticker);
  info!("  2. Point the dashboard at {}", data_dir.join(format!("{}_formatted_data.json", ticker)).display());

  Ok(())
}
