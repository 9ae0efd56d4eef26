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
use av_pipeline::{DataStore, FetchStage, Stage};
use tracing::info;

use super::TickerArgs;
use crate::config::Config;

pub async fn execute(args: TickerArgs, config: Config) -> Result<()> {
  let ticker = args.resolve()?;
  info!("Fetching fundamentals for {}", ticker);

  let client = AlphaVantageClient::new(config.api_config()?.clone())
    .context("Failed to create API client")?;
  let store = DataStore::new(config.pipeline_config.data_dir.clone());
  let stage = FetchStage::new(client, store, config.pipeline_config);

  stage.run(&ticker).await.with_context(|| format!("Fetch failed for {}", ticker))?;
  Ok(())
}
