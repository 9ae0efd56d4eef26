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

//! The unit of work the pipeline is built from

use crate::PipelineResult;
use async_trait::async_trait;
use av_core::Ticker;
use std::path::PathBuf;

/// One step of the fundamentals pipeline.
///
/// A stage reads whatever its predecessor left on disk, writes exactly one
/// artifact for the ticker and returns that artifact's path.
#[async_trait]
pub trait Stage: Send + Sync {
  /// Short machine name used in logs and errors
  fn name(&self) -> &'static str;

  /// Banner shown when the stage starts
  fn description(&self) -> &'static str;

  /// Run the stage for one ticker
  async fn run(&self, ticker: &Ticker) -> PipelineResult<PathBuf>;
}
