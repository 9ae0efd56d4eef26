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

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PipelineError {
  #[error("API error: {0}")]
  ApiError(String),

  #[error("IO error: {0}")]
  IoError(String),

  #[error("Serialization error: {0}")]
  SerializationError(String),

  #[error("Input file not found: {}", path.display())]
  MissingInput { path: PathBuf },

  #[error("Configuration error: {0}")]
  ConfigurationError(String),

  #[error("Fetch failed: {0}")]
  FetchFailed(String),

  #[error("Stage '{stage}' failed: {message}")]
  Stage { stage: String, message: String },
}

impl PipelineError {
  /// Wrap an error raised inside a stage with the stage's name
  pub fn in_stage(stage: &str, err: PipelineError) -> Self {
    match err {
      already @ PipelineError::Stage { .. } => already,
      other => PipelineError::Stage { stage: stage.to_string(), message: other.to_string() },
    }
  }
}

// Implement conversions manually
impl From<std::io::Error> for PipelineError {
  fn from(err: std::io::Error) -> Self {
    PipelineError::IoError(err.to_string())
  }
}

impl From<serde_json::Error> for PipelineError {
  fn from(err: serde_json::Error) -> Self {
    PipelineError::SerializationError(err.to_string())
  }
}

impl From<av_core::Error> for PipelineError {
  fn from(err: av_core::Error) -> Self {
    if err.is_fatal() {
      PipelineError::ConfigurationError(err.to_string())
    } else {
      PipelineError::ApiError(err.to_string())
    }
  }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
