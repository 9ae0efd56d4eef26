//! # av-pipeline
//!
//! Per-ticker fundamentals pipeline over the AlphaVantage API.
//!
//! Three stages run in order, each leaving one JSON artifact in the data
//! directory:
//! - **fetch**: eight datasets downloaded verbatim into `{TICKER}_raw_data.json`
//! - **extract**: a fixed set of fields projected into `{TICKER}_extracted_data.json`
//! - **format**: numbers rendered for display into `{TICKER}_formatted_data.json`

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod format;
pub mod formatters;
pub mod pipeline;
pub mod records;
pub mod stage;
pub mod store;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};
pub use extract::{ExtractStage, extract};
pub use fetch::{FetchOutcome, FetchReport, FetchStage};
pub use format::{FormatStage, format_record};
pub use pipeline::{Pipeline, PipelineReport, StageReport};
pub use records::{ExtractedRecord, FormattedRecord, RawDataset};
pub use stage::Stage;
pub use store::{Artifact, DataStore};

// Prelude for convenient imports
pub mod prelude {
  pub use crate::{
    DataStore, ExtractStage, FetchStage, FormatStage, Pipeline, PipelineConfig, PipelineError,
    PipelineResult, Stage,
  };
}
