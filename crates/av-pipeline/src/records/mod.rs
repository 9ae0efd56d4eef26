//! Documents exchanged between the pipeline stages

pub mod extracted;
pub mod formatted;
pub mod raw;

pub use extracted::ExtractedRecord;
pub use formatted::FormattedRecord;
pub use raw::RawDataset;
