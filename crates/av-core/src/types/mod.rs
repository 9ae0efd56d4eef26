//! Common types used across av-* crates

pub mod dataset;
pub mod ticker;

pub use dataset::Dataset;
pub use ticker::Ticker;
