//! # av-models
//!
//! Data models for AlphaVantage fundamentals API responses.
//!
//! Every model is lenient: fields are [`ApiField`]s that accept strings,
//! numbers or `null`, and any key the API leaves out simply decodes as empty.
//! Callers decide how an empty field is presented.
//!
//! ## Usage
//!
//! ```ignore
//! use av_models::fundamentals::CompanyOverview;
//!
//! let overview: CompanyOverview = serde_json::from_str(&overview_json)?;
//! println!("{}", overview.market_capitalization.or_na());
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod corporate_actions;
pub mod earnings;
pub mod fundamentals;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use corporate_actions::*;
pub use earnings::*;
pub use fundamentals::*;
