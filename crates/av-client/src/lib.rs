//! # av-client
//!
//! A thin AlphaVantage API client for the fundamentals endpoints.
//!
//! ## Features
//!
//! - **Raw payloads**: JSON endpoints return `serde_json::Value` exactly as received
//! - **CSV aware**: the earnings calendar is decoded into header-keyed rows
//! - **Rate Limiting**: a shared `governor` quota paces every request
//! - **API notices**: `Note` / `Information` / `Error Message` bodies become errors
//!
//! ## Usage
//!
//! ```rust,no_run
//! use av_client::AlphaVantageClient;
//! use av_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = AlphaVantageClient::new(config)?;
//!
//!     let overview = client.fundamentals().company_overview("AAPL").await?;
//!     println!("Market cap: {}", overview["MarketCapitalization"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, av_core::Error>` for consistent error handling
//! across the entire av-* ecosystem.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use av_core::{Config, Error, Result};
pub use client::AlphaVantageClient;
pub use endpoints::fundamentals::{DEFAULT_EARNINGS_HORIZON, FundamentalsEndpoints};
pub use transport::CsvRows;
