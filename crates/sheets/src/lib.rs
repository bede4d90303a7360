//! Finmirror Sheets - Google Sheets adapter for the export engine.
//!
//! This crate provides the REST client that reads and writes cell ranges
//! through the Sheets v4 values API, implementing the core
//! `GridClientTrait` port.
//!
//! # Usage
//!
//! ```rust,ignore
//! use finmirror_sheets::SheetsClient;
//!
//! let client = SheetsClient::new("https://sheets.googleapis.com")?;
//! let grid = client.get_values("access_token", "spreadsheet-id", "Stocks").await?;
//! ```

mod client;
mod error;
mod types;

pub use client::{SheetsClient, DEFAULT_BASE_URL};
pub use error::{Result, SheetsError};
pub use types::*;
