//! Finmirror Core - Domain records, export engine, and ports.
//!
//! This crate mirrors aggregated financial records into user-maintained
//! spreadsheets. It is storage-agnostic and defines the repository and grid
//! traits that the server and the `sheets` crate implement.

pub mod constants;
pub mod contributions;
pub mod entities;
pub mod errors;
pub mod exports;
pub mod fields;
pub mod historic;
pub mod positions;
pub mod settings;
pub mod transactions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
