pub mod api;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod settings_loader;
pub mod snapshot_store;
mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
