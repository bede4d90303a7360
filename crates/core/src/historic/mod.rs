//! Closed and matured investments.

mod historic_model;
mod historic_traits;

pub use historic_model::*;
pub use historic_traits::HistoricRepositoryTrait;
