//! Investment and account transactions across all source entities.

mod transactions_model;
mod transactions_traits;

pub use transactions_model::*;
pub use transactions_traits::TransactionRepositoryTrait;
