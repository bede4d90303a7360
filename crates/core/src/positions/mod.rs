//! Aggregated positions: accounts and investment products per source entity.

mod positions_model;
mod positions_traits;

pub use positions_model::*;
pub use positions_traits::PositionRepositoryTrait;
