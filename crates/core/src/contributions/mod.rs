//! Automatic (periodic) contributions per source entity.

mod contributions_model;
mod contributions_traits;

pub use contributions_model::*;
pub use contributions_traits::ContributionRepositoryTrait;
