//! Repository traits for automatic contributions.

use chrono::{DateTime, Utc};

use crate::contributions::AutoContributions;
use crate::entities::ByEntity;
use crate::errors::Result;

pub trait ContributionRepositoryTrait: Send + Sync {
    fn get_all_grouped_by_entity(&self) -> Result<ByEntity<AutoContributions>>;

    /// When each entity's contributions were last refreshed.
    fn get_last_update_grouped_by_entity(&self) -> Result<ByEntity<DateTime<Utc>>>;
}
