//! Repository traits for positions.

use crate::entities::ByEntity;
use crate::errors::Result;
use crate::positions::GlobalPosition;

/// Read access to the latest position of every source entity.
pub trait PositionRepositoryTrait: Send + Sync {
    fn get_last_grouped_by_entity(&self) -> Result<ByEntity<GlobalPosition>>;
}
