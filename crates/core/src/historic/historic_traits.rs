//! Repository traits for historic investments.

use crate::errors::Result;
use crate::historic::Historic;

pub trait HistoricRepositoryTrait: Send + Sync {
    fn get_all(&self) -> Result<Historic>;
}
