//! Repository traits for transactions.

use chrono::{DateTime, Utc};

use crate::entities::ByEntity;
use crate::errors::Result;
use crate::transactions::Transactions;

pub trait TransactionRepositoryTrait: Send + Sync {
    fn get_all(&self) -> Result<Transactions>;

    /// Creation time of the newest stored transaction of each entity.
    fn get_last_created_grouped_by_entity(&self) -> Result<ByEntity<DateTime<Utc>>>;
}
