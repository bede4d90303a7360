//! Source entities and entity-keyed record groups.

mod entities_model;

pub use entities_model::{ByEntity, EntityEntry, FinancialEntity};
