//! Source entity domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// External institution or virtual source a record originates from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialEntity {
    pub id: String,
    pub name: String,
}

impl FinancialEntity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for FinancialEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

crate::field_record!(FinancialEntity { id, name });

/// One entry of a [`ByEntity`] mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityEntry<T> {
    pub entity: FinancialEntity,
    pub data: T,
}

/// Records keyed by source entity.
///
/// Keeps insertion order so exports are reproducible between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByEntity<T>(Vec<EntityEntry<T>>);

impl<T> Default for ByEntity<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> ByEntity<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the data of an entity. A replaced entity keeps
    /// its original position.
    pub fn insert(&mut self, entity: FinancialEntity, data: T) {
        match self.0.iter_mut().find(|entry| entry.entity.id == entity.id) {
            Some(entry) => entry.data = data,
            None => self.0.push(EntityEntry { entity, data }),
        }
    }

    pub fn get(&self, entity_id: &str) -> Option<&T> {
        self.0
            .iter()
            .find(|entry| entry.entity.id == entity_id)
            .map(|entry| &entry.data)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FinancialEntity, &T)> {
        self.0.iter().map(|entry| (&entry.entity, &entry.data))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> FromIterator<(FinancialEntity, T)> for ByEntity<T> {
    fn from_iter<I: IntoIterator<Item = (FinancialEntity, T)>>(iter: I) -> Self {
        let mut grouped = ByEntity::new();
        for (entity, data) in iter {
            grouped.insert(entity, data);
        }
        grouped
    }
}
