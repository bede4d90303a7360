//! Financial records read from a JSON snapshot file.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use finmirror_core::contributions::{AutoContributions, ContributionRepositoryTrait};
use finmirror_core::entities::ByEntity;
use finmirror_core::errors::{Error, Result};
use finmirror_core::historic::{Historic, HistoricRepositoryTrait};
use finmirror_core::positions::{GlobalPosition, PositionRepositoryTrait};
use finmirror_core::transactions::{TransactionRepositoryTrait, Transactions};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything an export reads, as stored in the snapshot file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSnapshot {
    #[serde(default)]
    pub positions: ByEntity<GlobalPosition>,
    #[serde(default)]
    pub contributions: ByEntity<AutoContributions>,
    #[serde(default)]
    pub contributions_last_update: ByEntity<DateTime<Utc>>,
    #[serde(default)]
    pub transactions: Transactions,
    #[serde(default)]
    pub historic: Historic,
}

/// Repositories backed by a JSON snapshot file.
///
/// The file is read on every query so a refreshed snapshot is picked up by
/// the next export. A missing file is an empty snapshot.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<DataSnapshot> {
        if !self.path.exists() {
            debug!("Data file {} not found", self.path.display());
            return Ok(DataSnapshot::default());
        }
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::Repository(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::Repository(format!("{}: {}", self.path.display(), e)))
    }
}

impl PositionRepositoryTrait for SnapshotStore {
    fn get_last_grouped_by_entity(&self) -> Result<ByEntity<GlobalPosition>> {
        Ok(self.load()?.positions)
    }
}

impl ContributionRepositoryTrait for SnapshotStore {
    fn get_all_grouped_by_entity(&self) -> Result<ByEntity<AutoContributions>> {
        Ok(self.load()?.contributions)
    }

    fn get_last_update_grouped_by_entity(&self) -> Result<ByEntity<DateTime<Utc>>> {
        Ok(self.load()?.contributions_last_update)
    }
}

impl TransactionRepositoryTrait for SnapshotStore {
    fn get_all(&self) -> Result<Transactions> {
        Ok(self.load()?.transactions)
    }

    fn get_last_created_grouped_by_entity(&self) -> Result<ByEntity<DateTime<Utc>>> {
        Ok(last_created_by_entity(&self.load()?.transactions))
    }
}

impl HistoricRepositoryTrait for SnapshotStore {
    fn get_all(&self) -> Result<Historic> {
        Ok(self.load()?.historic)
    }
}

/// Newest transaction date of each entity, entities in first-seen order.
fn last_created_by_entity(transactions: &Transactions) -> ByEntity<DateTime<Utc>> {
    let dated = transactions
        .investment
        .iter()
        .map(|tx| (&tx.entity, tx.date))
        .chain(transactions.account.iter().map(|tx| (&tx.entity, tx.date)));

    let mut latest: ByEntity<DateTime<Utc>> = ByEntity::new();
    for (entity, date) in dated {
        let newer = latest.get(&entity.id).map_or(true, |current| date > *current);
        if newer {
            latest.insert(entity.clone(), date);
        }
    }
    latest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use finmirror_core::entities::FinancialEntity;
    use finmirror_core::transactions::{AccountTx, TxType};
    use rust_decimal_macros::dec;

    fn account_tx(entity: &FinancialEntity, day: u32) -> AccountTx {
        AccountTx {
            id: Default::default(),
            ref_id: format!("{}-{}", entity.id, day),
            name: "Interest".to_string(),
            amount: dec!(1.5),
            currency: "EUR".to_string(),
            tx_type: TxType::Interest,
            date: Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap(),
            entity: entity.clone(),
            is_real: true,
            fees: None,
            retentions: None,
            interest_rate: None,
            avg_balance: None,
        }
    }

    #[test]
    fn test_last_created_keeps_newest_per_entity() {
        let bank = FinancialEntity::new("BANK", "Bank");
        let broker = FinancialEntity::new("BROKER", "Broker");
        let transactions = Transactions {
            investment: Vec::new(),
            account: vec![
                account_tx(&bank, 3),
                account_tx(&broker, 1),
                account_tx(&bank, 9),
                account_tx(&bank, 5),
            ],
        };

        let latest = last_created_by_entity(&transactions);

        assert_eq!(latest.len(), 2);
        assert_eq!(
            latest.get("BANK"),
            Some(&Utc.with_ymd_and_hms(2024, 3, 9, 0, 0, 0).unwrap())
        );
        assert_eq!(
            latest.get("BROKER"),
            Some(&Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_reads_snapshot_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(
            &path,
            r#"{
                "contributionsLastUpdate": [
                    { "entity": { "id": "MY_INVESTOR", "name": "MyInvestor" }, "data": "2024-05-01T10:00:00Z" }
                ],
                "historic": { "entries": [] }
            }"#,
        )
        .unwrap();
        let store = SnapshotStore::new(&path);

        let last_update = store.get_last_update_grouped_by_entity().unwrap();
        assert_eq!(last_update.len(), 1);
        assert!(store.get_last_grouped_by_entity().unwrap().is_empty());
        assert!(HistoricRepositoryTrait::get_all(&store).unwrap().entries.is_empty());
    }

    #[test]
    fn test_missing_file_is_empty_and_corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("absent.json"));
        assert!(TransactionRepositoryTrait::get_all(&store)
            .unwrap()
            .investment
            .is_empty());

        let corrupt = dir.path().join("corrupt.json");
        std::fs::write(&corrupt, "{ not json").unwrap();
        let store = SnapshotStore::new(&corrupt);
        assert!(matches!(
            store.get_last_grouped_by_entity(),
            Err(Error::Repository(_))
        ));
    }
}
