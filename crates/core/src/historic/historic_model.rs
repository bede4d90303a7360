//! Historic (closed or matured) investment models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::FinancialEntity;
use crate::positions::ProductType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricEntry {
    pub id: Uuid,
    pub name: String,
    pub invested: Decimal,
    pub repaid: Option<Decimal>,
    pub returned: Option<Decimal>,
    pub currency: String,
    pub last_invest_date: DateTime<Utc>,
    pub last_tx_date: DateTime<Utc>,
    pub effective_maturity: Option<DateTime<Utc>>,
    pub net_return: Option<Decimal>,
    pub fees: Option<Decimal>,
    pub retentions: Option<Decimal>,
    pub interests: Option<Decimal>,
    pub state: Option<String>,
    pub entity: FinancialEntity,
    pub product_type: ProductType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Historic {
    #[serde(default)]
    pub entries: Vec<HistoricEntry>,
}

crate::field_record!(HistoricEntry {
    id,
    name,
    invested,
    repaid,
    returned,
    currency,
    last_invest_date,
    last_tx_date,
    effective_maturity,
    net_return,
    fees,
    retentions,
    interests,
    state,
    entity,
    product_type,
});
crate::field_record!(Historic { entries });
