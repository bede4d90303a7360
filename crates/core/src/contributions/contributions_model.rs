//! Automatic contribution domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContributionFrequency {
    Weekly,
    Biweekly,
    Monthly,
    Bimonthly,
    Quarterly,
    Semiannual,
    Yearly,
}

impl ContributionFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionFrequency::Weekly => "WEEKLY",
            ContributionFrequency::Biweekly => "BIWEEKLY",
            ContributionFrequency::Monthly => "MONTHLY",
            ContributionFrequency::Bimonthly => "BIMONTHLY",
            ContributionFrequency::Quarterly => "QUARTERLY",
            ContributionFrequency::Semiannual => "SEMIANNUAL",
            ContributionFrequency::Yearly => "YEARLY",
        }
    }
}

impl fmt::Display for ContributionFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

crate::text_field!(ContributionFrequency);

/// A recurring contribution scheduled at a source entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodicContribution {
    pub id: Uuid,
    pub alias: Option<String>,
    pub isin: String,
    pub amount: Decimal,
    pub currency: String,
    pub since: NaiveDate,
    pub until: Option<NaiveDate>,
    pub frequency: ContributionFrequency,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoContributions {
    #[serde(default)]
    pub periodic: Vec<PeriodicContribution>,
}

crate::field_record!(PeriodicContribution {
    id,
    alias,
    isin,
    amount,
    currency,
    since,
    until,
    frequency,
    active,
});
crate::field_record!(AutoContributions { periodic });
