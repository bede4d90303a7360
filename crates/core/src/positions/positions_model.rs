//! Position domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Kind of financial product a position or transaction refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Account,
    StockEtf,
    Fund,
    RealStateCf,
    Factoring,
    Deposit,
    Crowdlending,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Account => "ACCOUNT",
            ProductType::StockEtf => "STOCK_ETF",
            ProductType::Fund => "FUND",
            ProductType::RealStateCf => "REAL_STATE_CF",
            ProductType::Factoring => "FACTORING",
            ProductType::Deposit => "DEPOSIT",
            ProductType::Crowdlending => "CROWDLENDING",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

crate::text_field!(ProductType);

/// Latest aggregated position of one source entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalPosition {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub account: Option<Account>,
    pub investments: Option<Investments>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub total: Decimal,
    pub currency: String,
    pub retained: Option<Decimal>,
    pub interest: Option<Decimal>,
    pub pending_transfers: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investments {
    pub stocks: Option<StockInvestments>,
    pub funds: Option<FundInvestments>,
    pub factoring: Option<FactoringInvestments>,
    pub real_state_cf: Option<RealStateCfInvestments>,
    pub deposits: Option<DepositInvestments>,
    pub crowdlending: Option<Crowdlending>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDetail {
    pub id: Uuid,
    pub name: String,
    pub ticker: String,
    pub isin: String,
    pub market: String,
    pub shares: Decimal,
    pub initial_investment: Decimal,
    pub average_buy_price: Decimal,
    pub market_value: Decimal,
    pub currency: String,
    pub subtype: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockInvestments {
    pub investment: Decimal,
    pub market_value: Decimal,
    #[serde(default)]
    pub details: Vec<StockDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundDetail {
    pub id: Uuid,
    pub name: String,
    pub isin: String,
    pub market: String,
    pub shares: Decimal,
    pub initial_investment: Decimal,
    pub average_buy_price: Decimal,
    pub market_value: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundInvestments {
    pub investment: Decimal,
    pub market_value: Decimal,
    #[serde(default)]
    pub details: Vec<FundDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoringDetail {
    pub id: Uuid,
    pub name: String,
    pub amount: Decimal,
    pub currency: String,
    pub interest_rate: Decimal,
    pub gross_interest_rate: Decimal,
    pub last_invest_date: Option<DateTime<Utc>>,
    pub maturity: NaiveDate,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoringInvestments {
    pub total: Decimal,
    pub weighted_interest_rate: Decimal,
    #[serde(default)]
    pub details: Vec<FactoringDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealStateCfDetail {
    pub id: Uuid,
    pub name: String,
    pub amount: Decimal,
    pub pending_amount: Decimal,
    pub currency: String,
    pub interest_rate: Decimal,
    pub last_invest_date: Option<DateTime<Utc>>,
    pub maturity: NaiveDate,
    pub extended_maturity: Option<NaiveDate>,
    pub project_type: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealStateCfInvestments {
    pub total: Decimal,
    pub weighted_interest_rate: Decimal,
    #[serde(default)]
    pub details: Vec<RealStateCfDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositDetail {
    pub id: Uuid,
    pub name: String,
    pub amount: Decimal,
    pub currency: String,
    pub expected_interests: Decimal,
    pub interest_rate: Decimal,
    pub creation: DateTime<Utc>,
    pub maturity: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositInvestments {
    pub total: Decimal,
    pub expected_interests: Decimal,
    pub weighted_interest_rate: Decimal,
    #[serde(default)]
    pub details: Vec<DepositDetail>,
}

/// Crowdlending platforms only report aggregates, split by loan state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crowdlending {
    pub id: Uuid,
    pub total: Decimal,
    pub weighted_interest_rate: Decimal,
    pub currency: String,
    #[serde(default)]
    pub distribution: BTreeMap<String, Decimal>,
}

crate::field_record!(GlobalPosition {
    id,
    date,
    account,
    investments,
});
crate::field_record!(Account {
    total,
    currency,
    retained,
    interest,
    pending_transfers,
});
crate::field_record!(Investments {
    stocks,
    funds,
    factoring,
    real_state_cf,
    deposits,
    crowdlending,
});
crate::field_record!(StockDetail {
    id,
    name,
    ticker,
    isin,
    market,
    shares,
    initial_investment,
    average_buy_price,
    market_value,
    currency,
    subtype,
});
crate::field_record!(StockInvestments {
    investment,
    market_value,
    details,
});
crate::field_record!(FundDetail {
    id,
    name,
    isin,
    market,
    shares,
    initial_investment,
    average_buy_price,
    market_value,
    currency,
});
crate::field_record!(FundInvestments {
    investment,
    market_value,
    details,
});
crate::field_record!(FactoringDetail {
    id,
    name,
    amount,
    currency,
    interest_rate,
    gross_interest_rate,
    last_invest_date,
    maturity,
    state,
});
crate::field_record!(FactoringInvestments {
    total,
    weighted_interest_rate,
    details,
});
crate::field_record!(RealStateCfDetail {
    id,
    name,
    amount,
    pending_amount,
    currency,
    interest_rate,
    last_invest_date,
    maturity,
    extended_maturity,
    project_type,
    state,
});
crate::field_record!(RealStateCfInvestments {
    total,
    weighted_interest_rate,
    details,
});
crate::field_record!(DepositDetail {
    id,
    name,
    amount,
    currency,
    expected_interests,
    interest_rate,
    creation,
    maturity,
});
crate::field_record!(DepositInvestments {
    total,
    expected_interests,
    weighted_interest_rate,
    details,
});
crate::field_record!(Crowdlending {
    id,
    total,
    weighted_interest_rate,
    currency,
    distribution,
});
