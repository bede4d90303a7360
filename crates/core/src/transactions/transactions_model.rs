//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::entities::FinancialEntity;
use crate::positions::ProductType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxType {
    Buy,
    Sell,
    Dividend,
    RightIssue,
    RightSell,
    Subscription,
    SwapFrom,
    SwapTo,
    Interest,
    Investment,
    Maturity,
    Repayment,
    Fee,
    TransferIn,
    TransferOut,
}

impl TxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Buy => "BUY",
            TxType::Sell => "SELL",
            TxType::Dividend => "DIVIDEND",
            TxType::RightIssue => "RIGHT_ISSUE",
            TxType::RightSell => "RIGHT_SELL",
            TxType::Subscription => "SUBSCRIPTION",
            TxType::SwapFrom => "SWAP_FROM",
            TxType::SwapTo => "SWAP_TO",
            TxType::Interest => "INTEREST",
            TxType::Investment => "INVESTMENT",
            TxType::Maturity => "MATURITY",
            TxType::Repayment => "REPAYMENT",
            TxType::Fee => "FEE",
            TxType::TransferIn => "TRANSFER_IN",
            TxType::TransferOut => "TRANSFER_OUT",
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

crate::text_field!(TxType);

/// Buy/sell/interest movement on an investment product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentTx {
    pub id: Uuid,
    pub ref_id: String,
    pub name: String,
    pub amount: Decimal,
    pub currency: String,
    pub tx_type: TxType,
    pub date: DateTime<Utc>,
    pub entity: FinancialEntity,
    pub product_type: ProductType,
    pub is_real: bool,
    pub isin: Option<String>,
    pub shares: Option<Decimal>,
    pub price: Option<Decimal>,
    pub fees: Option<Decimal>,
    pub retentions: Option<Decimal>,
    pub interests: Option<Decimal>,
}

/// Cash movement on a current or savings account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTx {
    pub id: Uuid,
    pub ref_id: String,
    pub name: String,
    pub amount: Decimal,
    pub currency: String,
    pub tx_type: TxType,
    pub date: DateTime<Utc>,
    pub entity: FinancialEntity,
    pub is_real: bool,
    pub fees: Option<Decimal>,
    pub retentions: Option<Decimal>,
    pub interest_rate: Option<Decimal>,
    pub avg_balance: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transactions {
    #[serde(default)]
    pub investment: Vec<InvestmentTx>,
    #[serde(default)]
    pub account: Vec<AccountTx>,
}

crate::field_record!(InvestmentTx {
    id,
    ref_id,
    name,
    amount,
    currency,
    tx_type,
    date,
    entity,
    product_type,
    is_real,
    isin,
    shares,
    price,
    fees,
    retentions,
    interests,
});
crate::field_record!(AccountTx {
    id,
    ref_id,
    name,
    amount,
    currency,
    tx_type,
    date,
    entity,
    is_real,
    fees,
    retentions,
    interest_rate,
    avg_balance,
});
crate::field_record!(Transactions {
    investment,
    account,
});
