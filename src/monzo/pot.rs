/*!
Structs related to Monzo pots APIs.
*/

use serde::{Deserialize, Serialize};

/**
A Monzo pot, returned by `PUT /pots/{id}/deposit`.

See https://docs.monzo.com/#pots
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pot {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Pot balance in minor units, after the deposit.
    pub balance: i64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub deleted: bool,
}

/// Form body of a pot deposit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepositRequest {
    pub source_account_id: String,
    pub amount: i64,
    /// Idempotency key: Monzo ignores a repeated deposit carrying the same value.
    pub dedupe_id: String,
}
