/*!
Structs related to Monzo transactions APIs' responses.
*/

use serde::{Deserialize, Serialize};

/**
Structure representing a Monzo transaction, as returned by `GET /transactions/{id}`.

See https://docs.monzo.com/#transactions.

Only the fields we need are kept, everything else in the response is ignored.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// ID of the transaction.
    #[serde(default)]
    pub id: String,

    /// Amount in minor units. Negative for debits, positive for credits.
    pub amount: i64,

    /// Balance of the account *after* this transaction was applied, in minor units.
    pub account_balance: i64,

    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: String,

    #[serde(default)]
    pub created: Option<String>,

    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Balance of the account right before this transaction landed.
    pub fn balance_before(&self) -> i64 {
        self.account_balance - self.amount
    }
}

/**
Response of /transactions/{id}
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub transaction: Transaction,
}
