//! Structs related to Monzo's webhook requests

use chrono::{DateTime, Utc};
use serde::Deserialize;

// transaction.created
// Emitted each time a new transaction lands on the account. Only the fields we use are kept.
// See https://docs.monzo.com/#transaction-created
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WebhookPayload {
    #[serde(rename = "type")]
    pub type_field: String,
    pub data: WebhookData,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WebhookData {
    pub account_id: String,
    /// Signed, in minor units. Credits are positive. Decoded as a decimal, so `2500` and
    /// `2500.0` are both accepted.
    pub amount: f64,
    pub created: Option<DateTime<Utc>>,
    #[serde(rename = "id")]
    pub transaction_id: String,
    pub is_load: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_payload() {
        let json = r#"{
            "type": "transaction.created",
            "data": {
                "account_id": "acc_00008gju41AHyfLUzBUk8A",
                "amount": -350,
                "created": "2015-09-04T14:28:40Z",
                "currency": "GBP",
                "description": "Ozone Coffee Roasters",
                "id": "tx_00008zjky19HyFLAzlUk7t",
                "is_load": false
            }
        }"#;
        let payload: WebhookPayload = serde_json::from_str(json).unwrap();

        assert_eq!(payload.type_field, "transaction.created");
        assert_eq!(payload.data.account_id, "acc_00008gju41AHyfLUzBUk8A");
        assert_eq!(payload.data.amount, -350.0);
        assert_eq!(payload.data.transaction_id, "tx_00008zjky19HyFLAzlUk7t");
        assert!(payload.data.created.is_some());
        assert!(!payload.data.is_load);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let payload: WebhookPayload =
            serde_json::from_str(r#"{"data":{"id": "tx_1234", "amount": 2500}}"#).unwrap();

        assert_eq!(payload.type_field, "");
        assert_eq!(payload.data.transaction_id, "tx_1234");
        assert_eq!(payload.data.amount, 2500.0);
        assert_eq!(payload.data.created, None);
    }

    #[test]
    fn accepts_decimal_amount() {
        let payload: WebhookPayload =
            serde_json::from_str(r#"{"data":{"id": "tx_1", "amount": 2500.5}}"#).unwrap();

        assert_eq!(payload.data.amount, 2500.5);
    }

    #[test]
    fn rejects_broken_json() {
        assert!(serde_json::from_str::<WebhookPayload>(r#"{"foo":"bar}"#).is_err());
    }
}
