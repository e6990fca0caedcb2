//! Struct and methods to call Monzo's APIs

use super::{DepositRequest, Pot, Transaction, TransactionResponse};
use crate::settings::Settings;
use reqwest::{Client, RequestBuilder, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum MonzoApiError {
    #[error("request to Monzo API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Monzo API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to decode Monzo API response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct MonzoApi {
    client: Client,
    token: String,
    base_url: String,
}

impl MonzoApi {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, MonzoApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            token: token.into(),
            base_url: base_url.into(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, MonzoApiError> {
        Self::new(
            settings.api_base_url.clone(),
            settings.personal_access_token.clone(),
            settings.api_timeout,
        )
    }

    async fn send<T>(&self, request: RequestBuilder) -> Result<T, MonzoApiError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let response = request.bearer_auth(&self.token).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(MonzoApiError::Status { status, body: text });
        }

        serde_json::from_str::<T>(&text).map_err(|e| {
            error!("Failed to decode Monzo API response: {:?}", &text);
            MonzoApiError::Decode(e)
        })
    }

    pub async fn get_transaction(&self, transaction_id: &str) -> Result<Transaction, MonzoApiError> {
        let api = format!("{}/transactions/{}", self.base_url, transaction_id);
        debug!("Calling Monzo API: GET {}", api);

        let resp = self
            .send::<TransactionResponse>(self.client.get(&api))
            .await?;
        Ok(resp.transaction)
    }

    /// Moves `amount` from `account_id` into the pot. `idempotency_key` makes retries a no-op on Monzo's side.
    pub async fn deposit(
        &self,
        pot_id: &str,
        account_id: &str,
        amount: i64,
        idempotency_key: &str,
    ) -> Result<Pot, MonzoApiError> {
        let api = format!("{}/pots/{}/deposit", self.base_url, pot_id);
        debug!("Calling Monzo API: PUT {}", api);

        let form = DepositRequest {
            source_account_id: account_id.to_string(),
            amount,
            dedupe_id: idempotency_key.to_string(),
        };
        self.send::<Pot>(self.client.put(&api).form(&form)).await
    }
}
