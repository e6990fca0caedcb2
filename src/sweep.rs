//! Webhook processing: dedupe, threshold filter, lookup and pot deposit

use crate::app_state::AppState;
use crate::monzo::format_minor_units;
use crate::monzo::webhook::WebhookPayload;
use tracing::{error, info};

/// How a single webhook delivery ended. Only ever logged, never sent back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SweepOutcome {
    EmptyBody,
    Malformed,
    Duplicate,
    BelowThreshold,
    LookupFailed,
    /// Balance before the transaction was zero or negative.
    NothingToSweep { balance: i64 },
    DepositFailed,
    Swept { amount: i64, pot_balance: i64 },
}

pub async fn process_webhook(app_state: &AppState, body: &[u8]) -> SweepOutcome {
    if body.trim_ascii().is_empty() {
        info!("empty body, pretending all is OK");
        return SweepOutcome::EmptyBody;
    }

    let webhook = match serde_json::from_slice::<WebhookPayload>(body) {
        Ok(webhook) => webhook,
        Err(e) => {
            error!("failed to unmarshal webhook payload: {}", e);
            return SweepOutcome::Malformed;
        }
    };
    let data = &webhook.data;
    let transaction_id = data.transaction_id.as_str();

    if !app_state.last_transaction_db.record(transaction_id) {
        info!(transaction_id, "ignoring duplicate webhook delivery");
        return SweepOutcome::Duplicate;
    }

    let settings = &app_state.settings;
    let threshold = settings.sweep_threshold;
    if threshold <= 0.0 || data.amount < threshold {
        info!(
            amount = data.amount,
            threshold, "ignoring inbound transaction below sweep threshold"
        );
        return SweepOutcome::BelowThreshold;
    }

    info!(
        transaction_id,
        amount = data.amount,
        threshold,
        "inbound transaction over sweep threshold"
    );

    let transaction = match app_state.monzo_api.get_transaction(transaction_id).await {
        Ok(transaction) => transaction,
        Err(e) => {
            error!("problem getting transaction {}: {}", transaction_id, e);
            return SweepOutcome::LookupFailed;
        }
    };

    let balance = transaction.balance_before();
    info!("balance before transaction: {}", balance);

    if balance <= 0 {
        info!("doing nothing as balance <= 0");
        return SweepOutcome::NothingToSweep { balance };
    }

    // the transaction id doubles as idempotency key, so a redelivery can't sweep twice
    let pot = match app_state
        .monzo_api
        .deposit(
            &settings.sweep_pot_id,
            &settings.account_id,
            balance,
            transaction_id,
        )
        .await
    {
        Ok(pot) => pot,
        Err(e) => {
            error!("problem transferring to pot '{}': {}", settings.sweep_pot_id, e);
            return SweepOutcome::DepositFailed;
        }
    };

    info!(
        "transfer successful (New bal: {} | {})",
        format_minor_units(pot.balance),
        format_minor_units(balance)
    );
    SweepOutcome::Swept {
        amount: balance,
        pot_balance: pot.balance,
    }
}
