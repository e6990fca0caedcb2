//! In-memory, single slot store of the last webhook transaction id

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Remembers only the most recent transaction id, so only back-to-back repeats are caught.
/// Nothing is persisted across restarts.
#[derive(Clone, Default)]
pub struct LastTransactionDb {
    last: Arc<Mutex<Option<String>>>,
}

impl LastTransactionDb {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        // a poisoned slot still holds a valid id
        self.last.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Checks the id against the last seen one and stores it, under a single lock.
    ///
    /// Returns `false` for a duplicate delivery, in which case the stored id is left untouched.
    pub fn record(&self, transaction_id: &str) -> bool {
        let mut last = self.lock();
        if let Some(last_id) = last.as_deref() {
            if !last_id.is_empty() && last_id == transaction_id {
                debug!("Transaction {} matches last seen id", transaction_id);
                return false;
            }
        }
        *last = Some(transaction_id.to_string());
        true
    }

    pub fn last(&self) -> Option<String> {
        self.lock().clone()
    }
}
