use crate::db::LastTransactionDb;
use crate::monzo::MonzoApi;
use crate::settings::Settings;
use std::sync::Arc;
use tokio_util::task::TaskTracker;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub monzo_api: MonzoApi,
    pub last_transaction_db: LastTransactionDb,
    /// Sweeps still running after their webhook was answered. Drained on shutdown.
    pub sweep_tasks: TaskTracker,
}

impl AppState {
    pub fn new(settings: Settings, monzo_api: MonzoApi) -> Self {
        Self {
            settings: Arc::new(settings),
            monzo_api,
            last_transaction_db: LastTransactionDb::new(),
            sweep_tasks: TaskTracker::new(),
        }
    }
}
