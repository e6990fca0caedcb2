mod last_transaction_db;

pub use self::last_transaction_db::*;
