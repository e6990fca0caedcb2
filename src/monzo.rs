mod api;
mod pot;
mod transaction;
pub mod webhook;

pub use self::api::*;
pub use self::pot::*;
pub use self::transaction::*;

/// Formats an amount in minor units (pence) as major units with two decimals.
pub fn format_minor_units(amount: i64) -> String {
    format!("{:.2}", amount as f64 / 100.0)
}
