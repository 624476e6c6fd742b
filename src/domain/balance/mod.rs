//! Balance domain — the on-chain balance and its fiat-equivalent view.

pub mod client;

pub use client::Balances;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A point-in-time view of the ledger balance.
///
/// `base_units` is ground truth; `native` and `fiat` are derived for display.
/// `fiat: None` means the rate was unavailable at refresh time — the field is
/// never left carrying a value computed from an older rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Amount in the contract's smallest denomination.
    pub base_units: u128,
    /// Whole native units.
    pub native: Decimal,
    /// Fiat equivalent at the rate fetched during this refresh.
    pub fiat: Option<Decimal>,
    pub refreshed_at: DateTime<Utc>,
}
