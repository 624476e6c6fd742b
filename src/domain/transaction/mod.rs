//! Transaction domain — the limit-validated deposit/withdraw pipeline.

pub mod client;

pub use client::Transactions;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::Direction;

/// Outcome of a confirmed submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub direction: Direction,
    /// Confirmed amount in native whole units.
    pub native_amount: Decimal,
    /// The same amount in the contract's smallest denomination.
    pub base_amount: u128,
    pub tx_hash: Option<String>,
    pub confirmed_at: DateTime<Utc>,
}
