//! Typed on-chain interaction: the contract trait seam, the static interface
//! description, and the session-scoped binding.

pub mod binding;
pub mod interface;

pub use binding::LedgerBinding;
pub use interface::{LedgerInterface, MethodSig, LEDGER_INTERFACE};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TransactionError;

/// Typed handle to the deployed ledger contract, signer already attached.
///
/// Amounts are in the contract's smallest denomination.
#[async_trait]
pub trait LedgerContract: Send + Sync {
    /// Read the account balance held by the contract.
    async fn get_balance(&self) -> Result<u128, TransactionError>;

    /// Submit a deposit. Returns a handle to the in-flight transaction.
    async fn deposit(&self, base_amount: u128)
        -> Result<Box<dyn PendingTransaction>, TransactionError>;

    /// Submit a withdrawal. Returns a handle to the in-flight transaction.
    async fn withdraw(&self, base_amount: u128)
        -> Result<Box<dyn PendingTransaction>, TransactionError>;
}

/// An in-flight transaction awaiting consensus.
#[async_trait]
pub trait PendingTransaction: Send {
    /// Suspend until the ledger durably accepts the transaction.
    ///
    /// No timeout is enforced at this layer; a hung provider suspends
    /// the caller indefinitely.
    async fn confirmed(self: Box<Self>) -> Result<TxConfirmation, TransactionError>;
}

/// Details of a confirmed transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxConfirmation {
    pub tx_hash: Option<String>,
    pub confirmed_at: DateTime<Utc>,
}

impl TxConfirmation {
    pub fn new(tx_hash: Option<String>) -> Self {
        Self {
            tx_hash,
            confirmed_at: Utc::now(),
        }
    }
}
