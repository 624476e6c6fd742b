//! Session state — the aggregate record every component reads and updates.
//!
//! Each field has exactly one writing component: the account connector owns
//! `connection` and `account`, the binding is set once, the balance service
//! owns `balance` and `rate`. Limits never change after construction. The
//! presentation layer consumes read-only snapshots.

use std::sync::Arc;

use async_lock::RwLock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::balance::Balance;
use crate::domain::rate::ExchangeRate;
use crate::ledger::LedgerBinding;
use crate::shared::{Address, Direction};

/// Connection lifecycle. There is no automatic transition back to
/// `Disconnected`; resolving a lost provider is left to the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Disconnected,
    Detected,
    Connected,
}

/// Per-direction transfer limits in native whole units. Fixed at build of
/// the client; never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub deposit: Decimal,
    pub withdraw: Decimal,
}

impl Limits {
    pub fn for_direction(&self, direction: Direction) -> Decimal {
        match direction {
            Direction::Deposit => self.deposit,
            Direction::Withdraw => self.withdraw,
        }
    }
}

/// The aggregate session record.
pub struct SessionState {
    pub connection: ConnectionState,
    pub account: Option<Address>,
    /// Set once per session; later connect calls keep the first binding.
    pub binding: Option<Arc<LedgerBinding>>,
    pub balance: Option<Balance>,
    /// Last successfully fetched rate. Kept across failed refreshes.
    pub rate: Option<ExchangeRate>,
    pub limits: Limits,
}

impl SessionState {
    pub fn new(limits: Limits) -> Self {
        Self {
            connection: ConnectionState::Disconnected,
            account: None,
            binding: None,
            balance: None,
            rate: None,
            limits,
        }
    }

    /// A serializable view for the presentation layer.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            connection: self.connection,
            account: self.account.clone(),
            contract: self.binding.as_ref().map(|b| b.address().clone()),
            balance: self.balance.clone(),
            rate: self.rate.clone(),
            limits: self.limits,
        }
    }
}

/// Shared handle to the session record.
pub type SessionHandle = Arc<RwLock<SessionState>>;

/// Read-only, serializable session view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub connection: ConnectionState,
    pub account: Option<Address>,
    pub contract: Option<Address>,
    pub balance: Option<Balance>,
    pub rate: Option<ExchangeRate>,
    pub limits: Limits,
}
