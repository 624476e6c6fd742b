//! High-level client — `TellerClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared session handle, and the
//! accessor methods.

use std::sync::Arc;

use async_lock::{Mutex, RwLock};
use rust_decimal::Decimal;

use crate::domain::account::Accounts;
use crate::domain::balance::Balances;
use crate::domain::rate::RateSource;
use crate::domain::session::{Limits, SessionHandle, SessionSnapshot, SessionState};
use crate::domain::transaction::Transactions;
use crate::error::TellerError;
use crate::ledger::interface::{LedgerInterface, LEDGER_INTERFACE};
use crate::provider::WalletProvider;
use crate::shared::Address;

// Re-export sub-client types for convenience.
pub use crate::domain::account::Accounts as AccountsClient;
pub use crate::domain::balance::Balances as BalancesClient;
pub use crate::domain::transaction::Transactions as TransactionsClient;

/// The primary entry point for the teller SDK.
///
/// Provides nested sub-client accessors per domain: `client.accounts()`,
/// `client.balances()`, `client.transactions()`.
pub struct TellerClient {
    /// The environment-injected provider, if one was detected.
    pub(crate) provider: Option<Arc<dyn WalletProvider>>,
    pub(crate) rate_source: Arc<dyn RateSource>,
    pub(crate) contract_address: Address,
    pub(crate) interface: &'static LedgerInterface,
    /// Shared session record; each sub-client writes only its own fields.
    pub(crate) session: SessionHandle,
    /// Serializes submissions: held from contract invocation through the
    /// post-confirmation refresh.
    pub(crate) submit_lock: Arc<Mutex<()>>,
}

impl TellerClient {
    pub fn builder() -> TellerClientBuilder {
        TellerClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    pub fn balances(&self) -> Balances<'_> {
        Balances { client: self }
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { client: self }
    }

    /// Read-only session view for the presentation layer.
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.read().await.snapshot()
    }

    /// The shared session handle, for apps that drive their own reads.
    pub fn session(&self) -> SessionHandle {
        self.session.clone()
    }
}

impl Clone for TellerClient {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            rate_source: self.rate_source.clone(),
            contract_address: self.contract_address.clone(),
            interface: self.interface,
            session: self.session.clone(),
            submit_lock: self.submit_lock.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TellerClientBuilder {
    provider: Option<Arc<dyn WalletProvider>>,
    rate_source: Option<Arc<dyn RateSource>>,
    contract_address: String,
    interface: &'static LedgerInterface,
    limits: Limits,
    #[cfg(feature = "http")]
    rate_feed: crate::domain::rate::RateFeedConfig,
}

impl Default for TellerClientBuilder {
    fn default() -> Self {
        Self {
            provider: None,
            rate_source: None,
            contract_address: String::new(),
            interface: &LEDGER_INTERFACE,
            limits: Limits {
                deposit: Decimal::from(1000),
                withdraw: Decimal::from(1000),
            },
            #[cfg(feature = "http")]
            rate_feed: crate::domain::rate::RateFeedConfig::default(),
        }
    }
}

impl TellerClientBuilder {
    /// The injected account provider, when the environment has one.
    /// Leaving it unset models an environment without a provider.
    pub fn provider(mut self, provider: Arc<dyn WalletProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Override the rate source. Without this (and with the `http` feature)
    /// a [`crate::domain::rate::CoinGeckoFeed`] is constructed.
    pub fn rate_source(mut self, source: Arc<dyn RateSource>) -> Self {
        self.rate_source = Some(source);
        self
    }

    pub fn contract_address(mut self, address: &str) -> Self {
        self.contract_address = address.to_string();
        self
    }

    pub fn interface(mut self, interface: &'static LedgerInterface) -> Self {
        self.interface = interface;
        self
    }

    /// Per-direction transfer limits in native whole units.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Rate feed settings (endpoint, asset, timeout, retries).
    #[cfg(feature = "http")]
    pub fn rate_feed(mut self, config: crate::domain::rate::RateFeedConfig) -> Self {
        self.rate_feed = config;
        self
    }

    pub fn build(self) -> Result<TellerClient, TellerError> {
        let contract_address = Address::parse(&self.contract_address)?;

        #[cfg(feature = "http")]
        let rate_source = self.rate_source.unwrap_or_else(|| {
            Arc::new(crate::domain::rate::CoinGeckoFeed::new(self.rate_feed))
        });
        #[cfg(not(feature = "http"))]
        let rate_source = self
            .rate_source
            .ok_or(TellerError::Rate(crate::error::RateError::Unavailable))?;

        Ok(TellerClient {
            provider: self.provider,
            rate_source,
            contract_address,
            interface: self.interface,
            session: Arc::new(RwLock::new(SessionState::new(self.limits))),
            submit_lock: Arc::new(Mutex::new(())),
        })
    }
}
