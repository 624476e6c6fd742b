//! # Teller SDK
//!
//! A client-side controller for a ledger-backed teller account. It mediates
//! between an environment-injected account provider, a deployed ledger
//! contract, and an external fiat-rate feed, letting a single user deposit
//! and withdraw funds subject to configured limits and view the balance in
//! both native units and fiat.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, scaling and currency math (pure, sync)
//! 2. **Seams** — `WalletProvider` / `LedgerContract` traits for the
//!    injected provider and the on-chain contract
//! 3. **Rate feed** — HTTP price source behind a `RateSource` trait
//! 4. **High-Level Client** — `TellerClient` with nested sub-clients over a
//!    shared session record
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use teller_sdk::prelude::*;
//!
//! let client = TellerClient::builder()
//!     .provider(provider)
//!     .contract_address("0x5fbdb2315678afecb367f032d93f642f64180aa3")
//!     .build()?;
//!
//! let account = client.accounts().connect().await?;
//! let balance = client.balances().refresh().await?;
//! let receipt = client
//!     .transactions()
//!     .deposit("0.5", AmountUnit::Native)
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, amount parsing, scaling, and currency conversion.
pub mod shared;

/// Domain modules (vertical slices): session, account, rate, balance,
/// transaction.
pub mod domain;

/// Typed on-chain interaction: contract traits, interface description,
/// binding.
pub mod ledger;

/// Unified SDK error types.
pub mod error;

/// Network endpoint constants.
pub mod network;

// ── Layer 2: Environment seams ───────────────────────────────────────────────

/// The injected account-provider trait.
pub mod provider;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `TellerClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + pure helpers
    pub use crate::shared::{
        parse_amount, to_fiat, to_native, Address, AmountUnit, Direction,
    };

    // Session types
    pub use crate::domain::session::{
        ConnectionState, Limits, SessionHandle, SessionSnapshot, SessionState,
    };

    // Domain records
    pub use crate::domain::balance::Balance;
    pub use crate::domain::rate::{ExchangeRate, RateSource};
    pub use crate::domain::transaction::Receipt;

    // Ledger seam
    pub use crate::ledger::{
        LedgerBinding, LedgerContract, LedgerInterface, PendingTransaction, TxConfirmation,
        LEDGER_INTERFACE,
    };
    pub use crate::provider::WalletProvider;

    // Errors
    pub use crate::error::{
        AmountError, BindingError, NotReadyReason, ProviderError, RateError, TellerError,
        TransactionError,
    };

    // Network
    pub use crate::network::{DEFAULT_ASSET_ID, DEFAULT_FIAT_CURRENCY, DEFAULT_RATE_API_URL};

    // Client + sub-clients
    pub use crate::client::{
        AccountsClient, BalancesClient, TellerClient, TellerClientBuilder, TransactionsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::domain::rate::{CoinGeckoFeed, RateFeedConfig};
}
