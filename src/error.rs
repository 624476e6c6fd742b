//! Unified SDK error types.
//!
//! Every failure surfaced to the embedding application is a distinct variant
//! so the presentation layer can render a specific message per failed
//! precondition or step — never a generic one.

use thiserror::Error;

use crate::shared::Direction;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum TellerError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Binding error: {0}")]
    Binding(#[from] BindingError),

    #[error("Rate error: {0}")]
    Rate(#[from] RateError),

    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("Session not ready: {0}")]
    NotReady(NotReadyReason),

    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),
}

/// Account-provider failures.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("No account provider is present in this environment")]
    Missing,

    #[error("Account request rejected by the user")]
    Rejected,

    #[error("Provider call failed: {0}")]
    Call(String),
}

/// Failures constructing a [`crate::ledger::LedgerBinding`].
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("Malformed contract address '{input}': {reason}")]
    BadAddress { input: String, reason: String },

    #[error("Interface description is missing required method '{method}'")]
    MissingMethod { method: &'static str },

    #[error("Provider could not construct a contract handle: {0}")]
    Construction(String),
}

/// Exchange-rate failures.
#[derive(Error, Debug)]
pub enum RateError {
    #[cfg(feature = "http")]
    #[error("Rate request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed rate response: {detail}")]
    Malformed { detail: String },

    #[error("No exchange rate has been fetched this session")]
    Unavailable,
}

/// Amount validation failures.
#[derive(Error, Debug)]
pub enum AmountError {
    #[error("Invalid amount '{input}': {reason}")]
    Invalid { input: String, reason: String },

    #[error("{direction} of {requested} native units exceeds the {limit} limit")]
    LimitExceeded {
        direction: Direction,
        requested: rust_decimal::Decimal,
        limit: rust_decimal::Decimal,
    },
}

/// Which submission precondition was unmet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotReadyReason {
    NoAccount,
    NoBinding,
}

impl std::fmt::Display for NotReadyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoAccount => write!(f, "no account is connected"),
            Self::NoBinding => write!(f, "no ledger binding has been established"),
        }
    }
}

/// On-chain submission / confirmation failures.
#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Transaction reverted: {reason}")]
    Reverted { reason: String },

    #[error("Provider reported transaction failure: {0}")]
    Provider(String),
}
