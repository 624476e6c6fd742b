//! Shared newtypes and pure helpers used across all domain modules.
//!
//! These types are serialization-transparent: they serialize exactly as the
//! raw strings the provider and presentation layer exchange.

pub mod currency;
pub mod scaling;

pub use currency::{to_fiat, to_native};
pub use scaling::{from_base_units, to_base_units, ScalingError, NATIVE_DECIMALS};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{AmountError, BindingError};

// ─── Address ─────────────────────────────────────────────────────────────────

/// A 20-byte account or contract address, stored as a lowercase `0x`-prefixed
/// hex string.
///
/// Serializes transparently as a JSON string. Can be used as a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Parse and normalize an address string. Accepts mixed case, requires
    /// the `0x` prefix and exactly 40 hex digits.
    pub fn parse(s: &str) -> Result<Self, BindingError> {
        let bad = |reason: &str| BindingError::BadAddress {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let hex_part = s.strip_prefix("0x").ok_or_else(|| bad("missing 0x prefix"))?;
        if hex_part.len() != 40 {
            return Err(bad("expected 40 hex digits"));
        }
        hex::decode(hex_part).map_err(|_| bad("non-hex characters"))?;

        Ok(Self(format!("0x{}", hex_part.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Direction ───────────────────────────────────────────────────────────────

/// Transfer direction: into or out of the ledger account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Deposit,
    Withdraw,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdraw => write!(f, "Withdrawal"),
        }
    }
}

// ─── AmountUnit ──────────────────────────────────────────────────────────────

/// Unit a user-entered amount is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountUnit {
    Native,
    Fiat,
}

// ─── Amount parsing ──────────────────────────────────────────────────────────

/// Parse user-entered amount text into a positive `Decimal`.
pub fn parse_amount(input: &str) -> Result<Decimal, AmountError> {
    let trimmed = input.trim();
    let value = Decimal::from_str(trimmed).map_err(|_| AmountError::Invalid {
        input: input.to_string(),
        reason: "not a number".to_string(),
    })?;

    if value <= Decimal::ZERO {
        return Err(AmountError::Invalid {
            input: input.to_string(),
            reason: "must be positive".to_string(),
        });
    }

    Ok(value)
}
