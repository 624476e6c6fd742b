//! Exchange-rate domain — the native→fiat rate and its sources.

#[cfg(feature = "http")]
pub mod feed;
pub mod wire;

#[cfg(feature = "http")]
pub use feed::{CoinGeckoFeed, RateFeedConfig};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RateError;

/// A fiat-per-native-unit exchange rate and the moment it was fetched.
///
/// No TTL is enforced; the rate refreshes only when a balance refresh runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Fiat units per 1 native whole unit. Always positive.
    pub fiat_per_native: Decimal,
    pub fetched_at: DateTime<Utc>,
}

impl ExchangeRate {
    /// Build a rate, rejecting non-positive values.
    pub fn new(fiat_per_native: Decimal) -> Result<Self, RateError> {
        if fiat_per_native <= Decimal::ZERO {
            return Err(RateError::Malformed {
                detail: format!("non-positive rate {}", fiat_per_native),
            });
        }
        Ok(Self {
            fiat_per_native,
            fetched_at: Utc::now(),
        })
    }
}

/// A source of the current exchange rate.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rate(&self) -> Result<ExchangeRate, RateError>;
}
