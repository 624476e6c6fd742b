//! Wire types for the price API response.
//!
//! Expected shape: `{ "<asset>": { "<fiat>": <number> } }`. Anything else is
//! a parse failure, surfaced as [`RateError::Malformed`].

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::RateError;

/// Raw simple-price response: asset id → fiat currency → rate.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceResponse(pub HashMap<String, HashMap<String, Decimal>>);

impl PriceResponse {
    /// Extract the rate for one asset/fiat pair.
    pub fn rate_for(&self, asset: &str, fiat: &str) -> Result<Decimal, RateError> {
        let quotes = self.0.get(asset).ok_or_else(|| RateError::Malformed {
            detail: format!("asset '{}' missing from response", asset),
        })?;
        quotes
            .get(fiat)
            .copied()
            .ok_or_else(|| RateError::Malformed {
                detail: format!("currency '{}' missing for asset '{}'", fiat, asset),
            })
    }
}
