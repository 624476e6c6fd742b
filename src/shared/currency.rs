//! Pure currency conversion between native units and fiat.
//!
//! Fiat display values round to 2 decimal places, native equivalents of
//! fiat-entered amounts round to 6. Midpoints round away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::AmountError;

/// Fiat amounts carry 2 decimal places.
pub const FIAT_SCALE: u32 = 2;

/// Native amounts derived from fiat carry 6 decimal places.
pub const NATIVE_SCALE: u32 = 6;

fn require_positive(value: Decimal, what: &str) -> Result<(), AmountError> {
    if value <= Decimal::ZERO {
        return Err(AmountError::Invalid {
            input: value.to_string(),
            reason: format!("{} must be positive", what),
        });
    }
    Ok(())
}

/// Convert a native-unit amount to its fiat equivalent: `amount * rate`,
/// rounded to [`FIAT_SCALE`] decimal places.
pub fn to_fiat(native: Decimal, rate: Decimal) -> Result<Decimal, AmountError> {
    require_positive(native, "amount")?;
    require_positive(rate, "rate")?;

    let fiat = native.checked_mul(rate).ok_or_else(|| AmountError::Invalid {
        input: native.to_string(),
        reason: "fiat value overflows".to_string(),
    })?;

    Ok(fiat.round_dp_with_strategy(FIAT_SCALE, RoundingStrategy::MidpointAwayFromZero))
}

/// Convert a fiat amount to its native-unit equivalent: `amount / rate`,
/// rounded to [`NATIVE_SCALE`] decimal places.
pub fn to_native(fiat: Decimal, rate: Decimal) -> Result<Decimal, AmountError> {
    require_positive(fiat, "amount")?;
    require_positive(rate, "rate")?;

    let native = fiat.checked_div(rate).ok_or_else(|| AmountError::Invalid {
        input: fiat.to_string(),
        reason: "native value overflows".to_string(),
    })?;

    Ok(native.round_dp_with_strategy(NATIVE_SCALE, RoundingStrategy::MidpointAwayFromZero))
}
