//! Pure conversion module between native-unit amounts and raw base units.
//!
//! The ledger contract accounts in its smallest denomination; user-facing
//! amounts are whole native units. All math uses `rust_decimal::Decimal`
//! for exact arithmetic. No async, no network calls.

use std::fmt;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Decimal places of the native unit's smallest denomination.
pub const NATIVE_DECIMALS: u32 = 18;

/// Errors that can occur while scaling amounts.
#[derive(Debug, Clone)]
pub enum ScalingError {
    NonPositiveAmount(String),
    Overflow { context: String },
    FractionalBaseUnit { value: String },
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::NonPositiveAmount(v) => {
                write!(f, "Amount must be positive, got {}", v)
            }
            ScalingError::Overflow { context } => write!(f, "Overflow: {}", context),
            ScalingError::FractionalBaseUnit { value } => {
                write!(f, "Fractional base units not allowed: {}", value)
            }
        }
    }
}

impl std::error::Error for ScalingError {}

/// Convert a native-unit amount into raw base units.
///
/// ```text
/// base_units = amount * 10^NATIVE_DECIMALS
/// ```
///
/// Fails if the amount is not positive, carries more precision than the
/// smallest denomination, or does not fit in `u128`.
pub fn to_base_units(amount: Decimal) -> Result<u128, ScalingError> {
    if amount <= Decimal::ZERO {
        return Err(ScalingError::NonPositiveAmount(amount.to_string()));
    }

    let multiplier = Decimal::from(10u128.pow(NATIVE_DECIMALS));
    let base = amount
        .checked_mul(multiplier)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} * 10^{}", amount, NATIVE_DECIMALS),
        })?;

    if base.fract() != Decimal::ZERO {
        return Err(ScalingError::FractionalBaseUnit {
            value: base.to_string(),
        });
    }

    base.to_u128().ok_or_else(|| ScalingError::Overflow {
        context: format!("base units {} do not fit in u128", base),
    })
}

/// Convert raw base units back into a native-unit `Decimal`.
///
/// Fails only when the raw value exceeds `Decimal`'s 96-bit mantissa.
pub fn from_base_units(base: u128) -> Result<Decimal, ScalingError> {
    let overflow = || ScalingError::Overflow {
        context: format!("base units {} exceed decimal range", base),
    };

    let raw = i128::try_from(base).map_err(|_| overflow())?;
    Decimal::try_from_i128_with_scale(raw, NATIVE_DECIMALS)
        .map(|d| d.normalize())
        .map_err(|_| overflow())
}
