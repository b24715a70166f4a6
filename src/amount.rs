use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::UltraError;

/// Base-unit exponent of the native asset (lamports per SOL).
pub const NATIVE_DECIMALS: u32 = 9;

/// Largest fractional-digit count `Decimal` can carry.
const MAX_DECIMALS: u32 = 28;

/// Converts a human-decimal amount into raw token units, truncating toward
/// zero. Truncation (never round-to-nearest) guarantees the raw amount can
/// not exceed what the decimal amount represents.
pub fn to_raw_units(amount: Decimal, decimals: u32) -> Result<u64, UltraError> {
    if amount < Decimal::ZERO {
        return Err(UltraError::InvalidArgument(format!(
            "amount must be non-negative, got {amount}"
        )));
    }
    if decimals > MAX_DECIMALS {
        return Err(UltraError::InvalidArgument(format!(
            "decimals must be <= {MAX_DECIMALS}, got {decimals}"
        )));
    }
    let unit = Decimal::from_i128_with_scale(10_i128.pow(decimals), 0);
    let raw = amount.checked_mul(unit).ok_or_else(|| {
        UltraError::InvalidArgument(format!("amount {amount} overflows at {decimals} decimals"))
    })?;
    raw.trunc().to_u64().ok_or_else(|| {
        UltraError::InvalidArgument(format!("amount {amount} exceeds u64 raw-unit range"))
    })
}

/// Converts a raw token amount into its human-decimal form, rounded down to
/// `decimals` fractional digits. Exact: the result is `amount / 10^decimals`
/// with no binary floating point involved. Narrow to `f64` for display only,
/// never for amounts feeding back into a request.
pub fn from_raw_units(amount: u64, decimals: u32) -> Result<Decimal, UltraError> {
    if decimals > MAX_DECIMALS {
        return Err(UltraError::InvalidArgument(format!(
            "decimals must be <= {MAX_DECIMALS}, got {decimals}"
        )));
    }
    Ok(Decimal::from_i128_with_scale(i128::from(amount), decimals))
}

/// Parses a wire-format raw amount (decimal-digit string) and converts it.
pub fn from_raw_units_str(amount: &str, decimals: u32) -> Result<Decimal, UltraError> {
    let raw: u64 = amount.parse().map_err(|_| {
        UltraError::InvalidArgument(format!("raw amount must be a non-negative integer string, got {amount:?}"))
    })?;
    from_raw_units(raw, decimals)
}
