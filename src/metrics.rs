use rust_decimal::{Decimal, RoundingStrategy};

use crate::amount::{from_raw_units, NATIVE_DECIMALS};
use crate::error::UltraError;

/// Display threshold below which price impact is treated as negligible.
const MIN_VISIBLE_IMPACT: Decimal = Decimal::from_parts(1, 0, 0, false, 2); // 0.01

/// Renders a quote's price-impact fraction for display. The wire value is a
/// fraction as a decimal string (`"0.015"` is 1.5%). Returns `None` when the
/// impact rounds below 0.01% — suppressed rather than shown as `0.00%`.
pub fn price_impact_display(price_impact_pct: &str) -> Result<Option<String>, UltraError> {
    let fraction: Decimal = price_impact_pct.parse().map_err(|_| {
        UltraError::MalformedResponse(format!("price impact must be a decimal string, got {price_impact_pct:?}"))
    })?;
    // Threshold applies to the unrounded magnitude so borderline dust
    // (0.005% midpoints) stays suppressed instead of rounding up into view.
    let percent = (fraction * Decimal::ONE_HUNDRED).abs();
    if percent < MIN_VISIBLE_IMPACT {
        return Ok(None);
    }
    // Midpoints round away from zero, not to even.
    let rounded = percent.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Ok(Some(format!("-{rounded:.2}%")))
}

/// Effective exchange rate between the two sides of a quote: output per
/// input, or the reciprocal when `reversed`. Direction toggling is purely
/// presentational; the underlying quote data is never recomputed.
pub fn effective_rate(
    in_amount: u64,
    in_decimals: u32,
    out_amount: u64,
    out_decimals: u32,
    reversed: bool,
) -> Result<Decimal, UltraError> {
    let input = from_raw_units(in_amount, in_decimals)?;
    let output = from_raw_units(out_amount, out_decimals)?;
    let (numerator, denominator) = if reversed {
        (input, output)
    } else {
        (output, input)
    };
    numerator
        .checked_div(denominator)
        .ok_or_else(|| UltraError::InvalidArgument("rate denominator is zero".to_string()))
}

/// Converts a fee in basis points to an exact percentage. Quotes carry
/// `feeBps` in `[0, 10000]`; anything outside that range is untrusted
/// upstream data and is rejected rather than clamped.
pub fn fee_percent(fee_bps: i64) -> Result<Decimal, UltraError> {
    if !(0..=10_000).contains(&fee_bps) {
        return Err(UltraError::MalformedResponse(format!(
            "feeBps out of range [0, 10000]: {fee_bps}"
        )));
    }
    Ok(Decimal::new(fee_bps, 2))
}

/// Prioritization fee in native-asset decimal units. An absent fee displays
/// as zero.
pub fn prioritization_fee(fee_lamports: Option<u64>) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(fee_lamports.unwrap_or(0)), NATIVE_DECIMALS)
}
