// crates/lumen-core/src/rate.rs
//
// Fixed-point release-rate arithmetic.
//
// The release rate is an annualized fraction in [0, 1] held as a
// `rust_decimal::Decimal` with at most 18 fractional digits. All per-block
// amounts are computed with exact integer arithmetic over the decimal's
// mantissa — never binary floating point — so every replica derives the
// identical result from identical inputs.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::LumenError;
use crate::time::SECONDS_PER_YEAR;
use crate::Amount;

/// Maximum number of fractional digits a release rate may carry.
/// Halving truncates to this scale; a rate that truncates to zero stays zero.
pub const RATE_DECIMAL_PLACES: u32 = 18;

/// Compute the amount released over `elapsed_secs` from a pool of `balance`
/// base units at an annualized `rate`.
///
/// `floor(rate * balance * elapsed_secs / SECONDS_PER_YEAR)`, evaluated as
/// an exact integer quotient: the rate's decimal mantissa is the numerator
/// and `10^scale * SECONDS_PER_YEAR` the denominator. Truncation (never
/// rounding up) guarantees the pool is not over-drawn by rounding.
pub fn release_amount(
    rate: Decimal,
    balance: Amount,
    elapsed_secs: u64,
) -> Result<Amount, LumenError> {
    if rate.is_sign_negative() {
        return Err(LumenError::Consistency(format!(
            "release rate {} is negative",
            rate
        )));
    }
    if rate.is_zero() || balance == 0 || elapsed_secs == 0 {
        return Ok(0);
    }

    let mantissa = rate.mantissa().unsigned_abs();
    let numer = BigUint::from(mantissa) * BigUint::from(balance) * BigUint::from(elapsed_secs);
    let denom = BigUint::from(10u8).pow(rate.scale()) * BigUint::from(SECONDS_PER_YEAR);

    // BigUint division truncates toward zero.
    let amount = numer / denom;
    amount.to_u64().ok_or_else(|| {
        LumenError::Consistency(format!(
            "release amount overflows u64 (rate {}, balance {}, elapsed {}s)",
            rate, balance, elapsed_secs
        ))
    })
}

/// Halve a release rate, truncating to `RATE_DECIMAL_PLACES` fractional
/// digits. Once the rate truncates to zero it stays zero forever.
pub fn halve_rate(rate: Decimal) -> Decimal {
    (rate / Decimal::TWO).trunc_with_scale(RATE_DECIMAL_PLACES)
}
