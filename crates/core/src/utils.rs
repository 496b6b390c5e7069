use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::PERCENT_DECIMAL_PRECISION;

/// Percentage of `part` over `whole`, rounded to 2 decimal places using
/// round-half-away-from-zero. Returns zero when `whole` is not positive.
///
/// Forecast/actual/remaining figures stay at full precision; only the
/// percentage is rounded, at the point of output.
pub fn percent_used(part: Decimal, whole: Decimal) -> Decimal {
    if whole > Decimal::ZERO {
        (part / whole * Decimal::ONE_HUNDRED).round_dp_with_strategy(
            PERCENT_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        )
    } else {
        Decimal::ZERO
    }
}
