use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to two decimal places.
///
/// Every intermediate amount in the fee pipeline is settled to cents with
/// half-away-from-zero rounding before it is stored or fed into the next
/// step, so repeated arithmetic cannot accumulate sub-cent drift.
///
/// # Arguments
/// - `amount` - The amount to round
///
/// # Returns
/// - `Decimal` - The amount rounded to two decimal places
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
