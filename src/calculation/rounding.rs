//! Fixed-point rounding policy.
//!
//! Every monetary add, multiply, and divide in the engine and the
//! garnishment distributor goes through these helpers so rounding stays
//! uniform: stored amounts at scale 2 with half-up rounding, intermediate
//! ratios at a wider scale so multi-step formulas do not compound rounding
//! error.

use rust_decimal::{Decimal, RoundingStrategy};

/// Scale of stored monetary amounts.
pub const MONEY_SCALE: u32 = 2;

/// Scale of intermediate ratios (hourly and daily rates, premium rates).
pub const RATIO_SCALE: u32 = 6;

/// Rounds a monetary amount to [`MONEY_SCALE`], half-up.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an intermediate ratio to [`RATIO_SCALE`], half-up.
pub fn round_ratio(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATIO_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns `percent`% of `base`, rounded to monetary scale.
pub fn percent_of(base: Decimal, percent: Decimal) -> Decimal {
    round_money(base * percent / Decimal::ONE_HUNDRED)
}

/// Returns the per-day rate of a monthly amount at ratio scale.
///
/// A zero day count yields zero; months without working days produce no pay.
pub fn daily_rate(amount: Decimal, days: u32) -> Decimal {
    if days == 0 {
        return Decimal::ZERO;
    }
    round_ratio(amount / Decimal::from(days))
}

/// Returns the per-hour rate of a monthly amount at ratio scale.
///
/// A zero hour count yields zero, mirroring [`daily_rate`].
pub fn hourly_rate(amount: Decimal, hours: Decimal) -> Decimal {
    if hours.is_zero() {
        return Decimal::ZERO;
    }
    round_ratio(amount / hours)
}
