//! Money is stored as integer minor currency units (haléře / cents).
//! Decimal amounts only exist at the API and seed boundaries.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// `round(amount * 100)`, half away from zero; `None` when it does not fit in `i64`.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

pub fn from_minor_units(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}
