//! Oracle valuation over abstract feed units

use crate::math::{div_u128, mul_u128};
use crate::state::State;

/// USD value of an amount at the current feed answer
pub fn usd_value(s: &State, amount: u128) -> u128 {
    div_u128(mul_u128(amount, s.feed.answer), s.params.feed_scale)
}

/// True when the amount values at or above the configured minimum
pub fn meets_minimum(s: &State, amount: u128) -> bool {
    usd_value(s, amount) >= s.params.minimum_usd
}
