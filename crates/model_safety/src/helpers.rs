//! Invariant checking helpers

use crate::math::*;
use crate::state::*;

/// Sum of all recorded contributions
pub fn sum_funded(s: &State) -> u128 {
    s.funded.iter().fold(0u128, |acc, f| add_u128(acc, *f))
}

/// Pool balance equals the sum of recorded contributions
pub fn pooled_matches_ledger(s: &State) -> bool {
    s.pooled == sum_funded(s)
}

/// Ledger fully cleared: no funders, every record zero
pub fn ledger_cleared(s: &State) -> bool {
    s.funders.is_empty() && s.funded.iter().all(|f| *f == 0)
}

/// Total value held across wallets and the pool
pub fn total_value(s: &State) -> u128 {
    let wallets = s.wallets.iter().fold(0u128, |acc, w| add_u128(acc, *w));
    add_u128(wallets, s.pooled)
}

/// No value created or destroyed between two states
pub fn money_conserved(before: &State, after: &State) -> bool {
    total_value(before) == total_value(after)
}

/// Funder sequence holds distinct, in-range ids
pub fn funders_distinct(s: &State) -> bool {
    for (i, a) in s.funders.iter().enumerate() {
        if *a as usize >= s.funded.len() {
            return false;
        }
        for b in s.funders.iter().skip(i + 1) {
            if a == b {
                return false;
            }
        }
    }
    true
}

/// Positive records and the funder sequence agree (needs a nonzero minimum)
pub fn registered_iff_funded(s: &State) -> bool {
    for (uid, f) in s.funded.iter().enumerate() {
        let registered = s.funders.iter().any(|x| *x as usize == uid);
        if (*f > 0) != registered {
            return false;
        }
    }
    true
}

/// Two states identical in every observable
pub fn state_unchanged(before: &State, after: &State) -> bool {
    before == after
}
