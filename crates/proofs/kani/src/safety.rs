//! Kani safety proofs for the escrow invariants

use kani::{any, assume};
use model_safety::{convert::*, helpers::*, transitions::*};
use crate::{adversary::*, generators::*, sanitizer::*};

/// Contributions valuing below the minimum leave the state untouched
#[kani::proof]
fn below_min_fund_is_noop() {
    let s = any_state_bounded().sanitize();
    let caller: u8 = any();
    let amount: u128 = (any::<u8>() as u128) % 100;

    assume(!meets_minimum(&s, amount));

    let before = s.clone();
    let after = fund(s, caller, amount);

    kani::assert(state_unchanged(&before, &after), "Below-minimum fund must not change state");
}

/// An accepted contribution moves exactly the amount from wallet to pool and record
#[kani::proof]
fn fund_above_min_credits_exactly() {
    let s = any_state_bounded().sanitize();
    let caller: u8 = any::<u8>() % (s.wallets.len() as u8);
    let amount: u128 = (any::<u8>() as u128) % 100;

    let uid = caller as usize;
    assume(s.feed.live);
    assume(meets_minimum(&s, amount));
    assume(s.wallets[uid] >= amount);

    let before = s.clone();
    let after = fund(s, caller, amount);

    kani::assert(after.wallets[uid] == before.wallets[uid] - amount, "Fund must debit exactly the amount");
    kani::assert(after.pooled == before.pooled + amount, "Fund must credit the pool exactly");
    kani::assert(after.funded[uid] == before.funded[uid] + amount, "Fund must credit the record exactly");
    kani::assert(after.funders.contains(&caller), "Accepted funder must be registered");
    kani::assert(money_conserved(&before, &after), "Fund must conserve total value");
}

/// Non-owner withdrawals leave the state untouched
#[kani::proof]
fn unauthorized_withdraw_is_noop() {
    let s = any_state_bounded().sanitize();
    let caller: u8 = any();
    assume(caller != s.owner);

    let before = s.clone();

    let after = withdraw(s.clone(), caller);
    kani::assert(state_unchanged(&before, &after), "Unauthorized withdraw must not change state");

    let after = cheaper_withdraw(s, caller);
    kani::assert(state_unchanged(&before, &after), "Unauthorized cheaper withdraw must not change state");
}

/// Owner withdrawal clears the ledger and sweeps the pool into the owner wallet
#[kani::proof]
fn withdraw_clears_ledger() {
    let mut s = any_state_bounded().sanitize();
    assume(!s.transfers_frozen);

    // Align the pool with the recorded contributions
    s.pooled = sum_funded(&s);

    let before = s.clone();
    let after = withdraw(s, before.owner);

    kani::assert(ledger_cleared(&after), "Withdraw must zero every record and clear the sequence");
    kani::assert(after.pooled == 0, "Withdraw must empty the pool");
    kani::assert(
        after.wallets[before.owner as usize] == before.wallets[before.owner as usize] + before.pooled,
        "Withdraw must credit the owner wallet with the whole pool",
    );
    kani::assert(money_conserved(&before, &after), "Withdraw must conserve total value");
}

/// Both withdrawal strategies produce identical states from any start
#[kani::proof]
fn withdraw_equivalence() {
    let s = any_state_bounded().sanitize();
    let caller: u8 = any();

    let plain = withdraw(s.clone(), caller);
    let buffered = cheaper_withdraw(s, caller);

    kani::assert(plain == buffered, "Withdrawal strategies must agree on the resulting state");
}

/// A refusing transfer backend makes withdrawal a complete no-op
#[kani::proof]
fn frozen_transfer_rollback() {
    let mut s = any_state_bounded().sanitize();
    s.transfers_frozen = true;

    let before = s.clone();

    let after = withdraw(s.clone(), before.owner);
    kani::assert(state_unchanged(&before, &after), "Refused transfer must leave state untouched");

    let after = cheaper_withdraw(s, before.owner);
    kani::assert(state_unchanged(&before, &after), "Refused transfer must leave state untouched");
}

/// Total value is conserved across short adversarial sequences
#[kani::proof]
#[kani::unwind(8)]  // Allow up to 8 loop iterations
fn conservation_across_adversary_sequences() {
    let mut s = any_state_bounded().sanitize();

    let initial = total_value(&s);

    let mut steps: u8 = any();
    steps = (steps % MAX_STEPS) + 1;

    for _ in 0..steps {
        s = adversary_step(s);
        kani::assert(total_value(&s) == initial, "Adversarial steps must conserve total value");
    }
}

/// The funder sequence stays distinct and in range across adversarial sequences
#[kani::proof]
#[kani::unwind(8)]
fn funder_sequence_stays_distinct() {
    let mut s = any_state_bounded().sanitize();

    assume(funders_distinct(&s));

    let mut steps: u8 = any();
    steps = (steps % MAX_STEPS) + 1;

    for _ in 0..steps {
        s = adversary_step(s);
        kani::assert(funders_distinct(&s), "Funder sequence must stay distinct and in range");
    }
}
