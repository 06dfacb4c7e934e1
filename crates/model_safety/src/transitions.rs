//! State transition functions - all total, no panics

use crate::convert::meets_minimum;
use crate::math::*;
use crate::state::*;

/// Fund the escrow (credits the caller's record and the pool)
pub fn fund(mut s: State, caller: u8, amount: u128) -> State {
    let uid = caller as usize;
    if uid >= s.funded.len() || uid >= s.wallets.len() {
        return s;
    }

    // Oracle must be reachable to value the contribution
    if !s.feed.live {
        return s;
    }

    // Below-minimum contributions are rejected
    if !meets_minimum(&s, amount) {
        return s;
    }

    // Caller must hold the amount
    if s.wallets[uid] < amount {
        return s;
    }

    s.wallets[uid] = sub_u128(s.wallets[uid], amount);
    s.pooled = add_u128(s.pooled, amount);
    s.funded[uid] = add_u128(s.funded[uid], amount);

    // Register each funder once, in first-contribution order
    if !s.funders.contains(&caller) {
        let _ = s.funders.try_push(caller);
    }

    s
}

/// Owner withdrawal: zero each recorded funder, clear the sequence, sweep the pool
pub fn withdraw(mut s: State, caller: u8) -> State {
    // Only the owner can sweep
    if caller != s.owner {
        return s;
    }

    // A refusing transfer backend leaves the state untouched
    if s.transfers_frozen {
        return s;
    }

    let owner_uid = s.owner as usize;
    if owner_uid >= s.wallets.len() {
        return s;
    }

    let amount = s.pooled;

    // Reset the ledger before the transfer
    let mut index = 0;
    while index < s.funders.len() {
        let uid = s.funders[index] as usize;
        if uid < s.funded.len() {
            s.funded[uid] = 0;
        }
        index += 1;
    }
    s.funders.clear();
    s.pooled = 0;

    s.wallets[owner_uid] = add_u128(s.wallets[owner_uid], amount);

    s
}

/// Owner withdrawal over a buffered copy of the funder sequence
pub fn cheaper_withdraw(mut s: State, caller: u8) -> State {
    // Only the owner can sweep
    if caller != s.owner {
        return s;
    }

    if s.transfers_frozen {
        return s;
    }

    let owner_uid = s.owner as usize;
    if owner_uid >= s.wallets.len() {
        return s;
    }

    let amount = s.pooled;

    let funders = s.funders.clone();
    s.funders.clear();
    for f in funders.iter() {
        let uid = *f as usize;
        if uid < s.funded.len() {
            s.funded[uid] = 0;
        }
    }
    s.pooled = 0;

    s.wallets[owner_uid] = add_u128(s.wallets[owner_uid], amount);

    s
}

/// Oracle answer moves
pub fn update_answer(mut s: State, answer: u128) -> State {
    s.feed.answer = answer;
    s
}

/// Oracle outage: the feed stops answering
pub fn feed_outage(mut s: State) -> State {
    s.feed.live = false;
    s
}

/// Transfer backend starts refusing outbound transfers
pub fn freeze_transfers(mut s: State) -> State {
    s.transfers_frozen = true;
    s
}

/// Read-only traffic (cannot move funds)
pub fn reader_noise(s: State) -> State {
    s
}
