//! Generators for arbitrary state (for Kani)

#[cfg(kani)]
use kani::any;
#[cfg(kani)]
use arrayvec::ArrayVec;
#[cfg(kani)]
use model_safety::state::*;

// Ultra-small bounds for very fast verification
#[cfg(kani)]
const MAX_VAL: u128 = 100;

#[cfg(kani)]
pub fn any_feed() -> Feed {
    let answer_raw: u8 = any();
    Feed {
        answer: ((answer_raw as u128) % 8).max(1),
        live: any(),
    }
}

#[cfg(kani)]
pub fn any_state_bounded() -> State {
    let mut funded: ArrayVec<u128, MAX_ACTORS> = ArrayVec::new();
    let mut wallets: ArrayVec<u128, MAX_ACTORS> = ArrayVec::new();

    // Two actors (owner plus one patron) keep the state space minimal
    let f0: u8 = any();
    let f1: u8 = any();
    let w0: u8 = any();
    let w1: u8 = any();
    let _ = funded.try_push((f0 as u128) % MAX_VAL);
    let _ = funded.try_push((f1 as u128) % MAX_VAL);
    let _ = wallets.try_push((w0 as u128) % MAX_VAL);
    let _ = wallets.try_push((w1 as u128) % MAX_VAL);

    // Register exactly the actors holding a positive record
    let mut funders: ArrayVec<u8, MAX_ACTORS> = ArrayVec::new();
    for (uid, f) in funded.iter().enumerate() {
        if *f > 0 {
            let _ = funders.try_push(uid as u8);
        }
    }

    let pooled_raw: u8 = any();
    let minimum_raw: u8 = any();

    State {
        pooled: (pooled_raw as u128) % (MAX_VAL * 3),
        funded,
        wallets,
        funders,
        owner: any::<u8>() % 2,
        feed: any_feed(),
        params: Params {
            minimum_usd: ((minimum_raw as u128) % 16).max(1),
            feed_scale: 1,
        },
        transfers_frozen: any(),
    }
}
