//! Pure state model for Kani verification

use arrayvec::ArrayVec;

/// Small fixed actor bound for Kani
pub const MAX_ACTORS: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feed {
    pub answer: u128, // Feed-native fixed point, abstract units
    pub live: bool,   // False models an unreachable oracle
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub minimum_usd: u128,
    pub feed_scale: u128, // 10^decimals analog, nonzero
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub pooled: u128,
    pub funded: ArrayVec<u128, MAX_ACTORS>,  // Cumulative record per actor
    pub wallets: ArrayVec<u128, MAX_ACTORS>, // External balance per actor
    pub funders: ArrayVec<u8, MAX_ACTORS>,   // First-contribution order, distinct
    pub owner: u8,
    pub feed: Feed,
    pub params: Params,
    pub transfers_frozen: bool, // True models a refusing transfer backend
}

impl Default for Feed {
    fn default() -> Self {
        Self {
            answer: 2,
            live: true,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            minimum_usd: 10,
            feed_scale: 1,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self {
            pooled: 0,
            funded: ArrayVec::new(),
            wallets: ArrayVec::new(),
            funders: ArrayVec::new(),
            owner: 0,
            feed: Feed::default(),
            params: Params::default(),
            transfers_frozen: false,
        }
    }
}
