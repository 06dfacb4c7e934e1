//! State space sanitizer - bounds values for Kani exploration

use model_safety::state::*;

pub const N_ACTORS: usize = 3;
pub const MAX_STEPS: u8 = 4;

/// Bounds for tractable verification
const MAX_WALLET: u128 = 1_000u128;
const MAX_FUNDED: u128 = 1_000u128;
const MAX_POOLED: u128 = 10_000u128;
const MAX_ANSWER: u128 = 16u128;
const MAX_MINIMUM: u128 = 32u128;

pub trait Sanitize {
    fn sanitize(self) -> Self;
}

impl Sanitize for State {
    fn sanitize(mut self) -> State {
        // Clamp actor count, keeping records and wallets aligned
        while self.funded.len() > N_ACTORS {
            self.funded.pop();
        }
        while self.wallets.len() > N_ACTORS {
            self.wallets.pop();
        }

        // Clamp balances to keep the solver fast
        for f in self.funded.iter_mut() {
            *f = if *f > MAX_FUNDED { *f % MAX_FUNDED } else { *f };
        }
        for w in self.wallets.iter_mut() {
            *w = if *w > MAX_WALLET { *w % MAX_WALLET } else { *w };
        }
        self.pooled = if self.pooled > MAX_POOLED {
            self.pooled % MAX_POOLED
        } else {
            self.pooled
        };

        // Ensure non-zero feed parameters to avoid degenerate valuation
        self.feed.answer = if self.feed.answer == 0 {
            1
        } else if self.feed.answer > MAX_ANSWER {
            (self.feed.answer % MAX_ANSWER) + 1
        } else {
            self.feed.answer
        };
        self.params.feed_scale = if self.params.feed_scale == 0 {
            1
        } else {
            self.params.feed_scale
        };
        self.params.minimum_usd = if self.params.minimum_usd == 0 {
            1
        } else if self.params.minimum_usd > MAX_MINIMUM {
            (self.params.minimum_usd % MAX_MINIMUM) + 1
        } else {
            self.params.minimum_usd
        };

        // Drop out-of-range or duplicate funder ids
        let funders = self.funders.clone();
        self.funders.clear();
        for f in funders.iter() {
            if (*f as usize) < self.funded.len() && !self.funders.contains(f) {
                let _ = self.funders.try_push(*f);
            }
        }

        // Owner must index a wallet
        if self.wallets.is_empty() {
            self.owner = 0;
        } else {
            self.owner %= self.wallets.len() as u8;
        }

        self
    }
}
