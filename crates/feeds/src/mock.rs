//! Updatable mock aggregator
//!
//! Stores one signed answer at a fixed decimal precision, Chainlink style.
//! Tests move the price mid-scenario through `update_answer`.

use fundme_escrow::{Address, FeedError, PriceFeed, PriceQuote};

#[derive(Debug, Clone)]
pub struct MockAggregator {
    address: Address,
    decimals: u8,
    answer: i128,
    round: u64,
}

impl MockAggregator {
    pub fn new(decimals: u8, initial_answer: i128) -> Self {
        Self {
            address: Address::new_unique(),
            decimals,
            answer: initial_answer,
            round: 1,
        }
    }

    /// Replace the stored answer and advance the round
    pub fn update_answer(&mut self, answer: i128) {
        self.answer = answer;
        self.round = self.round.saturating_add(1);
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn answer(&self) -> i128 {
        self.answer
    }

    pub fn round(&self) -> u64 {
        self.round
    }
}

impl PriceFeed for MockAggregator {
    fn address(&self) -> Address {
        self.address
    }

    /// The stored answer as a quote; non-positive answers are refused
    fn latest_price(&self) -> Result<PriceQuote, FeedError> {
        if self.answer <= 0 {
            return Err(FeedError::InvalidAnswer {
                answer: self.answer,
            });
        }
        Ok(PriceQuote {
            answer: self.answer as u128,
            decimals: self.decimals,
        })
    }
}
