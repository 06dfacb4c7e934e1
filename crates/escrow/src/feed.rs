//! Price feed capability
//!
//! The escrow consumes prices through this trait so production feeds and
//! test doubles are interchangeable. One `latest_price` call returns the
//! answer together with its decimals; a quote is self-consistent even if
//! the feed is updated between calls.

use crate::address::Address;
use thiserror::Error;

/// One observation from a price feed, in feed-native fixed point
///
/// A Chainlink-style ETH/USD feed quoting $2000 at 8 decimals reports
/// `answer = 200_000_000_000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub answer: u128,
    pub decimals: u8,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// Feed unreachable
    #[error("price feed is offline")]
    Offline,

    /// Feed reachable but reporting a non-positive answer
    #[error("price feed reported invalid answer {answer}")]
    InvalidAnswer { answer: i128 },
}

pub trait PriceFeed {
    /// Identity of the configured feed instance
    fn address(&self) -> Address;

    /// Current price; must fail rather than return a garbage quote
    fn latest_price(&self) -> Result<PriceQuote, FeedError>;
}
