//! Always-offline feed for outage paths

use fundme_escrow::{Address, FeedError, PriceFeed, PriceQuote};

#[derive(Debug, Clone)]
pub struct OfflineFeed {
    address: Address,
}

impl OfflineFeed {
    pub fn new() -> Self {
        Self {
            address: Address::new_unique(),
        }
    }
}

impl Default for OfflineFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceFeed for OfflineFeed {
    fn address(&self) -> Address {
        self.address
    }

    fn latest_price(&self) -> Result<PriceQuote, FeedError> {
        Err(FeedError::Offline)
    }
}
