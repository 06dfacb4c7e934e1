//! Price feed implementations
//!
//! Concrete `PriceFeed` variants for local wiring and tests: an updatable
//! Chainlink-style aggregator and an always-offline double.

pub mod mock;
pub mod offline;

pub use mock::MockAggregator;
pub use offline::OfflineFeed;
