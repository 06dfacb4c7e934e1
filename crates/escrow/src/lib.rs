//! Funds escrow with an oracle-priced contribution floor
//!
//! Contributions above a minimum USD-equivalent are pooled per contributor;
//! the single owner sweeps the full pool, resetting every record. Prices
//! and value transfers arrive through injected capabilities so production
//! wiring and test doubles are interchangeable.

pub mod address;
pub mod bank;
pub mod convert;
pub mod error;
pub mod escrow;
pub mod feed;
pub mod ledger;

// Re-export commonly used types
pub use address::Address;
pub use bank::{Bank, TransferError, Treasury};
pub use convert::{conversion_rate, usd_value, MINIMUM_USD, USD_SCALE};
pub use error::EscrowError;
pub use escrow::Escrow;
pub use feed::{FeedError, PriceFeed, PriceQuote};
pub use ledger::Ledger;
