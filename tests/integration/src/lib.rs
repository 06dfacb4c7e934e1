//! FundMe Integration Tests
//!
//! This package contains end-to-end tests for the fundme escrow engine.
//!
//! Tests drive the public Escrow API against the in-memory bank and the
//! mock aggregator, covering the full funding round: oracle valuation,
//! the contribution ledger, and both withdrawal strategies.

pub use fundme_escrow;
pub use fundme_feeds;
