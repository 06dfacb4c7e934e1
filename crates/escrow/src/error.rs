//! Escrow error taxonomy
//!
//! Every failure is a distinct variant so callers and tests can assert on
//! the exact condition. Collaborator failures ride along as sources.

use crate::address::Address;
use crate::bank::TransferError;
use crate::feed::FeedError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EscrowError {
    /// Contribution converts below the USD minimum
    #[error("contribution of {amount} wei is worth {usd} usd, below the minimum of {minimum} usd")]
    InsufficientContribution {
        amount: u128,
        usd: u128,
        minimum: u128,
    },

    /// Caller is not the escrow owner
    #[error("caller {caller} is not the owner {owner}")]
    Unauthorized { caller: Address, owner: Address },

    /// Price feed could not produce a usable quote
    #[error("price feed unavailable")]
    OracleUnavailable(#[source] FeedError),

    /// The withdrawal transfer was refused; the ledger reset was rolled back
    #[error("withdrawal transfer failed")]
    WithdrawTransferFailed(#[source] TransferError),

    /// A contribution-side value transfer was refused
    #[error("contribution transfer failed")]
    TransferFailed(#[source] TransferError),

    /// Funder lookup past the end of the sequence
    #[error("funder index {index} out of range, {count} funders registered")]
    IndexOutOfRange { index: usize, count: usize },

    /// Conversion or accumulation exceeded u128
    #[error("arithmetic overflow handling {amount} wei")]
    Overflow { amount: u128 },
}
