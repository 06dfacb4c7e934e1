//! Native-value transfer backend
//!
//! The transfer primitive is a capability injected into the escrow, kept
//! separate from bookkeeping so ordering and failure handling can be tested
//! without simulating any particular execution environment.

use crate::address::Address;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// Sender balance below the requested amount
    #[error("account holds {available} wei, {requested} wei requested")]
    InsufficientFunds { available: u128, requested: u128 },

    /// Recipient balance would exceed u128
    #[error("transfer of {amount} wei would overflow the recipient")]
    Overflow { amount: u128 },
}

pub trait Treasury {
    /// Move `amount` from `from` to `to`; all or nothing
    fn transfer(&mut self, from: Address, to: Address, amount: u128) -> Result<(), TransferError>;
}

/// Reference treasury: account balances keyed by address
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bank {
    accounts: HashMap<Address, u128>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, address: Address) -> u128 {
        self.accounts.get(&address).copied().unwrap_or(0)
    }

    /// External inflow, e.g. seeding a wallet before a scenario
    pub fn credit(&mut self, address: Address, amount: u128) {
        let balance = self.accounts.entry(address).or_insert(0);
        *balance = balance.saturating_add(amount);
    }
}

impl Treasury for Bank {
    fn transfer(&mut self, from: Address, to: Address, amount: u128) -> Result<(), TransferError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(TransferError::InsufficientFunds {
                available,
                requested: amount,
            });
        }
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TransferError::Overflow { amount })?;

        self.accounts.insert(from, available - amount);
        self.accounts.insert(to, credited);
        Ok(())
    }
}
