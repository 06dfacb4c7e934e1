//! Contribution ledger
//!
//! Cumulative amount per contributor plus the funder sequence in
//! first-contribution order. Owned and mutated only by the escrow core.

use crate::address::Address;
use crate::error::EscrowError;
use std::collections::HashMap;
use std::mem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    amounts: HashMap<Address, u128>,
    funders: Vec<Address>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cumulative amount contributed by `funder` since the last reset
    pub fn amount_funded(&self, funder: Address) -> u128 {
        self.amounts.get(&funder).copied().unwrap_or(0)
    }

    /// Funder identity at `index` in first-contribution order
    pub fn funder(&self, index: usize) -> Option<Address> {
        self.funders.get(index).copied()
    }

    pub fn funder_count(&self) -> usize {
        self.funders.len()
    }

    pub fn funders(&self) -> &[Address] {
        &self.funders
    }

    /// Add `amount` to the funder's cumulative record, registering the
    /// funder on first contribution
    ///
    /// All checks run before any mutation; a failed credit leaves the
    /// ledger untouched. Returns the new cumulative total.
    pub fn credit(&mut self, funder: Address, amount: u128) -> Result<u128, EscrowError> {
        let total = self
            .amount_funded(funder)
            .checked_add(amount)
            .ok_or(EscrowError::Overflow { amount })?;

        self.amounts.insert(funder, total);
        if !self.funders.contains(&funder) {
            self.funders.push(funder);
        }
        Ok(total)
    }

    /// Zero every registered record, then empty the sequence
    ///
    /// Walks the stored sequence by index, re-reading it on every step.
    /// Zeroed records stay in the map; reads cannot tell absent from zero.
    pub fn reset(&mut self) {
        let mut index = 0;
        while index < self.funders.len() {
            let funder = self.funders[index];
            self.amounts.insert(funder, 0);
            index += 1;
        }
        self.funders.clear();
    }

    /// Same observable result as `reset`, iterating a local copy of the
    /// sequence instead of re-reading stored state
    pub fn reset_buffered(&mut self) {
        let funders = mem::take(&mut self.funders);
        for funder in funders.iter() {
            self.amounts.insert(*funder, 0);
        }
    }
}
