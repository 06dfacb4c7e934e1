//! Escrow core
//!
//! One `Escrow` instance owns the ledger, the pooled balance, the injected
//! price feed and the injected treasury. Every mutating operation takes the
//! caller identity explicitly; exclusivity comes from `&mut self`, so each
//! call is a single atomic unit of work.
//!
//! Funding cycle: empty → funded (one or more accepted contributions) →
//! empty (owner withdrawal). Withdrawal resets the ledger before moving
//! value out, and restores the pre-call state if the transfer is refused.

use crate::address::Address;
use crate::bank::Treasury;
use crate::convert::{self, MINIMUM_USD};
use crate::error::EscrowError;
use crate::feed::PriceFeed;
use crate::ledger::Ledger;

#[derive(Debug, Clone)]
pub struct Escrow<F, T> {
    address: Address,
    owner: Address,
    minimum_usd: u128,
    pooled: u128,
    ledger: Ledger,
    feed: F,
    treasury: T,
}

impl<F: PriceFeed, T: Treasury> Escrow<F, T> {
    /// New escrow owned by `owner`, with the default 50 USD floor
    pub fn new(owner: Address, feed: F, treasury: T) -> Self {
        Self::with_minimum(owner, MINIMUM_USD, feed, treasury)
    }

    /// New escrow with an explicit USD floor at `USD_SCALE` precision
    pub fn with_minimum(owner: Address, minimum_usd: u128, feed: F, treasury: T) -> Self {
        Self {
            address: Address::new_unique(),
            owner,
            minimum_usd,
            pooled: 0,
            ledger: Ledger::new(),
            feed,
            treasury,
        }
    }

    /// Record a contribution whose value transfer already settled
    ///
    /// Everything fallible (oracle read, threshold check, checked sums)
    /// runs before the first write, so a rejected call leaves no trace.
    pub fn fund(&mut self, caller: Address, amount: u128) -> Result<(), EscrowError> {
        let usd = convert::conversion_rate(&self.feed, amount)?;
        if usd < self.minimum_usd {
            return Err(EscrowError::InsufficientContribution {
                amount,
                usd,
                minimum: self.minimum_usd,
            });
        }
        let pooled = self
            .pooled
            .checked_add(amount)
            .ok_or(EscrowError::Overflow { amount })?;

        self.ledger.credit(caller, amount)?;
        self.pooled = pooled;
        Ok(())
    }

    /// Move `amount` from the caller into the escrow account, then record it
    ///
    /// A contribution the policy rejects is refunded before the rejection
    /// surfaces, so value and bookkeeping never disagree.
    pub fn contribute(&mut self, caller: Address, amount: u128) -> Result<(), EscrowError> {
        self.treasury
            .transfer(caller, self.address, amount)
            .map_err(EscrowError::TransferFailed)?;

        if let Err(rejection) = self.fund(caller, amount) {
            self.treasury
                .transfer(self.address, caller, amount)
                .map_err(EscrowError::TransferFailed)?;
            return Err(rejection);
        }
        Ok(())
    }

    /// Owner-only sweep of the full pooled balance
    ///
    /// Zeroes every record and empties the funder sequence by walking the
    /// stored sequence in place, then transfers the balance to the owner.
    pub fn withdraw(&mut self, caller: Address) -> Result<(), EscrowError> {
        self.sweep(caller, Ledger::reset)
    }

    /// Identical contract to `withdraw`; iterates a local copy of the
    /// funder sequence instead of re-reading stored state
    pub fn cheaper_withdraw(&mut self, caller: Address) -> Result<(), EscrowError> {
        self.sweep(caller, Ledger::reset_buffered)
    }

    fn sweep(&mut self, caller: Address, reset: fn(&mut Ledger)) -> Result<(), EscrowError> {
        self.require_owner(caller)?;

        let ledger_before = self.ledger.clone();
        let pooled_before = self.pooled;

        // Reset is ordered before the transfer; a re-entering transfer
        // backend can only ever observe an already-emptied ledger.
        reset(&mut self.ledger);
        self.pooled = 0;

        if let Err(refusal) = self
            .treasury
            .transfer(self.address, self.owner, pooled_before)
        {
            self.ledger = ledger_before;
            self.pooled = pooled_before;
            return Err(EscrowError::WithdrawTransferFailed(refusal));
        }
        Ok(())
    }

    fn require_owner(&self, caller: Address) -> Result<(), EscrowError> {
        if caller != self.owner {
            return Err(EscrowError::Unauthorized {
                caller,
                owner: self.owner,
            });
        }
        Ok(())
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    /// The escrow's own account in the treasury
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn pooled(&self) -> u128 {
        self.pooled
    }

    pub fn minimum_usd(&self) -> u128 {
        self.minimum_usd
    }

    /// Address of the configured price feed instance
    pub fn price_feed(&self) -> Address {
        self.feed.address()
    }

    pub fn amount_funded(&self, funder: Address) -> u128 {
        self.ledger.amount_funded(funder)
    }

    /// Funder at `index` in first-contribution order
    pub fn funder(&self, index: usize) -> Result<Address, EscrowError> {
        self.ledger
            .funder(index)
            .ok_or(EscrowError::IndexOutOfRange {
                index,
                count: self.ledger.funder_count(),
            })
    }

    pub fn funder_count(&self) -> usize {
        self.ledger.funder_count()
    }

    pub fn feed(&self) -> &F {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut F {
        &mut self.feed
    }

    pub fn treasury(&self) -> &T {
        &self.treasury
    }

    pub fn treasury_mut(&mut self) -> &mut T {
        &mut self.treasury
    }
}
