//! Randomized properties over the escrow engine

use fundme_escrow::{usd_value, Address, Bank, Escrow, PriceQuote};
use fundme_feeds::MockAggregator;
use proptest::prelude::*;

const DECIMALS: u8 = 8;
const INITIAL_ANSWER: i128 = 200_000_000_000; // 2000 USD at 8 decimals
const SEND_VALUE: u128 = 1_000_000_000_000_000_000; // 1 ETH
const FIFTY_USD_OF_ETH: u128 = SEND_VALUE / 40;

fn deploy() -> Escrow<MockAggregator, Bank> {
    let owner = Address::new_unique();
    let feed = MockAggregator::new(DECIMALS, INITIAL_ANSWER);
    Escrow::new(owner, feed, Bank::new())
}

proptest! {
    /// Contributions valuing below the minimum never credit anything
    #[test]
    fn test_below_minimum_never_credits(amount in 0u128..FIFTY_USD_OF_ETH) {
        let mut escrow = deploy();
        let patron = Address::new_unique();
        escrow.treasury_mut().credit(patron, amount);

        prop_assert!(escrow.contribute(patron, amount).is_err());
        prop_assert_eq!(escrow.amount_funded(patron), 0);
        prop_assert_eq!(escrow.pooled(), 0);
        prop_assert_eq!(escrow.funder_count(), 0);
    }

    /// The pool always equals the sum of all recorded contributions
    #[test]
    fn test_pooled_equals_recorded_sum(
        amounts in prop::collection::vec(FIFTY_USD_OF_ETH..=4 * SEND_VALUE, 1..8)
    ) {
        let mut escrow = deploy();

        let mut expected = 0u128;
        for amount in &amounts {
            let patron = Address::new_unique();
            escrow.treasury_mut().credit(patron, *amount);
            escrow.contribute(patron, *amount).unwrap();
            expected += amount;
        }

        prop_assert_eq!(escrow.pooled(), expected);

        let recorded: u128 = (0..escrow.funder_count())
            .map(|i| escrow.amount_funded(escrow.funder(i).unwrap()))
            .sum();
        prop_assert_eq!(recorded, expected);
    }

    /// A repeat funder registers once and accumulates every contribution
    #[test]
    fn test_repeat_funder_registers_once(times in 1usize..6) {
        let mut escrow = deploy();
        let patron = Address::new_unique();
        escrow.treasury_mut().credit(patron, SEND_VALUE * times as u128);

        for _ in 0..times {
            escrow.contribute(patron, SEND_VALUE).unwrap();
        }

        prop_assert_eq!(escrow.funder_count(), 1);
        prop_assert_eq!(escrow.amount_funded(patron), SEND_VALUE * times as u128);
    }

    /// Withdrawal strategies agree on every observable from any random round
    #[test]
    fn test_withdraw_strategies_equivalent(
        amounts in prop::collection::vec(FIFTY_USD_OF_ETH..=2 * SEND_VALUE, 0..6)
    ) {
        let mut escrow = deploy();
        let owner = escrow.owner();

        for amount in &amounts {
            let patron = Address::new_unique();
            escrow.treasury_mut().credit(patron, *amount);
            escrow.contribute(patron, *amount).unwrap();
        }

        let mut plain = escrow.clone();
        let mut buffered = escrow;

        plain.withdraw(owner).unwrap();
        buffered.cheaper_withdraw(owner).unwrap();

        prop_assert_eq!(plain.pooled(), buffered.pooled());
        prop_assert_eq!(plain.funder_count(), buffered.funder_count());
        prop_assert_eq!(
            plain.treasury().balance_of(owner),
            buffered.treasury().balance_of(owner)
        );
    }

    /// Valuation is monotone in the amount at any fixed quote
    #[test]
    fn test_usd_value_monotone(a in 0u128..4 * SEND_VALUE, b in 0u128..4 * SEND_VALUE) {
        let quote = PriceQuote {
            answer: 200_000_000_000,
            decimals: 8,
        };
        let lo = a.min(b);
        let hi = a.max(b);

        prop_assert!(usd_value(&quote, lo).unwrap() <= usd_value(&quote, hi).unwrap());
    }
}
