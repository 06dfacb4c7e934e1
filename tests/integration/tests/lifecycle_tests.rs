//! Funding round lifecycle tests
//!
//! End-to-end runs of the whole cycle: patrons fund the escrow, the owner
//! sweeps, and every balance settles where it should.

use fundme_escrow::{Address, Bank, Escrow, EscrowError};
use fundme_feeds::MockAggregator;

const DECIMALS: u8 = 8;
const INITIAL_ANSWER: i128 = 200_000_000_000; // 2000 USD at 8 decimals
const SEND_VALUE: u128 = 1_000_000_000_000_000_000; // 1 ETH

#[tokio::test]
async fn test_full_funding_round() {
    println!("========================================");
    println!("Lifecycle: fund then withdraw");
    println!("========================================");

    let owner = Address::new_unique();
    let feed = MockAggregator::new(DECIMALS, INITIAL_ANSWER);
    let mut escrow = Escrow::new(owner, feed, Bank::new());

    let patron = Address::new_unique();
    escrow.treasury_mut().credit(patron, SEND_VALUE);

    escrow.contribute(patron, SEND_VALUE).unwrap();
    escrow.withdraw(owner).unwrap();

    let ending_pool = escrow.treasury().balance_of(escrow.address());
    let ending_owner = escrow.treasury().balance_of(owner);

    println!("📊 Results:");
    println!("  Contribution: {} wei", SEND_VALUE);
    println!("  Ending pool: {} wei", ending_pool);
    println!("  Owner balance: {} wei", ending_owner);

    assert_eq!(ending_pool, 0, "pool must drain to zero");
    assert_eq!(ending_owner, SEND_VALUE, "owner must hold the contribution");
    assert_eq!(escrow.funder_count(), 0);

    println!("========================================");
    println!("✅ Lifecycle PASSED: round settled");
    println!("========================================");
}

#[tokio::test]
async fn test_five_patron_round_settles_owner() {
    println!("========================================");
    println!("Lifecycle: five patrons, one sweep");
    println!("========================================");

    let owner = Address::new_unique();
    let feed = MockAggregator::new(DECIMALS, INITIAL_ANSWER);
    let mut escrow = Escrow::new(owner, feed, Bank::new());

    let mut expected_pool = 0u128;
    for n in 0..5u128 {
        let patron = Address::new_unique();
        let amount = SEND_VALUE * (n + 1);
        escrow.treasury_mut().credit(patron, amount);
        escrow.contribute(patron, amount).unwrap();
        expected_pool += amount;
        println!("  Patron {}: {} wei", n + 1, amount);
    }

    assert_eq!(escrow.pooled(), expected_pool);
    assert_eq!(escrow.funder_count(), 5);

    escrow.cheaper_withdraw(owner).unwrap();

    println!("📊 Results:");
    println!("  Swept: {} wei", expected_pool);
    println!("  Owner balance: {} wei", escrow.treasury().balance_of(owner));

    assert_eq!(
        escrow.treasury().balance_of(owner),
        expected_pool,
        "owner must receive every contribution"
    );
    assert_eq!(escrow.pooled(), 0);
    assert_eq!(escrow.treasury().balance_of(escrow.address()), 0);

    println!("========================================");
    println!("✅ Lifecycle PASSED: all patrons settled");
    println!("========================================");
}

#[tokio::test]
async fn test_price_move_mid_round() {
    println!("========================================");
    println!("Lifecycle: price moves mid-round");
    println!("========================================");

    let owner = Address::new_unique();
    let feed = MockAggregator::new(DECIMALS, INITIAL_ANSWER);
    let mut escrow = Escrow::new(owner, feed, Bank::new());

    let patron = Address::new_unique();
    escrow.treasury_mut().credit(patron, 10 * SEND_VALUE);

    // $50 worth at 2000 USD per ETH
    let entry = SEND_VALUE / 40;
    escrow.contribute(patron, entry).unwrap();

    // Price halves: the same wei is now worth $25
    escrow.feed_mut().update_answer(INITIAL_ANSWER / 2);
    let rejected = escrow.contribute(patron, entry);
    assert!(matches!(
        rejected,
        Err(EscrowError::InsufficientContribution { .. })
    ));

    // Doubling the wei restores the dollar value
    escrow.contribute(patron, entry * 2).unwrap();

    escrow.withdraw(owner).unwrap();

    println!("📊 Results:");
    println!("  Accepted: {} wei", entry * 3);
    println!("  Owner balance: {} wei", escrow.treasury().balance_of(owner));

    assert_eq!(escrow.treasury().balance_of(owner), entry * 3);
    assert_eq!(escrow.amount_funded(patron), 0);

    println!("========================================");
    println!("✅ Lifecycle PASSED: valuation tracked the feed");
    println!("========================================");
}

#[tokio::test]
async fn test_withdraw_strategies_settle_identically() {
    println!("========================================");
    println!("Lifecycle: withdraw vs cheaper withdraw");
    println!("========================================");

    let mut outcomes = Vec::new();

    for cheaper in [false, true] {
        let owner = Address::new_unique();
        let feed = MockAggregator::new(DECIMALS, INITIAL_ANSWER);
        let mut escrow = Escrow::new(owner, feed, Bank::new());

        for n in 0..4u128 {
            let patron = Address::new_unique();
            let amount = SEND_VALUE * (n + 1);
            escrow.treasury_mut().credit(patron, amount);
            escrow.contribute(patron, amount).unwrap();
        }

        if cheaper {
            escrow.cheaper_withdraw(owner).unwrap();
        } else {
            escrow.withdraw(owner).unwrap();
        }

        outcomes.push((
            escrow.pooled(),
            escrow.funder_count(),
            escrow.treasury().balance_of(owner),
            escrow.treasury().balance_of(escrow.address()),
        ));
    }

    println!("📊 Results:");
    println!("  withdraw:         {:?}", outcomes[0]);
    println!("  cheaper_withdraw: {:?}", outcomes[1]);

    assert_eq!(outcomes[0], outcomes[1], "strategies must settle identically");

    println!("========================================");
    println!("✅ Lifecycle PASSED: strategies agree");
    println!("========================================");
}
