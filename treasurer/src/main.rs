//! FundMe Treasurer
//!
//! Off-chain service that seeds patron contributions and sweeps the pooled
//! funds to the owner once they cross the configured floor.

mod config;

use anyhow::Result;
use config::Config;
use fundme_escrow::{Address, Bank, Escrow};
use fundme_feeds::MockAggregator;
use std::time::Duration;
use tokio::time;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting FundMe Treasurer");

    // Load configuration
    let config = Config::load().unwrap_or_else(|_| {
        log::warn!("Failed to load config, using default local config");
        Config::default_local()
    });

    log::info!(
        "Feed answer: {} at {} decimals",
        config.feed_answer,
        config.feed_decimals
    );
    log::info!("Sweep floor: {} wei", config.sweep_min_wei);

    // Wire the escrow to a local feed and bank
    let owner = Address::new_unique();
    let feed = MockAggregator::new(config.feed_decimals, i128::from(config.feed_answer));
    let mut escrow = Escrow::new(owner, feed, Bank::new());

    log::info!("Escrow owner: {}", owner);
    log::info!("Price feed: {}", escrow.price_feed());

    // Seed patron wallets
    seed_patrons(&mut escrow, &config);

    log::info!("Treasurer service started. Watching the pool...");

    // Main event loop
    let mut interval = time::interval(Duration::from_secs(config.poll_interval_secs));

    loop {
        interval.tick().await;

        // Process sweeps
        if let Err(e) = process_sweep(&mut escrow, &config) {
            log::error!("Error processing sweep: {}", e);
        }

        // Log pool status
        if escrow.funder_count() > 0 {
            log::debug!("Funders on record: {}", escrow.funder_count());
            log::debug!("Pooled: {} wei", escrow.pooled());
        }
    }
}

/// Seed patron wallets and route their contributions through the escrow
fn seed_patrons(escrow: &mut Escrow<MockAggregator, Bank>, config: &Config) {
    let amount = u128::from(config.patron_contribution_wei);

    for _ in 0..config.patron_count {
        let patron = Address::new_unique();
        escrow.treasury_mut().credit(patron, amount);

        match escrow.contribute(patron, amount) {
            Ok(()) => log::info!("Patron {} contributed {} wei", patron, amount),
            Err(e) => log::error!("Patron {} contribution rejected: {}", patron, e),
        }
    }
}

/// Sweep the pool to the owner once it crosses the configured floor
fn process_sweep(escrow: &mut Escrow<MockAggregator, Bank>, config: &Config) -> Result<()> {
    let pooled = escrow.pooled();

    if pooled < u128::from(config.sweep_min_wei) {
        log::debug!("Pool below sweep floor: {} wei", pooled);
        return Ok(());
    }

    log::info!("Sweeping {} wei from {} funders", pooled, escrow.funder_count());

    let owner = escrow.owner();
    escrow.cheaper_withdraw(owner)?;

    log::info!(
        "Sweep complete. Owner holds {} wei",
        escrow.treasury().balance_of(owner)
    );

    Ok(())
}

/// Poll for external patron activity and route it through the escrow (stub for v0)
#[allow(dead_code)]
async fn ingest_contributions(escrow: &mut Escrow<MockAggregator, Bank>) -> Result<()> {
    // For v0, this is a stub
    // In production, this would:
    // 1. Watch the node for inbound transfers to the escrow address
    // 2. Credit each sending wallet in the bank
    // 3. Route every transfer through contribute()

    log::debug!("Contribution ingest (stub)");

    // Example: route a dummy patron for testing
    let patron = Address::new_unique();
    escrow.treasury_mut().credit(patron, 1_000_000_000_000_000_000);

    if let Err(e) = escrow.contribute(patron, 1_000_000_000_000_000_000) {
        log::debug!("Dummy contribution rejected: {}", e);
    }

    Ok(())
}
