//! Wei to USD conversion

use crate::error::EscrowError;
use crate::feed::{PriceFeed, PriceQuote};

/// USD fixed-point scale (1e18, matching wei precision)
pub const USD_SCALE: u128 = 1_000_000_000_000_000_000;

/// Default contribution floor: 50 USD at `USD_SCALE`
pub const MINIMUM_USD: u128 = 50 * USD_SCALE;

/// USD-equivalent of `amount` wei under `quote`, at `USD_SCALE` precision
///
/// usd = amount * answer / 10^decimals. The product is checked: a result
/// that does not fit u128 is an `Overflow` failure, never a wrapped value.
pub fn usd_value(quote: &PriceQuote, amount: u128) -> Result<u128, EscrowError> {
    let feed_scale = 10u128
        .checked_pow(quote.decimals as u32)
        .ok_or(EscrowError::Overflow { amount })?;
    let scaled = amount
        .checked_mul(quote.answer)
        .ok_or(EscrowError::Overflow { amount })?;
    Ok(scaled / feed_scale)
}

/// USD-equivalent of `amount` wei read through `feed`
///
/// A feed failure surfaces as `OracleUnavailable`; the amount is never
/// treated as valid on a failed read.
pub fn conversion_rate<F: PriceFeed>(feed: &F, amount: u128) -> Result<u128, EscrowError> {
    let quote = feed.latest_price().map_err(EscrowError::OracleUnavailable)?;
    usd_value(&quote, amount)
}
