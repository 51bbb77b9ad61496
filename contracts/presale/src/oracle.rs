use soroban_sdk::{contractclient, Address, Env};

use crate::errors::Error;
use crate::pricing::PRICE_DECIMALS;

/// Interface for price-feed contracts.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedInterface {
    /// Native-currency rate in reference-currency units, and the decimals it is expressed with.
    fn latest_rate(env: Env) -> (i128, u32);
}

/// Reads the feed and returns the rate scaled to `PRICE_DECIMALS`.
/// Never cached; every quote reads the feed again.
pub fn fetch_rate(env: &Env, oracle: &Address) -> Result<u128, Error> {
    let client = PriceFeedClient::new(env, oracle);
    let (rate, decimals) = match client.try_latest_rate() {
        Ok(Ok(reading)) => reading,
        _ => return Err(Error::OracleUnavailable),
    };
    normalize_rate(rate, decimals)
}

pub fn normalize_rate(rate: i128, decimals: u32) -> Result<u128, Error> {
    if rate <= 0 {
        return Err(Error::InvalidOracleRate);
    }
    let rate = u128::try_from(rate).map_err(|_| Error::InvalidOracleRate)?;

    let normalized = if decimals <= PRICE_DECIMALS {
        let scale = 10u128
            .checked_pow(PRICE_DECIMALS - decimals)
            .ok_or(Error::ArithmeticOverflow)?;
        rate.checked_mul(scale).ok_or(Error::ArithmeticOverflow)?
    } else {
        match 10u128.checked_pow(decimals - PRICE_DECIMALS) {
            Some(scale) => rate / scale,
            None => 0,
        }
    };

    // a rate that truncates to zero would divide by zero in the native quote
    if normalized == 0 {
        return Err(Error::InvalidOracleRate);
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_eight_decimal_feed_up() {
        // 1880.00000000 with 8 decimals
        assert_eq!(
            normalize_rate(188_000_000_000, 8),
            Ok(1_880_000_000_000_000_000_000)
        );
    }

    #[test]
    fn passes_eighteen_decimal_feed_through() {
        assert_eq!(normalize_rate(5, 18), Ok(5));
    }

    #[test]
    fn scales_wider_feed_down() {
        assert_eq!(normalize_rate(1_500, 20), Ok(15));
        assert_eq!(normalize_rate(99, 20), Err(Error::InvalidOracleRate));
    }

    #[test]
    fn rejects_non_positive_rates() {
        assert_eq!(normalize_rate(0, 8), Err(Error::InvalidOracleRate));
        assert_eq!(normalize_rate(-1, 8), Err(Error::InvalidOracleRate));
    }
}
