//! Fixed-point quote algebra. Every product is taken before any division so
//! results truncate exactly once, at the end.

use soroban_sdk::{Env, U256};

use crate::errors::Error;

/// Decimals of round prices and normalised oracle rates.
pub const PRICE_DECIMALS: u32 = 18;
pub const BASE_MULTIPLIER: u128 = 1_000_000_000_000_000_000;

pub fn pow10(env: &Env, exp: u32) -> U256 {
    U256::from_u32(env, 10).pow(exp)
}

pub fn to_u128(value: &U256) -> Result<u128, Error> {
    value.to_u128().ok_or(Error::ArithmeticOverflow)
}

/// Token interface amounts are signed.
pub fn to_token_amount(value: u128) -> Result<i128, Error> {
    i128::try_from(value).map_err(|_| Error::ArithmeticOverflow)
}

/// Stablecoin base units owed for `token_amount` whole tokens:
/// `token_amount * price / 10^(18 - stable_decimals)`.
pub fn stable_cost(
    env: &Env,
    token_amount: u128,
    price: u128,
    stable_decimals: u32,
) -> Result<u128, Error> {
    let scale = PRICE_DECIMALS
        .checked_sub(stable_decimals)
        .ok_or(Error::InvalidDecimals)?;
    let cost = U256::from_u128(env, token_amount)
        .mul(&U256::from_u128(env, price))
        .div(&pow10(env, scale));
    to_u128(&cost)
}

/// Native base units owed for `token_amount` whole tokens at `rate`
/// (reference-currency per native unit, 18 decimals):
/// `token_amount * price * 10^native_decimals / rate`.
pub fn native_cost(
    env: &Env,
    token_amount: u128,
    price: u128,
    rate: u128,
    native_decimals: u32,
) -> Result<u128, Error> {
    if rate == 0 {
        return Err(Error::InvalidOracleRate);
    }
    // u128 product times 10^18 stays below 2^256
    let notional = token_amount
        .checked_mul(price)
        .ok_or(Error::ArithmeticOverflow)?;
    let cost = U256::from_u128(env, notional)
        .mul(&pow10(env, native_decimals))
        .div(&U256::from_u128(env, rate));
    to_u128(&cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE_1880: u128 = 1_880_000_000_000_000_000_000;

    #[test]
    fn stable_cost_for_six_decimal_stablecoin() {
        let env = Env::default();
        // 10 tokens at 0.05
        assert_eq!(stable_cost(&env, 10, 50_000_000_000_000_000, 6), Ok(500_000));
    }

    #[test]
    fn stable_cost_rejects_decimals_above_price_precision() {
        let env = Env::default();
        assert_eq!(
            stable_cost(&env, 10, 50_000_000_000_000_000, 19),
            Err(Error::InvalidDecimals)
        );
    }

    #[test]
    fn native_cost_truncates_after_division() {
        let env = Env::default();
        // 0.5 reference units / 1880 per native unit = 0.000265957446808510638...
        assert_eq!(
            native_cost(&env, 10, 50_000_000_000_000_000, RATE_1880, 18),
            Ok(265_957_446_808_510)
        );
    }

    #[test]
    fn native_cost_follows_native_decimals() {
        let env = Env::default();
        // 7-decimal native asset: 0.0002659 -> 2659 stroops
        assert_eq!(
            native_cost(&env, 10, 50_000_000_000_000_000, RATE_1880, 7),
            Ok(2_659)
        );
    }

    #[test]
    fn native_cost_handles_products_wider_than_u128() {
        let env = Env::default();
        let tokens = 1_000_000_000_000u128;
        let price = 1_000_000_000_000_000_000_000u128;
        assert_eq!(
            native_cost(&env, tokens, price, BASE_MULTIPLIER, 18),
            Ok(tokens * price)
        );
    }

    #[test]
    fn native_cost_rejects_notional_beyond_u128() {
        let env = Env::default();
        assert_eq!(
            native_cost(&env, u128::MAX / 2, u128::MAX / 2, RATE_1880, 18),
            Err(Error::ArithmeticOverflow)
        );
    }
}
