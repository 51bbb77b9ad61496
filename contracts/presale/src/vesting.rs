use soroban_sdk::{Env, U256};

use crate::errors::Error;
use crate::pricing::{to_u128, BASE_MULTIPLIER};
use crate::types::{Round, VestingRecord};

/// Unlock granularity: releases happen in whole 30-day steps.
pub const MONTH: u64 = 30 * 24 * 3600;

/// Empty record whose claim window is derived from the round's current vesting fields.
pub fn open_record(round: &Round) -> Result<VestingRecord, Error> {
    let claim_start = round
        .vesting_start_time
        .checked_add(round.vesting_cliff)
        .ok_or(Error::ArithmeticOverflow)?;
    let claim_end = claim_start
        .checked_add(round.vesting_period)
        .ok_or(Error::ArithmeticOverflow)?;

    Ok(VestingRecord {
        total_amount: 0,
        claimed_amount: 0,
        claim_start,
        claim_end,
    })
}

/// Unlocked but unclaimed base units at `now`.
///
/// Nothing before `claim_start`; whole elapsed months pro rata over the
/// window; the full remainder from `claim_end` on.
pub fn claimable(env: &Env, record: &VestingRecord, now: u64) -> Result<u128, Error> {
    if record.total_amount == 0 {
        return Err(Error::NothingToClaim);
    }
    let remaining = record
        .total_amount
        .checked_sub(record.claimed_amount)
        .ok_or(Error::ArithmeticOverflow)?;
    if remaining == 0 {
        return Err(Error::AlreadyClaimed);
    }

    if now < record.claim_start {
        return Ok(0);
    }
    if now >= record.claim_end {
        return Ok(remaining);
    }

    let months_passed = (now - record.claim_start) / MONTH;
    let window = record.claim_end - record.claim_start;

    let per_month = U256::from_u128(env, record.total_amount)
        .mul(&U256::from_u128(env, BASE_MULTIPLIER))
        .mul(&U256::from_u128(env, MONTH as u128))
        .div(&U256::from_u128(env, window as u128));
    let unlocked = per_month
        .mul(&U256::from_u128(env, months_passed as u128))
        .div(&U256::from_u128(env, BASE_MULTIPLIER));

    to_u128(&unlocked)?
        .checked_sub(record.claimed_amount)
        .ok_or(Error::ArithmeticOverflow)
}
