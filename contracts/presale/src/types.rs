use soroban_sdk::{contracttype, Address, Env};

/// Collaborator addresses and decimal layout fixed at initialisation.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    /// Price feed returning native-currency rate against the reference currency.
    pub oracle: Address,
    pub stable_token: Address,
    pub stable_decimals: u32,
    pub native_token: Address,
    pub native_decimals: u32,
}

/// One configured presale offering.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Round {
    /// Payout ledger for claims; `None` until the owner sets it.
    pub sale_token: Option<Address>,
    pub start_time: u64,
    pub end_time: u64,
    /// Price of one whole token in the reference currency, 18 decimals.
    pub price: u128,
    pub tokens_to_sell: u128,
    /// Base units per whole sale token, e.g. 10^18.
    pub base_decimals: u128,
    /// Unsold whole tokens.
    pub in_sale: u128,
    pub vesting_start_time: u64,
    pub vesting_cliff: u64,
    pub vesting_period: u64,
    pub enable_buy_with_native: bool,
    pub enable_buy_with_stable: bool,
    pub paused: bool,
}

/// Per-(user, round) ledger of purchased vs. released base units.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingRecord {
    pub total_amount: u128,
    pub claimed_amount: u128,
    pub claim_start: u64,
    pub claim_end: u64,
}

#[contracttype]
pub enum DataKey {
    // Instance storage
    Config,
    Owner,
    RoundCount,
    SchemaVersion,

    // Persistent storage
    Round(u32),
    Vesting(Address, u32),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
