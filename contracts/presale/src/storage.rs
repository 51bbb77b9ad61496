use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

// ~30 days at 5s ledgers; entries are bumped back to ~120 days once they drop below.
const PERSISTENT_TTL_THRESHOLD: u32 = 518_400;
const PERSISTENT_TTL_EXTEND_TO: u32 = 2_073_600;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_round_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::RoundCount)
        .unwrap_or(0)
}

pub fn set_round_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::RoundCount, &count);
}

pub fn get_schema_version(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::SchemaVersion)
        .unwrap_or(0)
}

pub fn set_schema_version(env: &Env, version: u32) {
    env.storage()
        .instance()
        .set(&DataKey::SchemaVersion, &version);
}

pub fn get_round(env: &Env, round_id: u32) -> Option<Round> {
    env.storage().persistent().get(&DataKey::Round(round_id))
}

/// Loads a round, mapping an unknown id (including 0) to `InvalidId`.
pub fn load_round(env: &Env, round_id: u32) -> Result<Round, Error> {
    get_round(env, round_id).ok_or(Error::InvalidId)
}

pub fn set_round(env: &Env, round_id: u32, round: &Round) {
    let key = DataKey::Round(round_id);
    env.storage().persistent().set(&key, round);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

pub fn get_vesting(env: &Env, user: &Address, round_id: u32) -> Option<VestingRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Vesting(user.clone(), round_id))
}

pub fn set_vesting(env: &Env, user: &Address, round_id: u32, record: &VestingRecord) {
    let key = DataKey::Vesting(user.clone(), round_id);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}
