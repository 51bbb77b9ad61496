use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ==================== Event Payload Structs ====================
// Published under ("PRESALE", symbol_short!("…")) for external indexers.

#[derive(Clone)]
#[contracttype]
pub struct RoundCreatedEvent {
    pub round_id: u32,
    pub tokens_to_sell: u128,
    pub start_time: u64,
    pub end_time: u64,
    pub timestamp: u64,
}

/// A single round field edit. `field` names the field, values are widened to u128.
#[derive(Clone)]
#[contracttype]
pub struct RoundUpdatedEvent {
    pub round_id: u32,
    pub field: Symbol,
    pub prev_value: u128,
    pub new_value: u128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct SaleTokenSetEvent {
    pub round_id: u32,
    pub prev_token: Option<Address>,
    pub new_token: Address,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct BuyTogglesEvent {
    pub round_id: u32,
    pub native_enabled: bool,
    pub stable_enabled: bool,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct PauseEvent {
    pub round_id: u32,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct TokensBoughtEvent {
    pub round_id: u32,
    pub buyer: Address,
    /// Whole tokens.
    pub token_amount: u128,
    pub payment_token: Address,
    pub amount_paid: u128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct TokensClaimedEvent {
    pub round_id: u32,
    pub user: Address,
    /// Base units released.
    pub amount: u128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct BatchClaimedEvent {
    pub round_id: u32,
    pub user_count: u32,
    pub total_amount: u128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct OwnershipTransferredEvent {
    pub prev_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct MigratedEvent {
    pub from_version: u32,
    pub to_version: u32,
    pub timestamp: u64,
}

// ==================== Emit Functions ====================

pub fn emit_round_created(
    env: &Env,
    round_id: u32,
    tokens_to_sell: u128,
    start_time: u64,
    end_time: u64,
) {
    env.events().publish(
        ("PRESALE", symbol_short!("RND_NEW")),
        RoundCreatedEvent {
            round_id,
            tokens_to_sell,
            start_time,
            end_time,
            timestamp: env.ledger().timestamp(),
        },
    );
}

fn emit_round_updated(
    env: &Env,
    topic: Symbol,
    round_id: u32,
    field: Symbol,
    prev_value: u128,
    new_value: u128,
) {
    env.events().publish(
        ("PRESALE", topic),
        RoundUpdatedEvent {
            round_id,
            field,
            prev_value,
            new_value,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_start_time_changed(env: &Env, round_id: u32, prev: u64, new: u64) {
    emit_round_updated(
        env,
        symbol_short!("TIME_UPD"),
        round_id,
        symbol_short!("START"),
        prev as u128,
        new as u128,
    );
}

pub fn emit_end_time_changed(env: &Env, round_id: u32, prev: u64, new: u64) {
    emit_round_updated(
        env,
        symbol_short!("TIME_UPD"),
        round_id,
        symbol_short!("END"),
        prev as u128,
        new as u128,
    );
}

pub fn emit_price_changed(env: &Env, round_id: u32, prev: u128, new: u128) {
    emit_round_updated(
        env,
        symbol_short!("PRICE_UPD"),
        round_id,
        symbol_short!("PRICE"),
        prev,
        new,
    );
}

pub fn emit_vesting_start_changed(env: &Env, round_id: u32, prev: u64, new: u64) {
    emit_round_updated(
        env,
        symbol_short!("VEST_UPD"),
        round_id,
        symbol_short!("VEST_STRT"),
        prev as u128,
        new as u128,
    );
}

pub fn emit_sale_token_set(
    env: &Env,
    round_id: u32,
    prev_token: Option<Address>,
    new_token: Address,
) {
    env.events().publish(
        ("PRESALE", symbol_short!("TOKEN_SET")),
        SaleTokenSetEvent {
            round_id,
            prev_token,
            new_token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_buy_toggles_set(env: &Env, round_id: u32, native_enabled: bool, stable_enabled: bool) {
    env.events().publish(
        ("PRESALE", symbol_short!("BUY_TGL")),
        BuyTogglesEvent {
            round_id,
            native_enabled,
            stable_enabled,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_paused(env: &Env, round_id: u32) {
    env.events().publish(
        ("PRESALE", symbol_short!("PAUSED")),
        PauseEvent {
            round_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_unpaused(env: &Env, round_id: u32) {
    env.events().publish(
        ("PRESALE", symbol_short!("UNPAUSED")),
        PauseEvent {
            round_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_bought_with_native(
    env: &Env,
    round_id: u32,
    buyer: Address,
    token_amount: u128,
    payment_token: Address,
    amount_paid: u128,
) {
    emit_bought(
        env,
        symbol_short!("BUY_NTV"),
        round_id,
        buyer,
        token_amount,
        payment_token,
        amount_paid,
    );
}

pub fn emit_bought_with_stable(
    env: &Env,
    round_id: u32,
    buyer: Address,
    token_amount: u128,
    payment_token: Address,
    amount_paid: u128,
) {
    emit_bought(
        env,
        symbol_short!("BUY_STBL"),
        round_id,
        buyer,
        token_amount,
        payment_token,
        amount_paid,
    );
}

fn emit_bought(
    env: &Env,
    topic: Symbol,
    round_id: u32,
    buyer: Address,
    token_amount: u128,
    payment_token: Address,
    amount_paid: u128,
) {
    env.events().publish(
        ("PRESALE", topic),
        TokensBoughtEvent {
            round_id,
            buyer,
            token_amount,
            payment_token,
            amount_paid,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_claimed(env: &Env, round_id: u32, user: Address, amount: u128) {
    env.events().publish(
        ("PRESALE", symbol_short!("CLAIM")),
        TokensClaimedEvent {
            round_id,
            user,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_batch_claimed(env: &Env, round_id: u32, user_count: u32, total_amount: u128) {
    env.events().publish(
        ("PRESALE", symbol_short!("CLAIM_BAT")),
        BatchClaimedEvent {
            round_id,
            user_count,
            total_amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_ownership_transferred(env: &Env, prev_owner: Address, new_owner: Address) {
    env.events().publish(
        ("PRESALE", symbol_short!("OWNER_SET")),
        OwnershipTransferredEvent {
            prev_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_migrated(env: &Env, from_version: u32, to_version: u32) {
    env.events().publish(
        ("PRESALE", symbol_short!("MIGRATED")),
        MigratedEvent {
            from_version,
            to_version,
            timestamp: env.ledger().timestamp(),
        },
    );
}
