use crate::errors::Error;
use crate::events;
use crate::migration::{execute_migration, PresaleSchema, SCHEMA_VERSION};
use crate::oracle::fetch_rate;
use crate::pricing::{native_cost, stable_cost, to_token_amount, PRICE_DECIMALS};
use crate::storage::*;
use crate::types::*;
use crate::vesting;
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Multi-round token presale with cliff and monthly vesting"
);

#[contract]
pub struct PresaleContract;

#[contractimpl]
impl PresaleContract {
    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Initialize the presale. Must be called exactly once.
    pub fn initialize(
        env: Env,
        owner: Address,
        oracle: Address,
        stable_token: Address,
        stable_decimals: u32,
        native_token: Address,
        native_decimals: u32,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if stable_decimals > PRICE_DECIMALS || native_decimals > PRICE_DECIMALS {
            return Err(Error::InvalidDecimals);
        }

        let config = SaleConfig {
            oracle,
            stable_token,
            stable_decimals,
            native_token,
            native_decimals,
        };

        set_config(&env, &config);
        set_owner(&env, &owner);
        set_round_count(&env, 0);
        set_schema_version(&env, SCHEMA_VERSION);
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        set_owner(&env, &new_owner);
        events::emit_ownership_transferred(&env, caller, new_owner);
        Ok(())
    }

    /// Steps persisted rounds and vesting records up to the current schema.
    pub fn migrate(env: Env, caller: Address) -> Result<u32, Error> {
        Self::require_owner(&env, &caller)?;
        let (from_version, to_version) = execute_migration::<PresaleSchema>(&env)?;
        events::emit_migrated(&env, from_version, to_version);
        Ok(to_version)
    }

    // ------------------------------------------------------------------
    // Round registry
    // ------------------------------------------------------------------

    /// Create a round and return its id. Ids start at 1.
    pub fn create_round(
        env: Env,
        caller: Address,
        start_time: u64,
        end_time: u64,
        price: u128,
        tokens_to_sell: u128,
        base_decimals: u128,
        vesting_start_time: u64,
        vesting_cliff: u64,
        vesting_period: u64,
    ) -> Result<u32, Error> {
        Self::require_owner(&env, &caller)?;

        let now = get_ledger_timestamp(&env);
        if start_time <= now || end_time <= start_time {
            return Err(Error::InvalidTime);
        }
        if price == 0 {
            return Err(Error::ZeroPrice);
        }
        if tokens_to_sell == 0 {
            return Err(Error::ZeroTokens);
        }
        if base_decimals == 0 {
            return Err(Error::ZeroDecimals);
        }
        if vesting_start_time < end_time {
            return Err(Error::VestingBeforeEnd);
        }

        let round_id = get_round_count(&env)
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;
        let round = Round {
            sale_token: None,
            start_time,
            end_time,
            price,
            tokens_to_sell,
            base_decimals,
            in_sale: tokens_to_sell,
            vesting_start_time,
            vesting_cliff,
            vesting_period,
            enable_buy_with_native: true,
            enable_buy_with_stable: true,
            paused: false,
        };

        set_round(&env, round_id, &round);
        set_round_count(&env, round_id);

        events::emit_round_created(&env, round_id, tokens_to_sell, start_time, end_time);
        Ok(round_id)
    }

    /// Move the sale window. A zero argument leaves that bound unchanged.
    pub fn change_sale_times(
        env: Env,
        caller: Address,
        round_id: u32,
        start_time: u64,
        end_time: u64,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut round = load_round(&env, round_id)?;

        if start_time == 0 && end_time == 0 {
            return Err(Error::InvalidParams);
        }

        let now = get_ledger_timestamp(&env);
        let prev_start = round.start_time;
        let prev_end = round.end_time;

        if start_time > 0 {
            if start_time < now {
                return Err(Error::SaleTimeInPast);
            }
            if now >= prev_start {
                return Err(Error::SaleAlreadyStarted);
            }
            round.start_time = start_time;
        }

        if end_time > 0 {
            if end_time <= round.start_time {
                return Err(Error::InvalidEndTime);
            }
            if now >= prev_end {
                return Err(Error::SaleAlreadyEnded);
            }
            round.end_time = end_time;
        }

        if round.start_time >= round.end_time {
            return Err(Error::InvalidTime);
        }
        if round.vesting_start_time < round.end_time {
            return Err(Error::VestingBeforeEnd);
        }

        set_round(&env, round_id, &round);

        if start_time > 0 {
            events::emit_start_time_changed(&env, round_id, prev_start, start_time);
        }
        if end_time > 0 {
            events::emit_end_time_changed(&env, round_id, prev_end, end_time);
        }
        Ok(())
    }

    pub fn change_price(
        env: Env,
        caller: Address,
        round_id: u32,
        price: u128,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut round = load_round(&env, round_id)?;

        if price == 0 {
            return Err(Error::ZeroPrice);
        }
        if get_ledger_timestamp(&env) >= round.start_time {
            return Err(Error::SaleAlreadyStarted);
        }

        let prev_price = round.price;
        round.price = price;
        set_round(&env, round_id, &round);

        events::emit_price_changed(&env, round_id, prev_price, price);
        Ok(())
    }

    pub fn change_vesting_start_time(
        env: Env,
        caller: Address,
        round_id: u32,
        vesting_start_time: u64,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut round = load_round(&env, round_id)?;

        if get_ledger_timestamp(&env) >= round.start_time {
            return Err(Error::SaleAlreadyStarted);
        }
        if vesting_start_time < round.end_time {
            return Err(Error::VestingBeforeEnd);
        }

        let prev = round.vesting_start_time;
        round.vesting_start_time = vesting_start_time;
        set_round(&env, round_id, &round);

        events::emit_vesting_start_changed(&env, round_id, prev, vesting_start_time);
        Ok(())
    }

    /// Set the ledger claims are paid from. `None` is rejected.
    pub fn change_sale_token_address(
        env: Env,
        caller: Address,
        round_id: u32,
        sale_token: Option<Address>,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut round = load_round(&env, round_id)?;

        let sale_token = sale_token.ok_or(Error::ZeroAddress)?;
        let prev = round.sale_token.replace(sale_token.clone());
        set_round(&env, round_id, &round);

        events::emit_sale_token_set(&env, round_id, prev, sale_token);
        Ok(())
    }

    pub fn set_buy_toggles(
        env: Env,
        caller: Address,
        round_id: u32,
        enable_native: bool,
        enable_stable: bool,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut round = load_round(&env, round_id)?;

        round.enable_buy_with_native = enable_native;
        round.enable_buy_with_stable = enable_stable;
        set_round(&env, round_id, &round);

        events::emit_buy_toggles_set(&env, round_id, enable_native, enable_stable);
        Ok(())
    }

    pub fn pause(env: Env, caller: Address, round_id: u32) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut round = load_round(&env, round_id)?;

        if round.paused {
            return Err(Error::AlreadyPaused);
        }
        round.paused = true;
        set_round(&env, round_id, &round);

        events::emit_paused(&env, round_id);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address, round_id: u32) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        let mut round = load_round(&env, round_id)?;

        if !round.paused {
            return Err(Error::NotPaused);
        }
        round.paused = false;
        set_round(&env, round_id, &round);

        events::emit_unpaused(&env, round_id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Pricing
    // ------------------------------------------------------------------

    /// Stablecoin base units owed for `token_amount` whole tokens.
    pub fn quote_for_stable(env: Env, round_id: u32, token_amount: u128) -> Result<u128, Error> {
        let config = get_config(&env)?;
        let round = load_round(&env, round_id)?;
        stable_cost(&env, token_amount, round.price, config.stable_decimals)
    }

    /// Native base units owed for `token_amount` whole tokens at the current feed rate.
    pub fn quote_for_native(env: Env, round_id: u32, token_amount: u128) -> Result<u128, Error> {
        let config = get_config(&env)?;
        let round = load_round(&env, round_id)?;
        Self::native_quote(&env, &config, &round, token_amount)
    }

    /// Feed rate normalised to 18 decimals.
    pub fn latest_rate(env: Env) -> Result<u128, Error> {
        let config = get_config(&env)?;
        fetch_rate(&env, &config.oracle)
    }

    // ------------------------------------------------------------------
    // Purchases
    // ------------------------------------------------------------------

    /// Buy with the stablecoin. The contract must hold an allowance from `buyer`
    /// covering the quote; exactly the quote is pulled to the owner.
    pub fn buy_with_stable(
        env: Env,
        buyer: Address,
        round_id: u32,
        token_amount: u128,
    ) -> Result<(), Error> {
        buyer.require_auth();
        let config = get_config(&env)?;
        let mut round = load_round(&env, round_id)?;

        if !round.enable_buy_with_stable {
            return Err(Error::BuyWithStableDisabled);
        }
        Self::validate_purchase(&env, &round, token_amount)?;

        let cost = stable_cost(&env, token_amount, round.price, config.stable_decimals)?;
        let cost_units = to_token_amount(cost)?;

        let this = env.current_contract_address();
        let stable = token::Client::new(&env, &config.stable_token);
        if stable.allowance(&buyer, &this) < cost_units {
            return Err(Error::InsufficientAllowance);
        }

        Self::record_purchase(&env, &buyer, round_id, &mut round, token_amount)?;

        let owner = get_owner(&env)?;
        stable.transfer_from(&this, &buyer, &owner, &cost_units);

        events::emit_bought_with_stable(
            &env,
            round_id,
            buyer,
            token_amount,
            config.stable_token,
            cost,
        );
        Ok(())
    }

    /// Buy with the native asset. `paid_amount` is taken from `buyer`; the quote
    /// goes to the owner and any excess is refunded in the same invocation.
    pub fn buy_with_native(
        env: Env,
        buyer: Address,
        round_id: u32,
        token_amount: u128,
        paid_amount: u128,
    ) -> Result<(), Error> {
        buyer.require_auth();
        let config = get_config(&env)?;
        let mut round = load_round(&env, round_id)?;

        if !round.enable_buy_with_native {
            return Err(Error::BuyWithNativeDisabled);
        }
        Self::validate_purchase(&env, &round, token_amount)?;

        let cost = Self::native_quote(&env, &config, &round, token_amount)?;
        if paid_amount < cost {
            return Err(Error::InsufficientPayment);
        }
        let excess = paid_amount - cost;

        Self::record_purchase(&env, &buyer, round_id, &mut round, token_amount)?;

        let this = env.current_contract_address();
        let owner = get_owner(&env)?;
        let native = token::Client::new(&env, &config.native_token);
        native.transfer(&buyer, &this, &to_token_amount(paid_amount)?);
        native.transfer(&this, &owner, &to_token_amount(cost)?);
        if excess > 0 {
            native.transfer(&this, &buyer, &to_token_amount(excess)?);
        }

        events::emit_bought_with_native(
            &env,
            round_id,
            buyer,
            token_amount,
            config.native_token,
            cost,
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Vesting & claims
    // ------------------------------------------------------------------

    /// Unlocked but unclaimed base units for `user` in `round_id`.
    pub fn claimable_amount(env: Env, user: Address, round_id: u32) -> Result<u128, Error> {
        load_round(&env, round_id)?;
        let record = get_vesting(&env, &user, round_id).ok_or(Error::NothingToClaim)?;
        vesting::claimable(&env, &record, get_ledger_timestamp(&env))
    }

    /// Release everything currently unlocked for `user`. Anyone may submit
    /// this on the user's behalf; tokens always go to `user`.
    pub fn claim(env: Env, user: Address, round_id: u32) -> Result<u128, Error> {
        Self::claim_for(&env, &user, round_id)
    }

    /// Claim for every listed user; one failure aborts the whole batch.
    pub fn claim_multiple(env: Env, users: Vec<Address>, round_id: u32) -> Result<u128, Error> {
        if users.is_empty() {
            return Err(Error::EmptyUserList);
        }

        let mut total: u128 = 0;
        for user in users.iter() {
            let amount = Self::claim_for(&env, &user, round_id)?;
            total = total.checked_add(amount).ok_or(Error::ArithmeticOverflow)?;
        }

        events::emit_batch_claimed(&env, round_id, users.len(), total);
        Ok(total)
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn round_count(env: Env) -> u32 {
        get_round_count(&env)
    }

    pub fn get_round(env: Env, round_id: u32) -> Result<Round, Error> {
        load_round(&env, round_id)
    }

    pub fn get_vesting(env: Env, user: Address, round_id: u32) -> Option<VestingRecord> {
        get_vesting(&env, &user, round_id)
    }

    pub fn schema_version(env: Env) -> u32 {
        get_schema_version(&env)
    }
}

// ------------------------------------------------------------------
// Internal helpers
// ------------------------------------------------------------------

impl PresaleContract {
    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if get_owner(env)? != *caller {
            return Err(Error::NotOwner);
        }
        Ok(())
    }

    fn validate_purchase(env: &Env, round: &Round, token_amount: u128) -> Result<(), Error> {
        let now = get_ledger_timestamp(env);
        if now < round.start_time || now >= round.end_time {
            return Err(Error::InvalidTime);
        }
        if round.paused {
            return Err(Error::Paused);
        }
        if token_amount == 0 {
            return Err(Error::ZeroAmount);
        }
        if token_amount > round.in_sale {
            return Err(Error::ExceedsAvailable);
        }
        Ok(())
    }

    fn native_quote(
        env: &Env,
        config: &SaleConfig,
        round: &Round,
        token_amount: u128,
    ) -> Result<u128, Error> {
        let rate = fetch_rate(env, &config.oracle)?;
        native_cost(env, token_amount, round.price, rate, config.native_decimals)
    }

    /// Debits the round allocation and credits the buyer's vesting record.
    /// The claim window is fixed when the record is first opened.
    fn record_purchase(
        env: &Env,
        buyer: &Address,
        round_id: u32,
        round: &mut Round,
        token_amount: u128,
    ) -> Result<(), Error> {
        round.in_sale = round
            .in_sale
            .checked_sub(token_amount)
            .ok_or(Error::ExceedsAvailable)?;
        set_round(env, round_id, round);

        let base_units = token_amount
            .checked_mul(round.base_decimals)
            .ok_or(Error::ArithmeticOverflow)?;
        let mut record = match get_vesting(env, buyer, round_id) {
            Some(record) => record,
            None => vesting::open_record(round)?,
        };
        record.total_amount = record
            .total_amount
            .checked_add(base_units)
            .ok_or(Error::ArithmeticOverflow)?;
        set_vesting(env, buyer, round_id, &record);
        Ok(())
    }

    fn claim_for(env: &Env, user: &Address, round_id: u32) -> Result<u128, Error> {
        let round = load_round(env, round_id)?;
        let mut record = get_vesting(env, user, round_id).ok_or(Error::NothingToClaim)?;

        let amount = vesting::claimable(env, &record, get_ledger_timestamp(env))?;
        if amount == 0 {
            return Err(Error::ZeroClaimAmount);
        }
        let sale_token = round.sale_token.ok_or(Error::SaleTokenUnset)?;
        let amount_units = to_token_amount(amount)?;

        let this = env.current_contract_address();
        let token = token::Client::new(env, &sale_token);
        if token.balance(&this) < amount_units {
            return Err(Error::InsufficientContractBalance);
        }

        record.claimed_amount = record
            .claimed_amount
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        set_vesting(env, user, round_id, &record);

        token.transfer(&this, user, &amount_units);

        events::emit_claimed(env, round_id, user.clone(), amount);
        Ok(amount)
    }
}
