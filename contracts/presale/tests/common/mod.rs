use presale::{PresaleContract, PresaleContractClient, MONTH};
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

pub const T0: u64 = 1_700_000_000;
pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;

#[derive(Clone)]
#[contracttype]
enum FeedKey {
    Rate,
}

/// Chainlink-style feed: answer plus its decimals.
#[contract]
pub struct TestPriceFeed;

#[contractimpl]
impl TestPriceFeed {
    pub fn set_rate(env: Env, rate: i128, decimals: u32) {
        env.storage().instance().set(&FeedKey::Rate, &(rate, decimals));
    }

    pub fn latest_rate(env: Env) -> (i128, u32) {
        env.storage().instance().get(&FeedKey::Rate).unwrap()
    }
}

pub struct PresaleTest<'a> {
    pub env: &'a Env,
    pub client: PresaleContractClient<'a>,
    pub owner: Address,
    pub feed: TestPriceFeedClient<'a>,
    pub stable: token::Client<'a>,
    pub native: token::Client<'a>,
    pub sale_token: token::Client<'a>,
    stable_admin: token::StellarAssetClient<'a>,
    native_admin: token::StellarAssetClient<'a>,
    sale_admin: token::StellarAssetClient<'a>,
}

fn asset<'a>(env: &Env, admin: &Address) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let id = env.register_stellar_asset_contract_v2(admin.clone()).address();
    (
        token::Client::new(env, &id),
        token::StellarAssetClient::new(env, &id),
    )
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|l| l.timestamp = timestamp);
}

/// Deploys the presale against a 6-decimal stablecoin, an 18-decimal native
/// asset and a feed quoting 1880 with 8 decimals.
pub fn setup_presale<'a>(env: &'a Env) -> PresaleTest<'a> {
    env.mock_all_auths();
    set_time(env, T0);

    let owner = Address::generate(env);
    let issuer = Address::generate(env);
    let (stable, stable_admin) = asset(env, &issuer);
    let (native, native_admin) = asset(env, &issuer);
    let (sale_token, sale_admin) = asset(env, &issuer);

    let feed_id = env.register_contract(None, TestPriceFeed);
    let feed = TestPriceFeedClient::new(env, &feed_id);
    feed.set_rate(&188_000_000_000, &8);

    let contract_id = env.register_contract(None, PresaleContract);
    let client = PresaleContractClient::new(env, &contract_id);
    client.initialize(
        &owner,
        &feed_id,
        &stable.address,
        &6u32,
        &native.address,
        &18u32,
    );

    PresaleTest {
        env,
        client,
        owner,
        feed,
        stable,
        native,
        sale_token,
        stable_admin,
        native_admin,
        sale_admin,
    }
}

impl<'a> PresaleTest<'a> {
    /// Round opening a minute from T0, closing after five more, vesting from
    /// T0+420 with a one month cliff and a two month period.
    pub fn create_round(&self, price: u128) -> u32 {
        self.client.create_round(
            &self.owner,
            &(T0 + 60),
            &(T0 + 360),
            &price,
            &100_000,
            &ONE_TOKEN,
            &(T0 + 420),
            &MONTH,
            &(2 * MONTH),
        )
    }

    pub fn buyer(&self) -> Address {
        let buyer = Address::generate(self.env);
        self.native_admin.mint(&buyer, &1_000_000_000_000_000_000);
        self.stable_admin.mint(&buyer, &1_000_000_000);
        buyer
    }

    pub fn approve_stable(&self, buyer: &Address, amount: u128) {
        self.stable
            .approve(buyer, &self.client.address, &(amount as i128), &10_000);
    }

    pub fn fund_sale_token(&self, round_id: u32, amount: u128) {
        self.client
            .change_sale_token_address(&self.owner, &round_id, &Some(self.sale_token.address.clone()));
        self.sale_admin.mint(&self.client.address, &(amount as i128));
    }
}
