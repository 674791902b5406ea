#![allow(dead_code)]

use belugafarm_farm::{BelugaFarm, BelugaFarmClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env};

// Test constants
pub const RATE: u128 = 1_000_000; // reward units per second
pub const DEFAULT_DURATION: u64 = 100_000;
pub const LIQ: i128 = 1_000_000;

/// Minimal stand-in for the underlying AMM pool: holds a current tick and
/// answers `get_current_tick`. Crossings are driven by the tests calling
/// `notify_tick_crossed` on the farm directly.
#[contract]
pub struct MockAmmPool;

#[contractimpl]
impl MockAmmPool {
    pub fn set_current_tick(env: Env, tick: i32) {
        env.storage().instance().set(&symbol_short!("tick"), &tick);
    }

    pub fn get_current_tick(env: Env) -> i32 {
        env.storage().instance().get(&symbol_short!("tick")).unwrap_or(0)
    }
}

/// Setup an initialized farm; returns (client, admin, reward_token)
pub fn setup_farm(env: &Env) -> (BelugaFarmClient<'_>, Address, Address) {
    let admin = Address::generate(env);
    let reward_token = create_token(env, &admin);

    let farm_id = env.register(BelugaFarm, ());
    let client = BelugaFarmClient::new(env, &farm_id);

    client.initialize(&admin, &reward_token);

    (client, admin, reward_token)
}

/// Register a mock AMM pool at the given tick
pub fn register_mock_pool(env: &Env, initial_tick: i32) -> Address {
    let pool_addr = env.register(MockAmmPool, ());
    let pool = MockAmmPoolClient::new(env, &pool_addr);
    pool.set_current_tick(&initial_tick);
    pool_addr
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint reward tokens to the farm so harvests can pay out
pub fn fund_farm(env: &Env, token: &Address, farm: &Address, amount: i128) {
    use soroban_sdk::token::StellarAssetClient;
    let client = StellarAssetClient::new(env, token);
    client.mint(farm, &amount);
}

/// Jump the ledger clock to an absolute timestamp
pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|l| l.timestamp = timestamp);
}
