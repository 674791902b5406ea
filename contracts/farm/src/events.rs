// Farm events module
// All events use compact names to reduce storage/gas costs

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the farm is initialized
/// Topics: ("FarmInit",)
/// Data: (admin, reward_token)
pub fn emit_farm_initialized(env: &Env, admin: &Address, reward_token: &Address) {
    env.events().publish(
        (Symbol::new(env, "FarmInit"),),
        (admin.clone(), reward_token.clone()),
    );
}

/// Emitted when a pool is registered
/// Topics: ("PoolAdded",)
/// Data: (pool_id, underlying, weight, current_tick)
pub fn emit_pool_added(env: &Env, pool_id: u32, underlying: &Address, weight: u32, current_tick: i32) {
    env.events().publish(
        (Symbol::new(env, "PoolAdded"),),
        (pool_id, underlying.clone(), weight, current_tick),
    );
}

/// Emitted when a pool's allocation weight changes
/// Topics: ("WeightSet",)
/// Data: (pool_id, old_weight, new_weight, total_weight)
pub fn emit_weight_set(env: &Env, pool_id: u32, old_weight: u32, new_weight: u32, total_weight: u64) {
    env.events().publish(
        (Symbol::new(env, "WeightSet"),),
        (pool_id, old_weight, new_weight, total_weight),
    );
}

/// Emitted when a new emission rate takes effect
/// Topics: ("Upkeep",)
/// Data: (rate_per_second, period_end)
pub fn emit_upkeep(env: &Env, rate_per_second: u128, period_end: u64) {
    env.events()
        .publish((Symbol::new(env, "Upkeep"),), (rate_per_second, period_end));
}

/// Emitted when a rate change is staged for later
/// Topics: ("UpkeepStage",)
/// Data: (rate_per_second, duration, effective_at)
pub fn emit_upkeep_staged(env: &Env, rate_per_second: u128, duration: u64, effective_at: u64) {
    env.events().publish(
        (Symbol::new(env, "UpkeepStage"),),
        (rate_per_second, duration, effective_at),
    );
}

/// Emitted when a pool is enabled or disabled
/// Topics: ("PoolEnable",)
/// Data: (pool_id, enabled, total_weight)
pub fn emit_pool_enabled(env: &Env, pool_id: u32, enabled: bool, total_weight: u64) {
    env.events().publish(
        (Symbol::new(env, "PoolEnable"),),
        (pool_id, enabled, total_weight),
    );
}

/// Emitted when liquidity is staked (new position or restake)
/// Topics: ("Stake",)
/// Data: (position_id, pool_id, owner, liquidity, tick_lower, tick_upper)
pub fn emit_stake(
    env: &Env,
    position_id: u64,
    pool_id: u32,
    owner: &Address,
    liquidity: i128,
    tick_lower: i32,
    tick_upper: i32,
) {
    env.events().publish(
        (Symbol::new(env, "Stake"),),
        (
            position_id,
            pool_id,
            owner.clone(),
            liquidity,
            tick_lower,
            tick_upper,
        ),
    );
}

/// Emitted when liquidity is unstaked
/// Topics: ("Unstake",)
/// Data: (position_id, pool_id, liquidity_delta, remaining)
pub fn emit_unstake(env: &Env, position_id: u64, pool_id: u32, liquidity_delta: i128, remaining: i128) {
    env.events().publish(
        (Symbol::new(env, "Unstake"),),
        (position_id, pool_id, liquidity_delta, remaining),
    );
}

/// Emitted when a position's reward is paid out
/// Topics: ("Harvest",)
/// Data: (position_id, owner, amount)
pub fn emit_harvest(env: &Env, position_id: u64, owner: &Address, amount: u128) {
    env.events().publish(
        (Symbol::new(env, "Harvest"),),
        (position_id, owner.clone(), amount),
    );
}

/// Emitted when the underlying pool reports a tick crossing
/// Topics: ("TickCross",)
/// Data: (pool_id, tick, new_current_tick, active_liquidity)
pub fn emit_tick_crossed(env: &Env, pool_id: u32, tick: i32, new_current_tick: i32, active_liquidity: i128) {
    env.events().publish(
        (Symbol::new(env, "TickCross"),),
        (pool_id, tick, new_current_tick, active_liquidity),
    );
}
