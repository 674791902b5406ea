// Farm storage module

use soroban_sdk::{contracttype, Env};

use belugafarm_position::StakedPosition;
use belugafarm_tick::RewardTickInfo;

use crate::types::{EmissionSchedule, FarmConfig, PendingUpkeep, PoolRewardState};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum FarmDataKey {
    /// Farm configuration
    Config,
    /// Initialization flag
    Initialized,
    /// Global emission schedule
    Schedule,
    /// Staged rate change, if any
    PendingUpkeep,
    /// Number of registered pools (ids are 1..=count)
    PoolCount,
    /// Pool reward state by pool id
    Pool(u32),
    /// Reward tick ledger entry by (pool id, tick index)
    Tick(u32, i32),
    /// Staked position by position id
    Position(u64),
    /// Next position id to hand out
    NextPositionId,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// TTL bump threshold
const PERSISTENT_BUMP: u32 = 6_307_200;

/// Extend TTL for a persistent storage key
fn extend_ttl(env: &Env, key: &FarmDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&FarmDataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage()
        .persistent()
        .set(&FarmDataKey::Initialized, &true);
    extend_ttl(env, &FarmDataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &FarmConfig) {
    env.storage().persistent().set(&FarmDataKey::Config, config);
    extend_ttl(env, &FarmDataKey::Config);
}

pub fn read_config(env: &Env) -> FarmConfig {
    env.storage()
        .persistent()
        .get(&FarmDataKey::Config)
        .expect("farm not initialized")
}

// ============================================================
// EMISSION SCHEDULE
// ============================================================

pub fn write_schedule(env: &Env, schedule: &EmissionSchedule) {
    env.storage()
        .persistent()
        .set(&FarmDataKey::Schedule, schedule);
    extend_ttl(env, &FarmDataKey::Schedule);
}

pub fn read_schedule(env: &Env) -> EmissionSchedule {
    env.storage()
        .persistent()
        .get(&FarmDataKey::Schedule)
        .unwrap_or(EmissionSchedule {
            rate_per_second: 0,
            period_end: 0,
            total_weight: 0,
        })
}

pub fn write_pending_upkeep(env: &Env, pending: &PendingUpkeep) {
    env.storage()
        .persistent()
        .set(&FarmDataKey::PendingUpkeep, pending);
    extend_ttl(env, &FarmDataKey::PendingUpkeep);
}

pub fn read_pending_upkeep(env: &Env) -> Option<PendingUpkeep> {
    env.storage().persistent().get(&FarmDataKey::PendingUpkeep)
}

pub fn clear_pending_upkeep(env: &Env) {
    env.storage().persistent().remove(&FarmDataKey::PendingUpkeep);
}

// ============================================================
// POOL REGISTRY
// ============================================================

pub fn read_pool_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&FarmDataKey::PoolCount)
        .unwrap_or(0)
}

pub fn write_pool_count(env: &Env, count: u32) {
    env.storage()
        .persistent()
        .set(&FarmDataKey::PoolCount, &count);
    extend_ttl(env, &FarmDataKey::PoolCount);
}

pub fn read_pool(env: &Env, pool_id: u32) -> Option<PoolRewardState> {
    let key = FarmDataKey::Pool(pool_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_ttl(env, &key);
    }
    result
}

pub fn write_pool(env: &Env, pool_id: u32, pool: &PoolRewardState) {
    let key = FarmDataKey::Pool(pool_id);
    env.storage().persistent().set(&key, pool);
    extend_ttl(env, &key);
}

// ============================================================
// TICK REWARD LEDGER
// ============================================================

pub fn read_tick_info(env: &Env, pool_id: u32, tick: i32) -> RewardTickInfo {
    env.storage()
        .persistent()
        .get(&FarmDataKey::Tick(pool_id, tick))
        .unwrap_or_default()
}

pub fn write_tick_info(env: &Env, pool_id: u32, tick: i32, info: &RewardTickInfo) {
    let key = FarmDataKey::Tick(pool_id, tick);
    if info.liquidity_gross == 0 && !info.initialized {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, info);
        extend_ttl(env, &key);
    }
}

// ============================================================
// POSITIONS
// ============================================================

pub fn next_position_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .persistent()
        .get(&FarmDataKey::NextPositionId)
        .unwrap_or(1);
    env.storage()
        .persistent()
        .set(&FarmDataKey::NextPositionId, &(id + 1));
    extend_ttl(env, &FarmDataKey::NextPositionId);
    id
}

pub fn read_position(env: &Env, position_id: u64) -> Option<StakedPosition> {
    let key = FarmDataKey::Position(position_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_ttl(env, &key);
    }
    result
}

pub fn write_position(env: &Env, position_id: u64, pos: &StakedPosition) {
    let key = FarmDataKey::Position(position_id);
    env.storage().persistent().set(&key, pos);
    extend_ttl(env, &key);
}
