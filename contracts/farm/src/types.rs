// Farm contract types

use soroban_sdk::{contracttype, Address};

/// Immutable farm configuration
#[contracttype]
#[derive(Clone, Debug)]
pub struct FarmConfig {
    /// Administrator allowed to manage pools and the emission schedule
    pub admin: Address,
    /// Token paid out by harvest
    pub reward_token: Address,
}

/// Per-pool reward accounting state
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolRewardState {
    /// Underlying AMM pool; the only address allowed to report crossings
    pub underlying: Address,
    /// Allocation weight (share of the global emission)
    pub weight: u32,
    /// Disabled pools accrue nothing; their weight leaves the total
    pub enabled: bool,
    /// Mirror of the underlying pool's current tick
    pub current_tick: i32,
    /// Staked liquidity whose range contains the current tick
    pub active_liquidity: i128,
    /// Cumulative reward per unit of active liquidity (Q64.64, wrapping)
    pub reward_growth_global_x64: u128,
    /// Truncation remainder carried into the next accrual interval
    pub reward_residual_x64: u128,
    /// Reward emitted while no liquidity was in range; auditable, not claimable
    pub forfeited: u128,
    /// Wall-clock time of the last accrual
    pub last_update_time: u64,
}

/// Global emission-rate policy
#[contracttype]
#[derive(Clone, Debug)]
pub struct EmissionSchedule {
    /// Raw reward units emitted per second across all pools
    pub rate_per_second: u128,
    /// Emission stops here until the next upkeep
    pub period_end: u64,
    /// Sum of enabled pools' weights
    pub total_weight: u64,
}

/// A staged rate change, applied once any operation observes
/// `effective_at` in the past
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingUpkeep {
    pub rate_per_second: u128,
    pub duration: u64,
    pub effective_at: u64,
}
