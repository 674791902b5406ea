// Tick Reward Ledger Types

use soroban_sdk::contracttype;

/// Reward bookkeeping stored for each initialized tick
#[contracttype]
#[derive(Clone, Debug)]
pub struct RewardTickInfo {
    /// Total staked liquidity referencing this tick
    pub liquidity_gross: i128,
    /// Net staked-liquidity change when crossing left-to-right
    pub liquidity_net: i128,
    /// Reward growth accrued while the price was on the "outside"
    /// side of this tick (Q64.64, wrapping)
    pub reward_growth_outside_x64: u128,
    /// Whether this tick is initialized
    pub initialized: bool,
}

impl Default for RewardTickInfo {
    fn default() -> Self {
        Self {
            liquidity_gross: 0,
            liquidity_net: 0,
            reward_growth_outside_x64: 0,
            initialized: false,
        }
    }
}
