use soroban_sdk::{contracttype, Address};

/// A staked range-bound liquidity position
///
/// `liquidity == 0` means the position is logically unstaked; it keeps its
/// `unclaimed` balance and can be restaked under the same id.
#[contracttype]
#[derive(Clone, Debug)]
pub struct StakedPosition {
    pub owner: Address,
    pub pool_id: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: i128,
    /// Reward growth inside the range at the last settlement (Q64.64)
    pub reward_growth_inside_last_x64: u128,
    /// Accrued-but-unpaid reward, raw token units
    pub unclaimed: u128,
}
