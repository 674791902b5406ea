// Constants module:
// - Clear documentation for each constant
// - Grouped by functionality
// - Uses appropriate types for each constant

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Minimum valid tick value (corresponds to minimum price)
/// Price at MIN_TICK ≈ 2.94e-39
/// This is the lower bound for all tick values in the pool
pub const MIN_TICK: i32 = -887272;

/// Maximum valid tick value (corresponds to maximum price)
/// Price at MAX_TICK ≈ 3.40e+38
/// This is the upper bound for all tick values in the pool
pub const MAX_TICK: i32 = 887272;

// ============================================================
// STAKING CONSTANTS
// ============================================================

/// Minimum liquidity for a staked position
/// Prevents dust positions and ensures meaningful reward attribution
pub const MIN_STAKE_LIQUIDITY: i128 = 1;

/// Maximum allocation weight a single pool may carry
/// Keeps weight sums comfortably inside u64
pub const MAX_POOL_WEIGHT: u32 = 1_000_000;

// ============================================================
// MATH CONSTANTS
// ============================================================

/// Q64 multiplier (2^64) for fixed-point math
/// Used as the scaling factor for Q64.64 format
pub const Q64: u128 = 1u128 << 64;
