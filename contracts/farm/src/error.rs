// Error handling module:
// - Uses contracterror derive macro for typed errors
// - Numbered ranges grouped by category
// - Configuration errors are rejected synchronously with no state mutated

use soroban_sdk::contracterror;

/// Contract-level errors returned from farm operations
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FarmError {
    // Initialization errors (100-199)
    /// Farm has already been initialized
    AlreadyInitialized = 100,
    /// Farm has not been initialized
    NotInitialized = 101,

    // Configuration errors (200-299)
    /// No pool registered under this id
    UnknownPool = 200,
    /// Invalid tick range: lower must be < upper and within bounds
    InvalidTickRange = 201,
    /// Nonzero rate with zero total weight
    ZeroTotalWeight = 202,
    /// Underlying pool is already registered
    DuplicatePool = 203,
    /// Pool weight above the allowed maximum
    InvalidWeight = 204,
    /// Pool already in the requested enabled/disabled state
    PoolStateUnchanged = 205,
    /// Upkeep duration must be positive
    InvalidDuration = 206,

    // Liquidity errors (400-499)
    /// Liquidity amount must be positive
    InvalidLiquidityAmount = 400,
    /// Unstake amount exceeds the position's liquidity
    InsufficientLiquidity = 401,
    /// No position stored under this id
    PositionNotFound = 402,
}
