// BelugaFarm Math Package

#![no_std]

pub mod constants;
pub mod q64;
pub mod emission;

// Re-export commonly used items from constants
pub use constants::*;

// Re-export Q64 arithmetic functions
pub use q64::{
    mul_div,
    mul_div_rem,
    i128_to_u128_safe,
    u128_to_i128_saturating,
};

// Re-export emission math
pub use emission::{pool_emission, reward_growth_delta_x64, reward_from_growth_delta};

/// Check if a tick is within valid range
#[inline]
pub fn is_valid_tick(tick: i32) -> bool {
    tick >= MIN_TICK && tick <= MAX_TICK
}
