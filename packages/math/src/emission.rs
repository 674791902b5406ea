// Emission Math
//
// Pure arithmetic for the farm controller's reward accounting:
// a pool's share of the global emission over an interval, and the
// Q64.64 growth delta that share produces per unit of active liquidity.

use soroban_sdk::Env;
use crate::constants::Q64;
use crate::q64::{mul_div, mul_div_rem};

/// Raw reward emitted to one pool over `elapsed` seconds.
///
/// emission = rate_per_second * elapsed * weight / total_weight
///
/// Truncates toward zero. The caller carries the per-liquidity division
/// remainder separately (see `reward_growth_delta_x64`), so the only loss
/// here is the sub-unit share of the weight split.
pub fn pool_emission(
    env: &Env,
    rate_per_second: u128,
    elapsed: u64,
    weight: u32,
    total_weight: u64,
) -> u128 {
    if rate_per_second == 0 || elapsed == 0 || weight == 0 || total_weight == 0 {
        return 0;
    }

    let rate_x_elapsed = rate_per_second.saturating_mul(elapsed as u128);
    mul_div(env, rate_x_elapsed, weight as u128, total_weight as u128)
}

/// Convert a raw emission amount into a Q64.64 reward-growth delta.
///
/// numerator = emission * 2^64 + residual_x64
/// delta     = numerator / liquidity
/// residual' = numerator % liquidity
///
/// The residual is real value below one growth unit; it is carried into the
/// next interval instead of being discarded, so no emission is lost to
/// truncation while liquidity stays nonzero.
pub fn reward_growth_delta_x64(
    env: &Env,
    emission: u128,
    residual_x64: u128,
    liquidity: u128,
) -> (u128, u128) {
    if liquidity == 0 { panic!("reward_growth_delta_x64: zero liquidity"); }

    let (quotient, remainder) = mul_div_rem(env, emission, Q64, liquidity);

    // Fold in the carried residual. Both terms are below a (possibly
    // different, earlier) liquidity value, so the sum cannot overflow.
    let carry = remainder + residual_x64;
    (
        quotient.saturating_add(carry / liquidity),
        carry % liquidity,
    )
}

/// Reward owed for a growth-inside delta, in raw token units.
///
/// owed = liquidity * delta_x64 / 2^64
pub fn reward_from_growth_delta(liquidity: u128, delta_x64: u128) -> u128 {
    liquidity
        .checked_mul(delta_x64)
        .map(|product| product >> 64)
        .unwrap_or(0)
}
