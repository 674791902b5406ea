// Position Settlement Logic

use belugafarm_math::{is_valid_tick, reward_from_growth_delta};
use crate::types::StakedPosition;

/// Credit a position's elapsed reward and advance its checkpoint
///
/// This is the core checkpoint-differencing pattern:
/// 1. delta = inside_now - inside_last (wrapping)
/// 2. unclaimed += liquidity * delta / 2^64
/// 3. inside_last = inside_now
///
/// The checkpoint is never advanced without the delta being credited, and
/// callers must never change `liquidity` or range without settling first.
pub fn settle_position(pos: &mut StakedPosition, reward_growth_inside_x64: u128) {
    if pos.liquidity > 0 {
        let delta = reward_growth_inside_x64.wrapping_sub(pos.reward_growth_inside_last_x64);
        let earned = reward_from_growth_delta(pos.liquidity as u128, delta);
        pos.unclaimed = pos.unclaimed.saturating_add(earned);
    }

    pos.reward_growth_inside_last_x64 = reward_growth_inside_x64;
}

/// Settle, then apply a liquidity change
pub fn modify_stake(
    pos: &mut StakedPosition,
    liquidity_delta: i128,
    reward_growth_inside_x64: u128,
) {
    settle_position(pos, reward_growth_inside_x64);

    if liquidity_delta > 0 {
        pos.liquidity = pos.liquidity.saturating_add(liquidity_delta);
    } else if liquidity_delta < 0 {
        pos.liquidity = pos.liquidity.saturating_sub(liquidity_delta.abs());
    }
}

/// Reward a harvest would pay right now, without mutating the position
pub fn calculate_pending_reward(pos: &StakedPosition, reward_growth_inside_x64: u128) -> u128 {
    let accrued = if pos.liquidity > 0 {
        let delta = reward_growth_inside_x64.wrapping_sub(pos.reward_growth_inside_last_x64);
        reward_from_growth_delta(pos.liquidity as u128, delta)
    } else {
        0
    };

    pos.unclaimed.saturating_add(accrued)
}

/// Check if a position currently earns reward
#[inline]
pub fn is_staked(pos: &StakedPosition) -> bool {
    pos.liquidity > 0
}

/// Check if a position is empty (no liquidity and nothing claimable)
#[inline]
pub fn is_empty(pos: &StakedPosition) -> bool {
    pos.liquidity == 0 && pos.unclaimed == 0
}

/// Validate a position's range bounds
pub fn validate_range(lower: i32, upper: i32) -> Result<(), &'static str> {
    if lower >= upper {
        return Err("lower tick must be less than upper tick");
    }

    if !is_valid_tick(lower) || !is_valid_tick(upper) {
        return Err("tick out of valid range");
    }

    Ok(())
}
