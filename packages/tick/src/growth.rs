// Reward Growth Inside a Range

use soroban_sdk::Env;
use crate::types::RewardTickInfo;

/// Reward growth accrued inside [lower_tick, upper_tick), Q64.64 wrapping.
///
/// inside = global - below(lower) - above(upper)
///
/// where below/above are read from the ticks' outside values, mirrored when
/// the current tick sits on the other side. Pure read, no mutation.
pub fn get_reward_growth_inside(
    env: &Env,
    read_tick: impl Fn(&Env, i32) -> RewardTickInfo,
    lower_tick: i32,
    upper_tick: i32,
    current_tick: i32,
    reward_growth_global_x64: u128,
) -> u128 {
    let lower_info = read_tick(env, lower_tick);
    let upper_info = read_tick(env, upper_tick);

    let growth_below = if current_tick >= lower_tick {
        lower_info.reward_growth_outside_x64
    } else {
        reward_growth_global_x64.wrapping_sub(lower_info.reward_growth_outside_x64)
    };

    let growth_above = if current_tick < upper_tick {
        upper_info.reward_growth_outside_x64
    } else {
        reward_growth_global_x64.wrapping_sub(upper_info.reward_growth_outside_x64)
    };

    reward_growth_global_x64
        .wrapping_sub(growth_below)
        .wrapping_sub(growth_above)
}
