// Reward Tick Update and Crossing Logic

use soroban_sdk::Env;
use crate::types::RewardTickInfo;

/// Update a tick when staked liquidity is added or removed
///
/// Seeds `reward_growth_outside` on first initialization: a tick at or
/// below the current tick starts with the full global growth (everything
/// so far happened "below" it), a tick above starts at zero. This mirror
/// convention is what makes the inside subtraction in `growth.rs` correct
/// regardless of when the tick was created.
pub fn update_reward_tick(
    env: &Env,
    read_tick: impl Fn(&Env, i32) -> RewardTickInfo,
    write_tick: impl Fn(&Env, i32, &RewardTickInfo),
    tick: i32,
    current_tick: i32,
    liquidity_delta: i128,
    reward_growth_global_x64: u128,
    upper: bool,
) -> bool {
    let mut info = read_tick(env, tick);

    let liquidity_gross_before = info.liquidity_gross;
    let liquidity_gross_after = if liquidity_delta > 0 {
        liquidity_gross_before.saturating_add(liquidity_delta)
    } else {
        liquidity_gross_before.saturating_sub(liquidity_delta.abs())
    };

    let flipped = (liquidity_gross_after == 0) != (liquidity_gross_before == 0);

    if liquidity_gross_before == 0 && liquidity_gross_after > 0 {
        if current_tick >= tick {
            info.reward_growth_outside_x64 = reward_growth_global_x64;
        } else {
            info.reward_growth_outside_x64 = 0;
        }
        info.initialized = true;
    }

    info.liquidity_gross = liquidity_gross_after;

    if upper {
        info.liquidity_net = info.liquidity_net.saturating_sub(liquidity_delta);
    } else {
        info.liquidity_net = info.liquidity_net.saturating_add(liquidity_delta);
    }

    if liquidity_gross_after == 0 {
        info.initialized = false;
    }

    write_tick(env, tick, &info);

    flipped
}

/// Flip a tick's outside growth as the price crosses it
///
/// Must be invoked exactly once per crossing, in the same transaction as
/// the price-moving trade, before any position reads the tick. Returns the
/// tick's `liquidity_net` so the caller can adjust active liquidity.
pub fn cross_reward_tick(
    env: &Env,
    read_tick: impl Fn(&Env, i32) -> RewardTickInfo,
    write_tick: impl Fn(&Env, i32, &RewardTickInfo),
    tick: i32,
    reward_growth_global_x64: u128,
) -> i128 {
    let mut info = read_tick(env, tick);

    info.reward_growth_outside_x64 =
        reward_growth_global_x64.wrapping_sub(info.reward_growth_outside_x64);

    write_tick(env, tick, &info);

    info.liquidity_net
}
