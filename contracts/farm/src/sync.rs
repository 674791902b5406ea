// Pool synchronization engine
//
// Everything here enforces the sync-before-mutate rule: a pool's
// accumulator is brought up to "now" before any weight, rate, liquidity,
// or position state is allowed to change.

use soroban_sdk::Env;

use belugafarm_math::{pool_emission, reward_growth_delta_x64};
use belugafarm_tick::get_reward_growth_inside;

use crate::events::emit_upkeep;
use crate::storage::{
    clear_pending_upkeep, read_pool, read_pool_count, read_schedule, read_tick_info,
    write_pool, write_schedule,
};
use crate::types::{EmissionSchedule, PendingUpkeep, PoolRewardState};

/// Advance a pool's reward accumulator to `now`
///
/// Out-of-order or duplicate calls (`now <= last_update_time`) are no-ops.
/// Emission accrues only inside the schedule's period and only for enabled,
/// weighted pools; an interval with zero active liquidity forfeits its
/// emission to the audit ledger instead of dividing by zero.
pub fn accrue_pool(env: &Env, pool: &mut PoolRewardState, schedule: &EmissionSchedule, now: u64) {
    if now <= pool.last_update_time {
        return;
    }

    let start = pool.last_update_time;
    pool.last_update_time = now;

    if !pool.enabled
        || pool.weight == 0
        || schedule.total_weight == 0
        || schedule.rate_per_second == 0
    {
        return;
    }

    let end = if now < schedule.period_end { now } else { schedule.period_end };
    if end <= start {
        return;
    }

    let elapsed = end - start;
    let emission = pool_emission(
        env,
        schedule.rate_per_second,
        elapsed,
        pool.weight,
        schedule.total_weight,
    );
    if emission == 0 {
        return;
    }

    if pool.active_liquidity > 0 {
        let (delta, residual) = reward_growth_delta_x64(
            env,
            emission,
            pool.reward_residual_x64,
            pool.active_liquidity as u128,
        );
        pool.reward_growth_global_x64 = pool.reward_growth_global_x64.wrapping_add(delta);
        pool.reward_residual_x64 = residual;
    } else {
        pool.forfeited = pool.forfeited.saturating_add(emission);
    }
}

/// Accrue every registered pool to `now` under the given schedule
///
/// Weight and rate changes call this first so no pool accrues at stale
/// parameters relative to the others; skipping a pool here would
/// misattribute reward across the boundary with no way to catch up later.
pub fn sync_all_pools(env: &Env, schedule: &EmissionSchedule, now: u64) {
    let count = read_pool_count(env);
    for pool_id in 1..=count {
        if let Some(mut pool) = read_pool(env, pool_id) {
            accrue_pool(env, &mut pool, schedule, now);
            write_pool(env, pool_id, &pool);
        }
    }
}

/// Install a staged rate change whose effective time has passed
///
/// Two-phase: every pool is synced to the boundary under the old rate,
/// then the new rate and period are swapped in atomically. Returns the
/// schedule in force at `now`.
pub fn apply_pending_upkeep(
    env: &Env,
    pending: Option<PendingUpkeep>,
    now: u64,
) -> EmissionSchedule {
    let mut schedule = read_schedule(env);

    if let Some(pending) = pending {
        if pending.effective_at <= now {
            sync_all_pools(env, &schedule, pending.effective_at);

            schedule.rate_per_second = pending.rate_per_second;
            schedule.period_end = pending.effective_at + pending.duration;
            write_schedule(env, &schedule);
            clear_pending_upkeep(env);

            emit_upkeep(env, schedule.rate_per_second, schedule.period_end);
        }
    }

    schedule
}

/// Growth-global a sync at `now` would produce, without mutating anything
///
/// Mirrors `apply_pending_upkeep` + `accrue_pool` on a scratch copy so that
/// read-only queries match exactly what a subsequent harvest would settle.
pub fn preview_growth_global(
    env: &Env,
    pool: &PoolRewardState,
    schedule: &EmissionSchedule,
    pending: Option<PendingUpkeep>,
    now: u64,
) -> u128 {
    let mut scratch = pool.clone();

    match pending {
        Some(pending) if pending.effective_at <= now => {
            accrue_pool(env, &mut scratch, schedule, pending.effective_at);
            let staged = EmissionSchedule {
                rate_per_second: pending.rate_per_second,
                period_end: pending.effective_at + pending.duration,
                total_weight: schedule.total_weight,
            };
            accrue_pool(env, &mut scratch, &staged, now);
        }
        _ => accrue_pool(env, &mut scratch, schedule, now),
    }

    scratch.reward_growth_global_x64
}

/// Reward growth inside a range, reading this pool's tick ledger
pub fn growth_inside(
    env: &Env,
    pool_id: u32,
    lower_tick: i32,
    upper_tick: i32,
    current_tick: i32,
    reward_growth_global_x64: u128,
) -> u128 {
    get_reward_growth_inside(
        env,
        |e, t| read_tick_info(e, pool_id, t),
        lower_tick,
        upper_tick,
        current_tick,
        reward_growth_global_x64,
    )
}
