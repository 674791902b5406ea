#![no_std]

//! # BelugaFarm
//!
//! Reward farming for concentrated-liquidity positions.
//!
//! ## Responsibilities:
//! 1. Pool registry with allocation weights and a global emission schedule
//! 2. Per-pool reward-growth accumulators fed by elapsed time
//! 3. Per-tick reward ledger kept current by pool crossing callbacks
//! 4. Position lifecycle (stake / unstake / harvest) with O(1) settlement
//!
//! The underlying AMM pool executes swaps and owns tick math; this contract
//! only mirrors its current tick and the staked in-range liquidity, updated
//! through `notify_tick_crossed`.

use soroban_sdk::{contract, contractimpl, token, Address, Env, Symbol, Val, Vec};

use belugafarm_math::{i128_to_u128_safe, u128_to_i128_saturating, MAX_POOL_WEIGHT, MIN_STAKE_LIQUIDITY};
use belugafarm_position::{
    calculate_pending_reward, modify_stake, settle_position, validate_range, StakedPosition,
};
use belugafarm_tick::{cross_reward_tick, update_reward_tick};

mod error;
mod events;
mod storage;
mod sync;
pub mod types;

pub use error::FarmError;
use events::*;
use storage::*;
use sync::*;
use types::{EmissionSchedule, FarmConfig, PendingUpkeep, PoolRewardState};

#[contract]
pub struct BelugaFarm;

#[contractimpl]
impl BelugaFarm {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the farm
    ///
    /// # Arguments
    /// * `admin` - Administrator for pool and schedule management
    /// * `reward_token` - Token paid out by harvest
    pub fn initialize(env: Env, admin: Address, reward_token: Address) -> Result<(), FarmError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(FarmError::AlreadyInitialized);
        }

        let config = FarmConfig {
            admin: admin.clone(),
            reward_token: reward_token.clone(),
        };
        write_config(&env, &config);
        write_schedule(
            &env,
            &EmissionSchedule {
                rate_per_second: 0,
                period_end: 0,
                total_weight: 0,
            },
        );
        set_initialized(&env);

        emit_farm_initialized(&env, &admin, &reward_token);

        Ok(())
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Register a concentrated-liquidity pool for farming
    ///
    /// Reads the pool's current tick once; afterwards the mirror is kept
    /// current through `notify_tick_crossed`. Pool ids start at 1.
    pub fn add_pool(env: Env, underlying: Address, initial_weight: u32) -> Result<u32, FarmError> {
        if !is_initialized(&env) {
            return Err(FarmError::NotInitialized);
        }
        let config = read_config(&env);
        config.admin.require_auth();

        if initial_weight > MAX_POOL_WEIGHT {
            return Err(FarmError::InvalidWeight);
        }

        let count = read_pool_count(&env);
        for pool_id in 1..=count {
            if let Some(existing) = read_pool(&env, pool_id) {
                if existing.underlying == underlying {
                    return Err(FarmError::DuplicatePool);
                }
            }
        }

        let now = env.ledger().timestamp();
        let mut schedule = apply_pending_upkeep(&env, read_pending_upkeep(&env), now);

        // Every pool must be current before total_weight changes
        sync_all_pools(&env, &schedule, now);

        let args: Vec<Val> = Vec::new(&env);
        let current_tick: i32 =
            env.invoke_contract(&underlying, &Symbol::new(&env, "get_current_tick"), args);

        let pool_id = count + 1;
        write_pool_count(&env, pool_id);

        schedule.total_weight += initial_weight as u64;
        write_schedule(&env, &schedule);

        let pool = PoolRewardState {
            underlying: underlying.clone(),
            weight: initial_weight,
            enabled: true,
            current_tick,
            active_liquidity: 0,
            reward_growth_global_x64: 0,
            reward_residual_x64: 0,
            forfeited: 0,
            last_update_time: now,
        };
        write_pool(&env, pool_id, &pool);

        emit_pool_added(&env, pool_id, &underlying, initial_weight, current_tick);

        Ok(pool_id)
    }

    /// Change a pool's allocation weight
    ///
    /// Two-phase: sync every pool under the old weights, then swap in the
    /// new weight and total atomically.
    pub fn set_weight(env: Env, pool_id: u32, new_weight: u32) -> Result<(), FarmError> {
        let config = read_config(&env);
        config.admin.require_auth();

        if new_weight > MAX_POOL_WEIGHT {
            return Err(FarmError::InvalidWeight);
        }

        let now = env.ledger().timestamp();
        let mut schedule = apply_pending_upkeep(&env, read_pending_upkeep(&env), now);

        let pool = read_pool(&env, pool_id).ok_or(FarmError::UnknownPool)?;

        let new_total = if pool.enabled {
            schedule.total_weight - pool.weight as u64 + new_weight as u64
        } else {
            schedule.total_weight
        };

        if new_total == 0 && schedule.rate_per_second > 0 && schedule.period_end > now {
            return Err(FarmError::ZeroTotalWeight);
        }

        sync_all_pools(&env, &schedule, now);

        // Re-read: sync_all_pools persisted a fresher accumulator
        let mut pool = read_pool(&env, pool_id).ok_or(FarmError::UnknownPool)?;
        let old_weight = pool.weight;
        pool.weight = new_weight;
        write_pool(&env, pool_id, &pool);

        schedule.total_weight = new_total;
        write_schedule(&env, &schedule);

        emit_weight_set(&env, pool_id, old_weight, new_weight, new_total);

        Ok(())
    }

    /// Install or stage a new emission rate
    ///
    /// `apply_now`: syncs every pool to now under the old rate, then sets
    /// `rate_per_second = new_rate` and `period_end = now + duration`.
    /// Otherwise the change is staged to take effect when the current period
    /// ends, and is applied automatically by the first operation that runs
    /// past that boundary.
    pub fn upkeep(
        env: Env,
        new_rate_per_second: u128,
        duration: u64,
        apply_now: bool,
    ) -> Result<(), FarmError> {
        let config = read_config(&env);
        config.admin.require_auth();

        if duration == 0 {
            return Err(FarmError::InvalidDuration);
        }

        let now = env.ledger().timestamp();
        let mut schedule = apply_pending_upkeep(&env, read_pending_upkeep(&env), now);

        if schedule.total_weight == 0 && new_rate_per_second > 0 {
            return Err(FarmError::ZeroTotalWeight);
        }

        if apply_now {
            sync_all_pools(&env, &schedule, now);

            schedule.rate_per_second = new_rate_per_second;
            schedule.period_end = now + duration;
            write_schedule(&env, &schedule);

            // A previously staged change is superseded
            clear_pending_upkeep(&env);

            emit_upkeep(&env, new_rate_per_second, schedule.period_end);
        } else {
            let effective_at = if schedule.period_end > now {
                schedule.period_end
            } else {
                now
            };
            let pending = PendingUpkeep {
                rate_per_second: new_rate_per_second,
                duration,
                effective_at,
            };
            write_pending_upkeep(&env, &pending);

            emit_upkeep_staged(&env, new_rate_per_second, duration, effective_at);
        }

        Ok(())
    }

    /// Stop a pool's emission accrual; `unclaimed` balances are untouched
    pub fn disable_pool(env: Env, pool_id: u32) -> Result<(), FarmError> {
        Self::set_pool_enabled(&env, pool_id, false)
    }

    /// Resume a pool's emission accrual
    pub fn enable_pool(env: Env, pool_id: u32) -> Result<(), FarmError> {
        Self::set_pool_enabled(&env, pool_id, true)
    }

    // ========================================================
    // SYNCHRONIZATION
    // ========================================================

    /// Bring the given pools' accumulators up to now; callable by anyone
    pub fn update_pools(env: Env, pool_ids: Vec<u32>) -> Result<(), FarmError> {
        let now = env.ledger().timestamp();
        let schedule = apply_pending_upkeep(&env, read_pending_upkeep(&env), now);

        for pool_id in pool_ids.iter() {
            let mut pool = read_pool(&env, pool_id).ok_or(FarmError::UnknownPool)?;
            accrue_pool(&env, &mut pool, &schedule, now);
            write_pool(&env, pool_id, &pool);
        }

        Ok(())
    }

    /// Crossing callback from the underlying pool
    ///
    /// Invoked synchronously during the price-moving trade, once per crossed
    /// tick. Accrues the pool under the pre-crossing liquidity, flips the
    /// tick's outside growth, then applies the tick's net liquidity.
    /// `lte` is true when the price is moving down through `tick`.
    pub fn notify_tick_crossed(
        env: Env,
        pool_id: u32,
        tick: i32,
        lte: bool,
    ) -> Result<(), FarmError> {
        let now = env.ledger().timestamp();
        let schedule = apply_pending_upkeep(&env, read_pending_upkeep(&env), now);

        let mut pool = read_pool(&env, pool_id).ok_or(FarmError::UnknownPool)?;
        pool.underlying.require_auth();

        accrue_pool(&env, &mut pool, &schedule, now);

        let liquidity_net = cross_reward_tick(
            &env,
            |e, t| read_tick_info(e, pool_id, t),
            |e, t, info| write_tick_info(e, pool_id, t, info),
            tick,
            pool.reward_growth_global_x64,
        );

        if lte {
            pool.active_liquidity = pool.active_liquidity.saturating_sub(liquidity_net);
            pool.current_tick = tick - 1;
        } else {
            pool.active_liquidity = pool.active_liquidity.saturating_add(liquidity_net);
            pool.current_tick = tick;
        }

        write_pool(&env, pool_id, &pool);

        emit_tick_crossed(&env, pool_id, tick, pool.current_tick, pool.active_liquidity);

        Ok(())
    }

    // ========================================================
    // POSITION LIFECYCLE
    // ========================================================

    /// Stake liquidity over a tick range; returns the new position id
    pub fn stake(
        env: Env,
        owner: Address,
        pool_id: u32,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: i128,
    ) -> Result<u64, FarmError> {
        owner.require_auth();

        validate_range(tick_lower, tick_upper).map_err(|_| FarmError::InvalidTickRange)?;
        if liquidity < MIN_STAKE_LIQUIDITY {
            return Err(FarmError::InvalidLiquidityAmount);
        }

        let now = env.ledger().timestamp();
        let schedule = apply_pending_upkeep(&env, read_pending_upkeep(&env), now);

        let mut pool = read_pool(&env, pool_id).ok_or(FarmError::UnknownPool)?;
        accrue_pool(&env, &mut pool, &schedule, now);

        Self::add_stake_to_ticks(&env, pool_id, &mut pool, tick_lower, tick_upper, liquidity);

        // Snapshot after the ticks exist so their seeded outside values apply
        let inside = growth_inside(
            &env,
            pool_id,
            tick_lower,
            tick_upper,
            pool.current_tick,
            pool.reward_growth_global_x64,
        );

        let position_id = next_position_id(&env);
        let pos = StakedPosition {
            owner: owner.clone(),
            pool_id,
            tick_lower,
            tick_upper,
            liquidity,
            reward_growth_inside_last_x64: inside,
            unclaimed: 0,
        };
        write_position(&env, position_id, &pos);
        write_pool(&env, pool_id, &pool);

        emit_stake(&env, position_id, pool_id, &owner, liquidity, tick_lower, tick_upper);

        Ok(position_id)
    }

    /// Add liquidity to an existing position
    ///
    /// Works both for a live position and for one previously unstaked to
    /// zero; a preserved `unclaimed` balance is never reset.
    pub fn restake(env: Env, position_id: u64, liquidity: i128) -> Result<(), FarmError> {
        let mut pos = read_position(&env, position_id).ok_or(FarmError::PositionNotFound)?;
        pos.owner.require_auth();

        if liquidity < MIN_STAKE_LIQUIDITY {
            return Err(FarmError::InvalidLiquidityAmount);
        }

        let now = env.ledger().timestamp();
        let schedule = apply_pending_upkeep(&env, read_pending_upkeep(&env), now);

        let mut pool = read_pool(&env, pos.pool_id).ok_or(FarmError::UnknownPool)?;
        accrue_pool(&env, &mut pool, &schedule, now);

        // Settle under the pre-change ledger state
        let inside = growth_inside(
            &env,
            pos.pool_id,
            pos.tick_lower,
            pos.tick_upper,
            pool.current_tick,
            pool.reward_growth_global_x64,
        );
        settle_position(&mut pos, inside);

        Self::add_stake_to_ticks(
            &env,
            pos.pool_id,
            &mut pool,
            pos.tick_lower,
            pos.tick_upper,
            liquidity,
        );

        // The tick update can re-seed outside values only when the ticks had
        // been fully de-initialized, which implies the old liquidity was zero
        // and nothing further was owed; re-checkpoint against the new ledger.
        let inside_after = growth_inside(
            &env,
            pos.pool_id,
            pos.tick_lower,
            pos.tick_upper,
            pool.current_tick,
            pool.reward_growth_global_x64,
        );
        pos.reward_growth_inside_last_x64 = inside_after;
        pos.liquidity = pos.liquidity.saturating_add(liquidity);

        write_position(&env, position_id, &pos);
        write_pool(&env, pos.pool_id, &pool);

        emit_stake(
            &env,
            position_id,
            pos.pool_id,
            &pos.owner,
            liquidity,
            pos.tick_lower,
            pos.tick_upper,
        );

        Ok(())
    }

    /// Remove liquidity from a position
    ///
    /// Unstaking to zero leaves the position claimable under the same id.
    pub fn unstake(env: Env, position_id: u64, liquidity_delta: i128) -> Result<(), FarmError> {
        let mut pos = read_position(&env, position_id).ok_or(FarmError::PositionNotFound)?;
        pos.owner.require_auth();

        if liquidity_delta <= 0 {
            return Err(FarmError::InvalidLiquidityAmount);
        }
        if liquidity_delta > pos.liquidity {
            return Err(FarmError::InsufficientLiquidity);
        }

        let now = env.ledger().timestamp();
        let schedule = apply_pending_upkeep(&env, read_pending_upkeep(&env), now);

        let mut pool = read_pool(&env, pos.pool_id).ok_or(FarmError::UnknownPool)?;
        accrue_pool(&env, &mut pool, &schedule, now);

        let inside = growth_inside(
            &env,
            pos.pool_id,
            pos.tick_lower,
            pos.tick_upper,
            pool.current_tick,
            pool.reward_growth_global_x64,
        );
        modify_stake(&mut pos, -liquidity_delta, inside);

        Self::add_stake_to_ticks(
            &env,
            pos.pool_id,
            &mut pool,
            pos.tick_lower,
            pos.tick_upper,
            -liquidity_delta,
        );

        write_position(&env, position_id, &pos);
        write_pool(&env, pos.pool_id, &pool);

        emit_unstake(&env, position_id, pos.pool_id, liquidity_delta, pos.liquidity);

        Ok(())
    }

    /// Pay out a position's accrued reward
    ///
    /// Settles up to now first, so harvesting without any liquidity change
    /// still captures owed reward. Payout is capped by the farm's reward
    /// balance; the shortfall stays claimable. All accounting state is
    /// persisted before the token transfer.
    pub fn harvest(env: Env, position_id: u64) -> Result<u128, FarmError> {
        let mut pos = read_position(&env, position_id).ok_or(FarmError::PositionNotFound)?;
        pos.owner.require_auth();

        let now = env.ledger().timestamp();
        let schedule = apply_pending_upkeep(&env, read_pending_upkeep(&env), now);

        let mut pool = read_pool(&env, pos.pool_id).ok_or(FarmError::UnknownPool)?;
        accrue_pool(&env, &mut pool, &schedule, now);
        write_pool(&env, pos.pool_id, &pool);

        let inside = growth_inside(
            &env,
            pos.pool_id,
            pos.tick_lower,
            pos.tick_upper,
            pool.current_tick,
            pool.reward_growth_global_x64,
        );
        settle_position(&mut pos, inside);

        let config = read_config(&env);
        let farm_addr = env.current_contract_address();
        let balance =
            i128_to_u128_safe(token::Client::new(&env, &config.reward_token).balance(&farm_addr));

        let paid = pos.unclaimed.min(balance);
        pos.unclaimed -= paid;
        write_position(&env, position_id, &pos);

        if paid > 0 {
            token::Client::new(&env, &config.reward_token).transfer(
                &farm_addr,
                &pos.owner,
                &u128_to_i128_saturating(paid),
            );
        }

        emit_harvest(&env, position_id, &pos.owner, paid);

        Ok(paid)
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    /// Reward a harvest would pay right now
    ///
    /// Pure read: previews the accumulator (including any due staged
    /// upkeep) without persisting anything, and matches a subsequent
    /// `harvest` exactly.
    pub fn pending_reward(env: Env, position_id: u64) -> Result<u128, FarmError> {
        let pos = read_position(&env, position_id).ok_or(FarmError::PositionNotFound)?;
        let pool = read_pool(&env, pos.pool_id).ok_or(FarmError::UnknownPool)?;

        let now = env.ledger().timestamp();
        let schedule = read_schedule(&env);
        let pending = read_pending_upkeep(&env);

        let growth_global = preview_growth_global(&env, &pool, &schedule, pending, now);
        let inside = growth_inside(
            &env,
            pos.pool_id,
            pos.tick_lower,
            pos.tick_upper,
            pool.current_tick,
            growth_global,
        );

        Ok(calculate_pending_reward(&pos, inside))
    }

    /// Check if the farm is initialized
    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    /// Get the farm configuration
    pub fn get_config(env: Env) -> FarmConfig {
        read_config(&env)
    }

    /// Get the emission schedule currently in force
    pub fn get_schedule(env: Env) -> EmissionSchedule {
        read_schedule(&env)
    }

    /// Get the staged rate change, if any
    pub fn get_pending_upkeep(env: Env) -> Option<PendingUpkeep> {
        read_pending_upkeep(&env)
    }

    /// Number of registered pools
    pub fn get_pool_count(env: Env) -> u32 {
        read_pool_count(&env)
    }

    /// Full reward state for a pool
    pub fn get_pool(env: Env, pool_id: u32) -> Result<PoolRewardState, FarmError> {
        read_pool(&env, pool_id).ok_or(FarmError::UnknownPool)
    }

    /// Staked liquidity currently in range for a pool
    pub fn get_active_liquidity(env: Env, pool_id: u32) -> Result<i128, FarmError> {
        Ok(read_pool(&env, pool_id).ok_or(FarmError::UnknownPool)?.active_liquidity)
    }

    /// The farm's mirror of a pool's current tick
    pub fn get_current_tick(env: Env, pool_id: u32) -> Result<i32, FarmError> {
        Ok(read_pool(&env, pool_id).ok_or(FarmError::UnknownPool)?.current_tick)
    }

    /// A position's stored state
    pub fn get_position(env: Env, position_id: u64) -> Result<StakedPosition, FarmError> {
        read_position(&env, position_id).ok_or(FarmError::PositionNotFound)
    }

    /// Reward growth inside a range against the stored accumulator
    pub fn get_reward_growth_inside(
        env: Env,
        pool_id: u32,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Result<u128, FarmError> {
        let pool = read_pool(&env, pool_id).ok_or(FarmError::UnknownPool)?;
        Ok(growth_inside(
            &env,
            pool_id,
            tick_lower,
            tick_upper,
            pool.current_tick,
            pool.reward_growth_global_x64,
        ))
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Shared enable/disable logic; weight enters or leaves the total
    fn set_pool_enabled(env: &Env, pool_id: u32, enabled: bool) -> Result<(), FarmError> {
        let config = read_config(env);
        config.admin.require_auth();

        let now = env.ledger().timestamp();
        let mut schedule = apply_pending_upkeep(env, read_pending_upkeep(env), now);

        {
            let pool = read_pool(env, pool_id).ok_or(FarmError::UnknownPool)?;
            if pool.enabled == enabled {
                return Err(FarmError::PoolStateUnchanged);
            }
        }

        sync_all_pools(env, &schedule, now);

        let mut pool = read_pool(env, pool_id).ok_or(FarmError::UnknownPool)?;
        pool.enabled = enabled;
        if enabled {
            schedule.total_weight += pool.weight as u64;
        } else {
            schedule.total_weight -= pool.weight as u64;
        }

        write_pool(env, pool_id, &pool);
        write_schedule(env, &schedule);

        emit_pool_enabled(env, pool_id, enabled, schedule.total_weight);

        Ok(())
    }

    /// Apply a staked-liquidity delta to a position's boundary ticks and to
    /// the pool's active liquidity when the range contains the current tick
    fn add_stake_to_ticks(
        env: &Env,
        pool_id: u32,
        pool: &mut PoolRewardState,
        tick_lower: i32,
        tick_upper: i32,
        liquidity_delta: i128,
    ) {
        update_reward_tick(
            env,
            |e, t| read_tick_info(e, pool_id, t),
            |e, t, info| write_tick_info(e, pool_id, t, info),
            tick_lower,
            pool.current_tick,
            liquidity_delta,
            pool.reward_growth_global_x64,
            false,
        );

        update_reward_tick(
            env,
            |e, t| read_tick_info(e, pool_id, t),
            |e, t, info| write_tick_info(e, pool_id, t, info),
            tick_upper,
            pool.current_tick,
            liquidity_delta,
            pool.reward_growth_global_x64,
            true,
        );

        if pool.current_tick >= tick_lower && pool.current_tick < tick_upper {
            if liquidity_delta > 0 {
                pool.active_liquidity = pool.active_liquidity.saturating_add(liquidity_delta);
            } else {
                pool.active_liquidity =
                    pool.active_liquidity.saturating_sub(liquidity_delta.abs());
            }
        }
    }
}
