mod common;

use common::{DEFAULT_DURATION, LIQ, RATE};
use soroban_sdk::{testutils::Address as _, Address, Env};

#[test]
fn test_stake_in_range() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = common::setup_farm(&env);
    let underlying = common::register_mock_pool(&env, 0);
    let pool_id = client.add_pool(&underlying, &1);

    let owner = Address::generate(&env);
    let pos_id = client.stake(&owner, &pool_id, &-60, &60, &LIQ);

    assert_eq!(pos_id, 1);
    let pos = client.get_position(&pos_id);
    assert_eq!(pos.owner, owner);
    assert_eq!(pos.pool_id, pool_id);
    assert_eq!(pos.tick_lower, -60);
    assert_eq!(pos.tick_upper, 60);
    assert_eq!(pos.liquidity, LIQ);
    assert_eq!(pos.unclaimed, 0);

    // current tick 0 is inside [-60, 60)
    assert_eq!(client.get_active_liquidity(&pool_id), LIQ);
}

#[test]
fn test_stake_out_of_range_is_inactive() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = common::setup_farm(&env);
    let underlying = common::register_mock_pool(&env, 0);
    let pool_id = client.add_pool(&underlying, &1);

    let owner = Address::generate(&env);
    client.stake(&owner, &pool_id, &120, &240, &LIQ);

    assert_eq!(client.get_active_liquidity(&pool_id), 0);
}

#[test]
fn test_stake_at_upper_boundary_is_inactive() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = common::setup_farm(&env);
    let underlying = common::register_mock_pool(&env, 60);
    let pool_id = client.add_pool(&underlying, &1);

    // ranges are half-open: current tick == upper means out of range
    let owner = Address::generate(&env);
    client.stake(&owner, &pool_id, &-60, &60, &LIQ);

    assert_eq!(client.get_active_liquidity(&pool_id), 0);
}

#[test]
#[should_panic(expected = "#201")]
fn test_stake_inverted_range() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = common::setup_farm(&env);
    let underlying = common::register_mock_pool(&env, 0);
    let pool_id = client.add_pool(&underlying, &1);

    let owner = Address::generate(&env);
    client.stake(&owner, &pool_id, &60, &-60, &LIQ);
}

#[test]
#[should_panic(expected = "#201")]
fn test_stake_tick_out_of_bounds() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = common::setup_farm(&env);
    let underlying = common::register_mock_pool(&env, 0);
    let pool_id = client.add_pool(&underlying, &1);

    let owner = Address::generate(&env);
    client.stake(&owner, &pool_id, &-887_273, &0, &LIQ);
}

#[test]
#[should_panic(expected = "#400")]
fn test_stake_zero_liquidity() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = common::setup_farm(&env);
    let underlying = common::register_mock_pool(&env, 0);
    let pool_id = client.add_pool(&underlying, &1);

    let owner = Address::generate(&env);
    client.stake(&owner, &pool_id, &-60, &60, &0);
}

#[test]
#[should_panic(expected = "#200")]
fn test_stake_unknown_pool() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = common::setup_farm(&env);

    let owner = Address::generate(&env);
    client.stake(&owner, &99, &-60, &60, &LIQ);
}

#[test]
#[should_panic]
fn test_stake_requires_owner_auth() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = common::setup_farm(&env);
    let underlying = common::register_mock_pool(&env, 0);
    let pool_id = client.add_pool(&underlying, &1);

    let owner = Address::generate(&env);
    env.mock_auths(&[]);
    client.stake(&owner, &pool_id, &-60, &60, &LIQ);
}

#[test]
fn test_unstake_partial() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = common::setup_farm(&env);
    let underlying = common::register_mock_pool(&env, 0);
    let pool_id = client.add_pool(&underlying, &1);

    let owner = Address::generate(&env);
    let pos_id = client.stake(&owner, &pool_id, &-60, &60, &LIQ);

    client.unstake(&pos_id, &400_000);

    assert_eq!(client.get_position(&pos_id).liquidity, 600_000);
    assert_eq!(client.get_active_liquidity(&pool_id), 600_000);
}

#[test]
fn test_unstake_to_zero_keeps_position() {
    let env = Env::default();
    env.mock_all_auths();
    common::set_time(&env, 0);

    let (client, _, _) = common::setup_farm(&env);
    let underlying = common::register_mock_pool(&env, 0);
    let pool_id = client.add_pool(&underlying, &1);

    let owner = Address::generate(&env);
    let pos_id = client.stake(&owner, &pool_id, &-60, &60, &LIQ);
    client.upkeep(&RATE, &DEFAULT_DURATION, &true);

    common::set_time(&env, 1000);
    client.unstake(&pos_id, &LIQ);

    // fully unstaked, but the accrued reward stays claimable under the id
    let pos = client.get_position(&pos_id);
    assert_eq!(pos.liquidity, 0);
    assert_eq!(pos.unclaimed, 1000 * RATE);
    assert_eq!(client.get_active_liquidity(&pool_id), 0);
}

#[test]
#[should_panic(expected = "#401")]
fn test_unstake_more_than_staked() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = common::setup_farm(&env);
    let underlying = common::register_mock_pool(&env, 0);
    let pool_id = client.add_pool(&underlying, &1);

    let owner = Address::generate(&env);
    let pos_id = client.stake(&owner, &pool_id, &-60, &60, &LIQ);

    client.unstake(&pos_id, &(LIQ + 1));
}

#[test]
#[should_panic(expected = "#400")]
fn test_unstake_non_positive_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = common::setup_farm(&env);
    let underlying = common::register_mock_pool(&env, 0);
    let pool_id = client.add_pool(&underlying, &1);

    let owner = Address::generate(&env);
    let pos_id = client.stake(&owner, &pool_id, &-60, &60, &LIQ);

    client.unstake(&pos_id, &0);
}

#[test]
#[should_panic(expected = "#402")]
fn test_unstake_unknown_position() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = common::setup_farm(&env);
    client.unstake(&99, &1);
}

#[test]
fn test_restake_grows_position() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = common::setup_farm(&env);
    let underlying = common::register_mock_pool(&env, 0);
    let pool_id = client.add_pool(&underlying, &1);

    let owner = Address::generate(&env);
    let pos_id = client.stake(&owner, &pool_id, &-60, &60, &LIQ);
    client.restake(&pos_id, &LIQ);

    assert_eq!(client.get_position(&pos_id).liquidity, 2 * LIQ);
    assert_eq!(client.get_active_liquidity(&pool_id), 2 * LIQ);
}

#[test]
fn test_late_staker_earns_no_history() {
    let env = Env::default();
    env.mock_all_auths();
    common::set_time(&env, 0);

    let (client, _, _) = common::setup_farm(&env);
    let underlying = common::register_mock_pool(&env, 0);
    let pool_id = client.add_pool(&underlying, &1);
    client.upkeep(&RATE, &DEFAULT_DURATION, &true);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let pos_a = client.stake(&alice, &pool_id, &-60, &60, &LIQ);

    // alice farms alone for 1000s, then bob joins with equal liquidity
    common::set_time(&env, 1000);
    let pos_b = client.stake(&bob, &pool_id, &-60, &60, &LIQ);

    common::set_time(&env, 2000);
    assert_eq!(client.pending_reward(&pos_a), 1500 * RATE);
    assert_eq!(client.pending_reward(&pos_b), 500 * RATE);
}
