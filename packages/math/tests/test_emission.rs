use belugafarm_math::constants::Q64;
use belugafarm_math::emission::*;
use soroban_sdk::Env;

// ============================================================
// POOL EMISSION TESTS
// ============================================================

#[test]
fn test_pool_emission_full_share() {
    let env = Env::default();

    // A pool holding the whole weight gets rate * elapsed
    assert_eq!(pool_emission(&env, 1_000_000, 3600, 1, 1), 3_600_000_000);
}

#[test]
fn test_pool_emission_weight_split() {
    let env = Env::default();

    // weights 1 and 3 of a rate of 4 units/s over 1000s
    let a = pool_emission(&env, 4, 1000, 1, 4);
    let b = pool_emission(&env, 4, 1000, 3, 4);
    assert_eq!(a, 1000);
    assert_eq!(b, 3000);
    assert_eq!(a + b, 4 * 1000);
}

#[test]
fn test_pool_emission_truncates() {
    let env = Env::default();

    // 10 * 1 * 1 / 3 = 3 (truncated)
    assert_eq!(pool_emission(&env, 10, 1, 1, 3), 3);
}

#[test]
fn test_pool_emission_degenerate_inputs() {
    let env = Env::default();

    assert_eq!(pool_emission(&env, 0, 1000, 1, 1), 0);
    assert_eq!(pool_emission(&env, 1000, 0, 1, 1), 0);
    assert_eq!(pool_emission(&env, 1000, 1000, 0, 1), 0);
    assert_eq!(pool_emission(&env, 1000, 1000, 1, 0), 0);
}

#[test]
fn test_pool_emission_large_rate() {
    let env = Env::default();

    // 1e18 units/s over a year, half the weight
    let rate = 1_000_000_000_000_000_000u128;
    let year = 31_536_000u64;
    let emission = pool_emission(&env, rate, year, 1, 2);
    assert_eq!(emission, rate * (year as u128) / 2);
}

// ============================================================
// GROWTH DELTA TESTS
// ============================================================

#[test]
fn test_growth_delta_exact_division() {
    let env = Env::default();

    // 4_096 units over 1_024 liquidity: 4 per unit in Q64.64
    let (delta, residual) = reward_growth_delta_x64(&env, 4096, 0, 1024);
    assert_eq!(delta, 4 * Q64);
    assert_eq!(residual, 0);
}

#[test]
fn test_growth_delta_carries_residual() {
    let env = Env::default();

    // 10 over 3: quotient truncates, remainder is carried
    let (delta, residual) = reward_growth_delta_x64(&env, 10, 0, 3);
    assert_eq!(delta, 10 * Q64 / 3);
    assert_eq!(residual, 10 * Q64 % 3);
    assert!(residual < 3);
}

#[test]
fn test_growth_delta_residual_reenters() {
    let env = Env::default();

    // Splitting an emission into two intervals with the residual carried
    // forward loses nothing against doing it in one step
    let liquidity = 7u128;
    let (d1, r1) = reward_growth_delta_x64(&env, 5, 0, liquidity);
    let (d2, r2) = reward_growth_delta_x64(&env, 5, r1, liquidity);

    let (single, r_single) = reward_growth_delta_x64(&env, 10, 0, liquidity);
    assert_eq!(d1 + d2, single);
    assert_eq!(r2, r_single);
}

#[test]
#[should_panic(expected = "zero liquidity")]
fn test_growth_delta_zero_liquidity() {
    let env = Env::default();
    reward_growth_delta_x64(&env, 100, 0, 0);
}

// ============================================================
// REWARD FROM DELTA TESTS
// ============================================================

#[test]
fn test_reward_from_growth_delta_roundtrip() {
    let env = Env::default();

    // emission -> growth delta -> owed reward loses at most one unit
    let emission = 123_456_789u128;
    let liquidity = 1_000u128;
    let (delta, _) = reward_growth_delta_x64(&env, emission, 0, liquidity);
    let owed = reward_from_growth_delta(liquidity, delta);
    assert!(owed <= emission);
    assert!(emission - owed <= 1);
}

#[test]
fn test_reward_from_growth_delta_zero() {
    assert_eq!(reward_from_growth_delta(0, Q64), 0);
    assert_eq!(reward_from_growth_delta(1000, 0), 0);
}

#[test]
fn test_reward_from_growth_delta_overflowing_product() {
    // An overflowing product degrades to zero instead of panicking
    assert_eq!(reward_from_growth_delta(u128::MAX, u128::MAX), 0);
}
