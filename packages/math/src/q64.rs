// SPDX-License-Identifier: MIT
// Q64.64 Fixed-Point Arithmetic Operations

use soroban_sdk::{Env, U256};

/// Type conversion helpers
#[inline]
pub fn i128_to_u128_safe(x: i128) -> u128 {
    if x <= 0 { 0 } else { x as u128 }
}

#[inline]
pub fn u128_to_i128_saturating(x: u128) -> i128 {
    if x > i128::MAX as u128 { i128::MAX } else { x as i128 }
}

/// Safe multiply-divide using U256 to prevent overflow
/// Calculates: (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 { panic!("mul_div: divide by zero"); }

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let den_256 = U256::from_u128(env, denominator);

    let product = a_256.mul(&b_256);
    let result = product.div(&den_256);

    result.to_u128().unwrap_or(u128::MAX)
}

/// Multiply-divide returning both quotient and remainder.
/// Calculates: (a * b) / denominator and (a * b) % denominator.
/// The remainder is always < denominator, so it fits in u128.
pub fn mul_div_rem(env: &Env, a: u128, b: u128, denominator: u128) -> (u128, u128) {
    if denominator == 0 { panic!("mul_div_rem: divide by zero"); }

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let den_256 = U256::from_u128(env, denominator);

    let product = a_256.mul(&b_256);
    let quotient = product.div(&den_256);
    let remainder = product.sub(&quotient.mul(&den_256));

    (
        quotient.to_u128().unwrap_or(u128::MAX),
        remainder.to_u128().unwrap_or(0),
    )
}
