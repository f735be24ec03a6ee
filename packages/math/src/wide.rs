// 256-bit intermediate arithmetic on top of the host U256 type

use soroban_sdk::{Env, U256};

#[inline]
fn to_u256(env: &Env, x: i128) -> U256 {
    U256::from_u128(env, x as u128)
}

/// Calculates `floor(a * b / denominator)` without overflowing i128.
///
/// Returns `None` for negative inputs, a zero denominator, or a result
/// that does not fit back into i128.
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> Option<i128> {
    if a < 0 || b < 0 || denominator <= 0 {
        return None;
    }

    let product = to_u256(env, a).mul(&to_u256(env, b));
    let result = product.div(&to_u256(env, denominator)).to_u128()?;

    if result > i128::MAX as u128 {
        None
    } else {
        Some(result as i128)
    }
}

/// Integer square root of `a * b`, rounded down.
///
/// Newton iteration seeded with `max(a, b)`, which never undershoots
/// the root, so the sequence decreases monotonically to the floor.
pub fn sqrt_product(env: &Env, a: i128, b: i128) -> i128 {
    if a <= 0 || b <= 0 {
        return 0;
    }

    let n = to_u256(env, a).mul(&to_u256(env, b));
    let two = U256::from_u32(env, 2);

    let mut x = to_u256(env, a.max(b));
    let mut y = x.add(&n.div(&x)).div(&two);
    while y < x {
        x = y;
        y = x.add(&n.div(&x)).div(&two);
    }

    // sqrt(a * b) <= max(a, b), so the root always fits in i128
    x.to_u128().map(|r| r as i128).unwrap_or(0)
}
