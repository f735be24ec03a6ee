// Constant-product (x * y = k) pricing

use soroban_sdk::{Env, U256};

use crate::constants::{FEE_DENOMINATOR, FEE_NUMERATOR, FEE_RETAINED, MINIMUM_LIQUIDITY};
use crate::wide::{mul_div, sqrt_product};

/// Output amount for an exact input against a constant-product pool.
///
/// `amount_out = amount_in * 997 * reserve_out / (reserve_in * 1000 + amount_in * 997)`
///
/// Rounded down so that
/// `(reserve_in + amount_in * 0.997) * (reserve_out - amount_out) >= reserve_in * reserve_out`
/// always holds. Returns `None` when either reserve is empty or the input
/// is negative; a zero input quotes zero.
pub fn get_amount_out(
    env: &Env,
    amount_in: i128,
    reserve_in: i128,
    reserve_out: i128,
) -> Option<i128> {
    if reserve_in <= 0 || reserve_out <= 0 || amount_in < 0 {
        return None;
    }
    if amount_in == 0 {
        return Some(0);
    }

    let amount_in_with_fee = amount_in.checked_mul(FEE_NUMERATOR)?;
    let denominator = reserve_in
        .checked_mul(FEE_DENOMINATOR)?
        .checked_add(amount_in_with_fee)?;

    mul_div(env, amount_in_with_fee, reserve_out, denominator)
}

/// Fee-adjusted invariant check run by a pair after an optimistic transfer.
///
/// Balances are scaled by 1000 and the 0.3% fee is taken off the input
/// side only, so the product must not fall below the old reserves' product.
pub fn k_invariant_holds(
    env: &Env,
    balance_0: i128,
    balance_1: i128,
    amount_0_in: i128,
    amount_1_in: i128,
    reserve_0: i128,
    reserve_1: i128,
) -> bool {
    let adjusted = |balance: i128, amount_in: i128| -> Option<i128> {
        balance
            .checked_mul(FEE_DENOMINATOR)?
            .checked_sub(amount_in.checked_mul(FEE_RETAINED)?)
    };

    let (adjusted_0, adjusted_1) = match (adjusted(balance_0, amount_0_in), adjusted(balance_1, amount_1_in)) {
        (Some(a0), Some(a1)) if a0 >= 0 && a1 >= 0 => (a0, a1),
        _ => return false,
    };

    let scale = (FEE_DENOMINATOR * FEE_DENOMINATOR) as u128;
    let lhs = U256::from_u128(env, adjusted_0 as u128).mul(&U256::from_u128(env, adjusted_1 as u128));
    let rhs = U256::from_u128(env, reserve_0.max(0) as u128)
        .mul(&U256::from_u128(env, reserve_1.max(0) as u128))
        .mul(&U256::from_u128(env, scale));

    lhs >= rhs
}

/// Shares minted for a deposit of `amount_0` / `amount_1` into a pair.
///
/// The first deposit mints `sqrt(amount_0 * amount_1)` of which
/// `MINIMUM_LIQUIDITY` is locked; later deposits mint in proportion to
/// the smaller of the two contributions.
pub fn liquidity_for_deposit(
    env: &Env,
    amount_0: i128,
    amount_1: i128,
    reserve_0: i128,
    reserve_1: i128,
    total_supply: i128,
) -> Option<i128> {
    if amount_0 <= 0 || amount_1 <= 0 {
        return None;
    }

    if total_supply == 0 {
        let root = sqrt_product(env, amount_0, amount_1);
        return root.checked_sub(MINIMUM_LIQUIDITY).filter(|l| *l > 0);
    }

    let by_0 = mul_div(env, amount_0, total_supply, reserve_0)?;
    let by_1 = mul_div(env, amount_1, total_supply, reserve_1)?;
    Some(by_0.min(by_1)).filter(|l| *l > 0)
}

/// Underlying amounts released by burning `liquidity` shares.
pub fn amounts_for_burn(
    env: &Env,
    liquidity: i128,
    balance_0: i128,
    balance_1: i128,
    total_supply: i128,
) -> Option<(i128, i128)> {
    if liquidity <= 0 || total_supply <= 0 || liquidity > total_supply {
        return None;
    }

    let amount_0 = mul_div(env, liquidity, balance_0, total_supply)?;
    let amount_1 = mul_div(env, liquidity, balance_1, total_supply)?;
    Some((amount_0, amount_1))
}
