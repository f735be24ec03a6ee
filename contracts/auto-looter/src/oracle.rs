//! Pair lookups against the factory and pair contracts

use soroban_sdk::{vec, Address, Env, IntoVal, Symbol, Vec};

use crate::error::LooterError;

/// Canonical order of two tokens, the same order pairs store them in
pub fn sort_tokens(token_a: &Address, token_b: &Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a.clone(), token_b.clone())
    } else {
        (token_b.clone(), token_a.clone())
    }
}

pub fn find_pool(
    env: &Env,
    factory: &Address,
    token_a: &Address,
    token_b: &Address,
) -> Option<Address> {
    if token_a == token_b {
        return None;
    }
    let (token_0, token_1) = sort_tokens(token_a, token_b);
    env.invoke_contract(
        factory,
        &Symbol::new(env, "get_pair"),
        vec![env, token_0.into_val(env), token_1.into_val(env)],
    )
}

pub fn pool_for(
    env: &Env,
    factory: &Address,
    token_a: &Address,
    token_b: &Address,
) -> Result<Address, LooterError> {
    find_pool(env, factory, token_a, token_b).ok_or(LooterError::PairNotFound)
}

/// Reserves in canonical token order
pub fn reserves(env: &Env, pool: &Address) -> (i128, i128) {
    env.invoke_contract(pool, &Symbol::new(env, "get_reserves"), Vec::new(env))
}

pub fn share_balance(env: &Env, pool: &Address, holder: &Address) -> i128 {
    env.invoke_contract(
        pool,
        &Symbol::new(env, "balance"),
        vec![env, holder.clone().into_val(env)],
    )
}
