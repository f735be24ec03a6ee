//! Swap executor
//!
//! Pays `amount_in` into the pair, then asks it for the full
//! constant-product output computed from its current reserves.

use soroban_sdk::{log, token, vec, Address, Env, IntoVal, Symbol};

use looter_math::get_amount_out;

use crate::error::LooterError;
use crate::oracle::reserves;

/// One swap through one pair
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hop {
    pub pair: Address,
    pub token_in: Address,
    pub token_out: Address,
}

impl Hop {
    pub fn new(pair: &Address, token_in: &Address, token_out: &Address) -> Self {
        Self {
            pair: pair.clone(),
            token_in: token_in.clone(),
            token_out: token_out.clone(),
        }
    }
}

/// Execute `hop` with tokens held by this contract, sending the output to `to`
pub fn swap(env: &Env, hop: &Hop, amount_in: i128, to: &Address) -> Result<i128, LooterError> {
    if amount_in == 0 {
        return Ok(0);
    }

    let (reserve_0, reserve_1) = reserves(env, &hop.pair);
    let zero_for_one = hop.token_in < hop.token_out;
    let (reserve_in, reserve_out) = if zero_for_one {
        (reserve_0, reserve_1)
    } else {
        (reserve_1, reserve_0)
    };

    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(LooterError::InsufficientLiquidity);
    }

    let amount_out = get_amount_out(env, amount_in, reserve_in, reserve_out)
        .ok_or(LooterError::InsufficientLiquidity)?;
    if amount_out == 0 {
        return Err(LooterError::InsufficientOutput);
    }

    let this = env.current_contract_address();
    token::Client::new(env, &hop.token_in).transfer(&this, &hop.pair, &amount_in);

    let (amount_0_out, amount_1_out) = if zero_for_one {
        (0i128, amount_out)
    } else {
        (amount_out, 0i128)
    };
    let _: () = env.invoke_contract(
        &hop.pair,
        &Symbol::new(env, "swap"),
        vec![
            env,
            amount_0_out.into_val(env),
            amount_1_out.into_val(env),
            to.clone().into_val(env),
        ],
    );

    log!(env, "swap", hop.token_in, hop.token_out, amount_in, amount_out);
    Ok(amount_out)
}
