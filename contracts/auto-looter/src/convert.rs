//! Conversion orchestrator

use soroban_sdk::{log, token, vec, Address, Env, IntoVal, Symbol};

use crate::error::LooterError;
use crate::events::emit_convert;
use crate::oracle::{find_pool, share_balance};
use crate::path::{resolve, Exit, SwapPlan};
use crate::swap::{swap, Hop};
use crate::types::LooterConfig;

/// Burn every share this contract holds in the (token_a, token_b) pair and
/// deliver the proceeds to the quest vault as reward tokens
pub fn convert_pair(
    env: &Env,
    config: &LooterConfig,
    caller: &Address,
    token_a: &Address,
    token_b: &Address,
) -> Result<i128, LooterError> {
    let pair = find_pool(env, &config.factory, token_a, token_b).ok_or(LooterError::InvalidPair)?;
    let plan = resolve(env, config, &pair, token_a, token_b)?;
    log!(env, "conversion path", token_a.clone(), token_b.clone(), plan.kind);

    let (amount_a, amount_b) = burn_position(env, &pair, token_a, token_b)?;
    let reward_out = execute(env, config, &plan, amount_a, amount_b)?;

    emit_convert(env, caller, token_a, token_b, amount_a, amount_b, reward_out);
    Ok(reward_out)
}

/// Returns the withdrawn amounts in (token_a, token_b) order
fn burn_position(
    env: &Env,
    pair: &Address,
    token_a: &Address,
    token_b: &Address,
) -> Result<(i128, i128), LooterError> {
    let this = env.current_contract_address();
    let shares = share_balance(env, pair, &this);
    if shares <= 0 {
        return Err(LooterError::NothingToConvert);
    }

    let _: () = env.invoke_contract(
        pair,
        &Symbol::new(env, "transfer"),
        vec![
            env,
            this.clone().into_val(env),
            pair.clone().into_val(env),
            shares.into_val(env),
        ],
    );
    let (amount_0, amount_1): (i128, i128) = env.invoke_contract(
        pair,
        &Symbol::new(env, "burn"),
        vec![env, this.into_val(env)],
    );
    log!(env, "burned position", shares, amount_0, amount_1);

    if token_a < token_b {
        Ok((amount_0, amount_1))
    } else {
        Ok((amount_1, amount_0))
    }
}

fn execute(
    env: &Env,
    config: &LooterConfig,
    plan: &SwapPlan,
    amount_a: i128,
    amount_b: i128,
) -> Result<i128, LooterError> {
    let out_a = advance(env, config, plan.entry_a.as_ref(), amount_a)?;
    let out_b = advance(env, config, plan.entry_b.as_ref(), amount_b)?;

    match &plan.exit {
        Exit::Done => {
            // A side without an entry hop was the reward token all along
            let this = env.current_contract_address();
            let reward = token::Client::new(env, &config.reward_token);
            for (entry, amount) in [(&plan.entry_a, out_a), (&plan.entry_b, out_b)] {
                if entry.is_none() && amount > 0 {
                    reward.transfer(&this, &config.quest, &amount);
                }
            }
            add_amounts(out_a, out_b)
        }
        Exit::Merged(tail) => advance(env, config, Some(tail), add_amounts(out_a, out_b)?),
        Exit::Separate(tail_a, tail_b) => {
            let reward_a = advance(env, config, tail_a.as_ref(), out_a)?;
            let reward_b = advance(env, config, tail_b.as_ref(), out_b)?;
            add_amounts(reward_a, reward_b)
        }
    }
}

/// Run `hop` if there is one; reward-token output goes straight to the vault
fn advance(
    env: &Env,
    config: &LooterConfig,
    hop: Option<&Hop>,
    amount: i128,
) -> Result<i128, LooterError> {
    match hop {
        Some(hop) if hop.token_out == config.reward_token => swap(env, hop, amount, &config.quest),
        Some(hop) => swap(env, hop, amount, &env.current_contract_address()),
        None => Ok(amount),
    }
}

pub fn add_amounts(a: i128, b: i128) -> Result<i128, LooterError> {
    a.checked_add(b).ok_or(LooterError::AmountOverflow)
}
