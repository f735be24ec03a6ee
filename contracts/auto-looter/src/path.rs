//! Path resolver
//!
//! Decides, before any tokens move, how the two halves of a burned
//! position reach the reward token. Rules are tried in order:
//!
//! 1. **Direct**: one side already is the reward token.
//! 2. **Base-paired**: one side is the base token; the other side is
//!    swapped into it and the total goes through the base/reward pool.
//! 3. **Shared bridge**: both sides meet at a common token (their shared
//!    bridge, or one side when the other bridges into it) that has a pool
//!    with the reward token.
//! 4. **Independent bridges**: each side takes its own bridge.
//!
//! Every pool the plan touches is looked up here, so a missing pool
//! fails the conversion before the position is burned.

use soroban_sdk::{Address, Env};

use crate::bridge::bridge_for;
use crate::error::LooterError;
use crate::oracle::{find_pool, pool_for};
use crate::swap::Hop;
use crate::types::{LooterConfig, PathKind};

/// What happens after the entry hops
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Exit {
    /// Both sides already hold the reward token
    Done,
    /// Both sides were merged into one token, swapped once more
    Merged(Hop),
    /// Each side finishes on its own, if it still has to
    Separate(Option<Hop>, Option<Hop>),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapPlan {
    pub kind: PathKind,
    pub entry_a: Option<Hop>,
    pub entry_b: Option<Hop>,
    pub exit: Exit,
}

/// Resolve the plan for the position in `pair`, made of `token_a` and `token_b`
pub fn resolve(
    env: &Env,
    config: &LooterConfig,
    pair: &Address,
    token_a: &Address,
    token_b: &Address,
) -> Result<SwapPlan, LooterError> {
    let reward = &config.reward_token;
    let base = &config.base_token;

    if token_a == reward || token_b == reward {
        let (entry_a, entry_b) = one_side_into(pair, token_a, token_b, reward);
        return Ok(SwapPlan {
            kind: PathKind::Direct,
            entry_a,
            entry_b,
            exit: Exit::Done,
        });
    }

    if token_a == base || token_b == base {
        let tail = pool_for(env, &config.factory, base, reward)
            .map_err(|_| LooterError::NoAvailablePath)?;
        let (entry_a, entry_b) = one_side_into(pair, token_a, token_b, base);
        return Ok(SwapPlan {
            kind: PathKind::BasePaired,
            entry_a,
            entry_b,
            exit: Exit::Merged(Hop::new(&tail, base, reward)),
        });
    }

    let bridge_a = bridge_for(env, config, token_a);
    let bridge_b = bridge_for(env, config, token_b);

    if let Some(meeting) = meeting_token(token_a, token_b, &bridge_a, &bridge_b) {
        if meeting == *reward {
            return Ok(SwapPlan {
                kind: PathKind::SharedBridge,
                entry_a: Some(leg(env, config, token_a, reward)?),
                entry_b: Some(leg(env, config, token_b, reward)?),
                exit: Exit::Done,
            });
        }

        if let Some(tail) = find_pool(env, &config.factory, &meeting, reward) {
            return Ok(SwapPlan {
                kind: PathKind::SharedBridge,
                entry_a: leg_unless_at(env, config, pair, token_a, token_b, &meeting)?,
                entry_b: leg_unless_at(env, config, pair, token_b, token_a, &meeting)?,
                exit: Exit::Merged(Hop::new(&tail, &meeting, reward)),
            });
        }
    }

    let (entry_a, exit_a) = bridged(env, config, token_a, &bridge_a)?;
    let (entry_b, exit_b) = bridged(env, config, token_b, &bridge_b)?;
    Ok(SwapPlan {
        kind: PathKind::IndependentBridges,
        entry_a: Some(entry_a),
        entry_b: Some(entry_b),
        exit: Exit::Separate(exit_a, exit_b),
    })
}

/// The side that isn't `target` is swapped into it through the burned pair
fn one_side_into(
    pair: &Address,
    token_a: &Address,
    token_b: &Address,
    target: &Address,
) -> (Option<Hop>, Option<Hop>) {
    if token_a == target {
        (None, Some(Hop::new(pair, token_b, target)))
    } else {
        (Some(Hop::new(pair, token_a, target)), None)
    }
}

/// Common token both sides can be gathered in, if any
fn meeting_token(
    token_a: &Address,
    token_b: &Address,
    bridge_a: &Address,
    bridge_b: &Address,
) -> Option<Address> {
    if bridge_a == bridge_b {
        Some(bridge_a.clone())
    } else if bridge_a == token_b {
        Some(token_b.clone())
    } else if bridge_b == token_a {
        Some(token_a.clone())
    } else {
        None
    }
}

fn leg(
    env: &Env,
    config: &LooterConfig,
    token_in: &Address,
    token_out: &Address,
) -> Result<Hop, LooterError> {
    let pool = pool_for(env, &config.factory, token_in, token_out)?;
    Ok(Hop::new(&pool, token_in, token_out))
}

fn leg_unless_at(
    env: &Env,
    config: &LooterConfig,
    pair: &Address,
    token: &Address,
    other: &Address,
    meeting: &Address,
) -> Result<Option<Hop>, LooterError> {
    if token == meeting {
        Ok(None)
    } else if other == meeting {
        Ok(Some(Hop::new(pair, token, meeting)))
    } else {
        leg(env, config, token, meeting).map(Some)
    }
}

/// First hop into the token's bridge, then the bridge's pool with the reward token
fn bridged(
    env: &Env,
    config: &LooterConfig,
    token: &Address,
    bridge: &Address,
) -> Result<(Hop, Option<Hop>), LooterError> {
    let reward = &config.reward_token;
    if bridge == reward {
        return Ok((leg(env, config, token, reward)?, None));
    }

    let first = leg(env, config, token, bridge)?;
    let second = pool_for(env, &config.factory, bridge, reward)
        .map_err(|_| LooterError::NoAvailablePath)?;
    Ok((first, Some(Hop::new(&second, bridge, reward))))
}
