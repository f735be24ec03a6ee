//! Bridge registry
//!
//! A bridge is the token a source token is swapped into on its way to
//! the reward token. Unconfigured tokens bridge through the base token.

use soroban_sdk::{Address, Env};

use crate::error::LooterError;
use crate::events::emit_bridge_set;
use crate::storage::{read_bridge, write_bridge};
use crate::types::LooterConfig;

pub fn bridge_for(env: &Env, config: &LooterConfig, token: &Address) -> Address {
    read_bridge(env, token).unwrap_or_else(|| config.base_token.clone())
}

pub fn validate_bridge(
    config: &LooterConfig,
    token: &Address,
    bridge: &Address,
) -> Result<(), LooterError> {
    if *token == config.reward_token || *token == config.base_token || token == bridge {
        return Err(LooterError::InvalidBridge);
    }
    Ok(())
}

pub fn set_bridge(
    env: &Env,
    config: &LooterConfig,
    token: &Address,
    bridge: &Address,
) -> Result<(), LooterError> {
    validate_bridge(config, token, bridge)?;
    write_bridge(env, token, bridge);
    emit_bridge_set(env, token, bridge);
    Ok(())
}
