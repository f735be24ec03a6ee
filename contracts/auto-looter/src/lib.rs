#![no_std]

//! # AutoLooter
//!
//! Collects LP shares that accumulate as protocol fees, burns them, and
//! converts both underlying tokens into the reward token, which is sent
//! to the quest vault.
//!
//! ## Functions:
//! - Write (8): initialize, convert, convert_multiple, set_bridge,
//!   add_authorized, remove_authorized, set_quest, transfer_ownership
//! - Read (8): get_config, is_initialized, factory, quest, owner,
//!   bridge_for, is_authorized, preview_path

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

mod bridge;
mod convert;
mod error;
mod events;
mod guard;
mod oracle;
mod path;
mod storage;
mod swap;
mod types;

pub use error::LooterError;
use events::*;
use guard::{enter, require_authorized, require_external};
use storage::*;
pub use types::*;

#[contract]
pub struct AutoLooter;

#[contractimpl]
impl AutoLooter {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the looter
    ///
    /// # Arguments
    /// * `owner` - Account managing the authorized set
    /// * `factory` - Pair factory
    /// * `quest` - Vault receiving the reward token
    /// * `reward_token` - Token everything is converted into
    /// * `base_token` - Default bridge token
    pub fn initialize(
        env: Env,
        owner: Address,
        factory: Address,
        quest: Address,
        reward_token: Address,
        base_token: Address,
    ) -> Result<(), LooterError> {
        if is_initialized(&env) {
            return Err(LooterError::AlreadyInitialized);
        }

        require_external(&env, &owner)?;

        if reward_token == base_token {
            return Err(LooterError::InvalidConfig);
        }

        let config = LooterConfig {
            factory,
            quest,
            reward_token,
            base_token,
            owner,
        };
        write_config(&env, &config);
        set_initialized(&env);

        emit_initialized(&env, &config.factory, &config.quest, &config.owner);

        Ok(())
    }

    // ========================================================
    // CONVERSION
    // ========================================================

    /// Convert this contract's whole position in the (token_a, token_b)
    /// pair into reward tokens for the quest vault
    ///
    /// Returns the amount of reward token delivered.
    pub fn convert(
        env: Env,
        caller: Address,
        token_a: Address,
        token_b: Address,
    ) -> Result<i128, LooterError> {
        let config = read_config(&env)?;
        let _guard = enter(&env, &caller)?;

        convert::convert_pair(&env, &config, &caller, &token_a, &token_b)
    }

    /// Convert several pairs in one call
    ///
    /// All or nothing: any failing pair aborts the whole batch.
    pub fn convert_multiple(
        env: Env,
        caller: Address,
        tokens_a: Vec<Address>,
        tokens_b: Vec<Address>,
    ) -> Result<i128, LooterError> {
        let config = read_config(&env)?;
        let _guard = enter(&env, &caller)?;

        if tokens_a.len() != tokens_b.len() {
            return Err(LooterError::BatchLengthMismatch);
        }

        let mut total: i128 = 0;
        for (token_a, token_b) in tokens_a.iter().zip(tokens_b.iter()) {
            let reward = convert::convert_pair(&env, &config, &caller, &token_a, &token_b)?;
            total = convert::add_amounts(total, reward)?;
        }

        log!(&env, "batch converted", tokens_a.len(), total);
        Ok(total)
    }

    // ========================================================
    // BRIDGE REGISTRY
    // ========================================================

    /// Route `token` through `bridge` on its way to the reward token
    pub fn set_bridge(
        env: Env,
        caller: Address,
        token: Address,
        bridge: Address,
    ) -> Result<(), LooterError> {
        let config = read_config(&env)?;
        let _guard = enter(&env, &caller)?;
        require_authorized(&env, &config, &caller)?;

        bridge::set_bridge(&env, &config, &token, &bridge)
    }

    /// Configured bridge for `token`, the base token when none is set
    pub fn bridge_for(env: Env, token: Address) -> Result<Address, LooterError> {
        let config = read_config(&env)?;
        Ok(bridge::bridge_for(&env, &config, &token))
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    pub fn add_authorized(env: Env, account: Address) -> Result<(), LooterError> {
        let config = read_config(&env)?;
        let _guard = enter(&env, &config.owner)?;

        write_authorized(&env, &account, true);
        emit_authorized_added(&env, &account);
        Ok(())
    }

    pub fn remove_authorized(env: Env, account: Address) -> Result<(), LooterError> {
        let config = read_config(&env)?;
        let _guard = enter(&env, &config.owner)?;

        write_authorized(&env, &account, false);
        emit_authorized_removed(&env, &account);
        Ok(())
    }

    /// Redirect converted rewards to a new vault
    pub fn set_quest(env: Env, caller: Address, quest: Address) -> Result<(), LooterError> {
        let mut config = read_config(&env)?;
        let _guard = enter(&env, &caller)?;
        require_authorized(&env, &config, &caller)?;

        emit_quest_updated(&env, &config.quest, &quest);

        config.quest = quest;
        write_config(&env, &config);
        Ok(())
    }

    /// Hand the owner role to another account
    /// Both old and new owner must authorize
    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), LooterError> {
        let mut config = read_config(&env)?;
        let _guard = enter(&env, &config.owner)?;
        require_external(&env, &new_owner)?;

        emit_ownership_transferred(&env, &config.owner, &new_owner);

        config.owner = new_owner;
        write_config(&env, &config);
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn get_config(env: Env) -> Result<LooterConfig, LooterError> {
        read_config(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    pub fn factory(env: Env) -> Result<Address, LooterError> {
        Ok(read_config(&env)?.factory)
    }

    pub fn quest(env: Env) -> Result<Address, LooterError> {
        Ok(read_config(&env)?.quest)
    }

    pub fn owner(env: Env) -> Result<Address, LooterError> {
        Ok(read_config(&env)?.owner)
    }

    pub fn is_authorized(env: Env, account: Address) -> bool {
        is_authorized(&env, &account)
    }

    /// Which rule `convert` would use for this pair, without moving tokens
    pub fn preview_path(
        env: Env,
        token_a: Address,
        token_b: Address,
    ) -> Result<PathKind, LooterError> {
        let config = read_config(&env)?;
        let pair = oracle::find_pool(&env, &config.factory, &token_a, &token_b)
            .ok_or(LooterError::InvalidPair)?;
        let plan = path::resolve(&env, &config, &pair, &token_a, &token_b)?;
        Ok(plan.kind)
    }
}
