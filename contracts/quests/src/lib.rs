#![no_std]

//! # Quests
//!
//! Single-token staking vault. Depositors receive shares of the reward
//! token held by the vault; anything sent to the vault directly, such as
//! converted fees, raises the value of every outstanding share.

use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

use looter_math::mul_div;

mod error;
mod events;
mod storage;
mod types;

pub use error::QuestsError;
use events::*;
use storage::*;
pub use types::VaultConfig;

#[contract]
pub struct LooterQuests;

#[contractimpl]
impl LooterQuests {
    /// Initialize vault
    ///
    /// # Arguments
    /// * `admin` - Deployer, must authorize
    /// * `reward_token` - Token staked and paid out
    pub fn initialize(
        env: Env,
        admin: Address,
        reward_token: Address,
        name: String,
        symbol: String,
    ) -> Result<(), QuestsError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(QuestsError::AlreadyInitialized);
        }

        write_config(&env, &VaultConfig { admin, reward_token, name, symbol });
        set_initialized(&env);
        Ok(())
    }

    /// Stake `amount` reward tokens, returns the shares minted
    pub fn enter(env: Env, from: Address, amount: i128) -> Result<i128, QuestsError> {
        from.require_auth();
        if amount <= 0 {
            return Err(QuestsError::InvalidAmount);
        }

        let config = read_config(&env)?;
        let reward = token::Client::new(&env, &config.reward_token);
        let this = env.current_contract_address();

        let held = reward.balance(&this);
        let supply = read_total_supply(&env);
        let shares = if supply == 0 || held == 0 {
            amount
        } else {
            mul_div(&env, amount, supply, held).ok_or(QuestsError::InvalidAmount)?
        };
        if shares == 0 {
            return Err(QuestsError::ZeroShares);
        }

        reward.transfer(&from, &this, &amount);
        mint_shares(&env, &from, shares);

        emit_enter(&env, &from, amount, shares);
        Ok(shares)
    }

    /// Redeem `shares` for the proportional part of the vault
    pub fn leave(env: Env, from: Address, shares: i128) -> Result<i128, QuestsError> {
        from.require_auth();
        if shares <= 0 {
            return Err(QuestsError::InvalidAmount);
        }

        let config = read_config(&env)?;
        let reward = token::Client::new(&env, &config.reward_token);
        let this = env.current_contract_address();

        let held = reward.balance(&this);
        let supply = read_total_supply(&env);
        burn_shares(&env, &from, shares)?;

        let amount = mul_div(&env, shares, held, supply).ok_or(QuestsError::InvalidAmount)?;
        if amount > 0 {
            reward.transfer(&this, &from, &amount);
        }

        emit_leave(&env, &from, shares, amount);
        Ok(amount)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), QuestsError> {
        from.require_auth();
        if amount < 0 {
            return Err(QuestsError::InvalidAmount);
        }

        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount);

        emit_transfer(&env, &from, &to, amount);
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn admin(env: Env) -> Result<Address, QuestsError> {
        Ok(read_config(&env)?.admin)
    }

    pub fn reward_token(env: Env) -> Result<Address, QuestsError> {
        Ok(read_config(&env)?.reward_token)
    }

    pub fn name(env: Env) -> Result<String, QuestsError> {
        Ok(read_config(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, QuestsError> {
        Ok(read_config(&env)?.symbol)
    }

    /// Shares carry the reward token's precision
    pub fn decimals(env: Env) -> Result<u32, QuestsError> {
        let config = read_config(&env)?;
        Ok(token::Client::new(&env, &config.reward_token).decimals())
    }
}
