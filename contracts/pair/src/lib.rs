#![no_std]

//! # LootSwap Pair
//!
//! Two-token constant-product pool with an internal share ledger.
//!
//! Settlement is transfer-based: callers move tokens into the pair first,
//! then call `mint` / `swap`, and the pair works out what it received by
//! comparing its token balances with the last synced reserves.
//!
//! ## Functions:
//! - Write (6): initialize, transfer, mint, burn, swap, sync
//! - Read (7): get_tokens, token_0, token_1, factory, get_reserves, total_supply, balance

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use looter_math::{amounts_for_burn, k_invariant_holds, liquidity_for_deposit, MINIMUM_LIQUIDITY};

mod error;
mod events;
mod storage;
pub mod types;

pub use error::PairError;
use events::*;
use storage::*;
pub use types::{PairConfig, Reserves};

#[contract]
pub struct LooterPair;

#[contractimpl]
impl LooterPair {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize pair
    ///
    /// # Arguments
    /// * `factory` - Factory registering this pair
    /// * `token_a` - First token (any order)
    /// * `token_b` - Second token (any order)
    pub fn initialize(
        env: Env,
        factory: Address,
        token_a: Address,
        token_b: Address,
    ) -> Result<(), PairError> {
        factory.require_auth();

        if is_initialized(&env) {
            return Err(PairError::AlreadyInitialized);
        }

        if token_a == token_b {
            return Err(PairError::IdenticalTokens);
        }

        let (token_0, token_1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        emit_initialized(&env, &factory, &token_0, &token_1);

        write_config(&env, &PairConfig { factory, token_0, token_1 });
        write_reserves(&env, &Reserves::default());
        set_initialized(&env);

        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    /// Both tokens in canonical order
    pub fn get_tokens(env: Env) -> Result<(Address, Address), PairError> {
        let config = read_config(&env)?;
        Ok((config.token_0, config.token_1))
    }

    pub fn token_0(env: Env) -> Result<Address, PairError> {
        Ok(read_config(&env)?.token_0)
    }

    pub fn token_1(env: Env) -> Result<Address, PairError> {
        Ok(read_config(&env)?.token_1)
    }

    pub fn factory(env: Env) -> Result<Address, PairError> {
        Ok(read_config(&env)?.factory)
    }

    /// Reserves in canonical token order
    pub fn get_reserves(env: Env) -> (i128, i128) {
        let reserves = read_reserves(&env);
        (reserves.reserve_0, reserves.reserve_1)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    // ========================================================
    // SHARE LEDGER
    // ========================================================

    /// Move pool shares between holders
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), PairError> {
        from.require_auth();

        if amount < 0 {
            return Err(PairError::InvalidAmount);
        }

        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount);

        emit_transfer(&env, &from, &to, amount);
        Ok(())
    }

    // ========================================================
    // LIQUIDITY
    // ========================================================

    /// Mint shares for whatever was transferred in since the last sync
    pub fn mint(env: Env, to: Address) -> Result<i128, PairError> {
        let config = read_config(&env)?;
        let reserves = read_reserves(&env);
        let (balance_0, balance_1) = Self::balances(&env, &config);

        let amount_0 = balance_0 - reserves.reserve_0;
        let amount_1 = balance_1 - reserves.reserve_1;
        let total_supply = read_total_supply(&env);

        let liquidity = liquidity_for_deposit(
            &env,
            amount_0,
            amount_1,
            reserves.reserve_0,
            reserves.reserve_1,
            total_supply,
        )
        .ok_or(PairError::InsufficientLiquidityMinted)?;

        if total_supply == 0 {
            // Locked forever: counted in the supply, held by nobody
            write_total_supply(&env, MINIMUM_LIQUIDITY);
        }
        mint_shares(&env, &to, liquidity);

        Self::update(&env, balance_0, balance_1);
        emit_mint(&env, &to, amount_0, amount_1, liquidity);

        Ok(liquidity)
    }

    /// Burn every share the pair holds of itself and pay out the
    /// proportional reserves to `to`
    pub fn burn(env: Env, to: Address) -> Result<(i128, i128), PairError> {
        let config = read_config(&env)?;
        let this = env.current_contract_address();
        let (balance_0, balance_1) = Self::balances(&env, &config);

        let liquidity = read_balance(&env, &this);
        let total_supply = read_total_supply(&env);

        let (amount_0, amount_1) = amounts_for_burn(&env, liquidity, balance_0, balance_1, total_supply)
            .filter(|(a0, a1)| *a0 > 0 && *a1 > 0)
            .ok_or(PairError::InsufficientLiquidityBurned)?;

        burn_shares(&env, &this, liquidity)?;

        token::Client::new(&env, &config.token_0).transfer(&this, &to, &amount_0);
        token::Client::new(&env, &config.token_1).transfer(&this, &to, &amount_1);

        let (balance_0, balance_1) = Self::balances(&env, &config);
        Self::update(&env, balance_0, balance_1);
        emit_burn(&env, &to, amount_0, amount_1, liquidity);

        Ok((amount_0, amount_1))
    }

    // ========================================================
    // SWAP
    // ========================================================

    /// Send out the requested amounts, then require that enough was paid
    /// in to keep the fee-adjusted constant product from decreasing
    pub fn swap(
        env: Env,
        amount_0_out: i128,
        amount_1_out: i128,
        to: Address,
    ) -> Result<(), PairError> {
        if amount_0_out < 0 || amount_1_out < 0 || (amount_0_out == 0 && amount_1_out == 0) {
            return Err(PairError::InsufficientOutputAmount);
        }

        let config = read_config(&env)?;
        let reserves = read_reserves(&env);

        if amount_0_out >= reserves.reserve_0 || amount_1_out >= reserves.reserve_1 {
            return Err(PairError::InsufficientLiquidity);
        }

        if to == config.token_0 || to == config.token_1 {
            return Err(PairError::InvalidTo);
        }

        let this = env.current_contract_address();
        if amount_0_out > 0 {
            token::Client::new(&env, &config.token_0).transfer(&this, &to, &amount_0_out);
        }
        if amount_1_out > 0 {
            token::Client::new(&env, &config.token_1).transfer(&this, &to, &amount_1_out);
        }

        let (balance_0, balance_1) = Self::balances(&env, &config);

        let kept_0 = reserves.reserve_0 - amount_0_out;
        let kept_1 = reserves.reserve_1 - amount_1_out;
        let amount_0_in = if balance_0 > kept_0 { balance_0 - kept_0 } else { 0 };
        let amount_1_in = if balance_1 > kept_1 { balance_1 - kept_1 } else { 0 };

        if amount_0_in == 0 && amount_1_in == 0 {
            return Err(PairError::InsufficientInputAmount);
        }

        if !k_invariant_holds(
            &env,
            balance_0,
            balance_1,
            amount_0_in,
            amount_1_in,
            reserves.reserve_0,
            reserves.reserve_1,
        ) {
            return Err(PairError::KInvariant);
        }

        Self::update(&env, balance_0, balance_1);
        emit_swap(&env, &to, amount_0_in, amount_1_in, amount_0_out, amount_1_out);

        Ok(())
    }

    /// Force reserves to match current balances
    pub fn sync(env: Env) -> Result<(), PairError> {
        let config = read_config(&env)?;
        let (balance_0, balance_1) = Self::balances(&env, &config);
        Self::update(&env, balance_0, balance_1);
        Ok(())
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn balances(env: &Env, config: &PairConfig) -> (i128, i128) {
        let this = env.current_contract_address();
        (
            token::Client::new(env, &config.token_0).balance(&this),
            token::Client::new(env, &config.token_1).balance(&this),
        )
    }

    fn update(env: &Env, balance_0: i128, balance_1: i128) {
        write_reserves(env, &Reserves { reserve_0: balance_0, reserve_1: balance_1 });
        emit_sync(env, balance_0, balance_1);
    }
}
