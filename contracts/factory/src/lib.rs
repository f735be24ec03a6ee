#![no_std]

//! # LootSwap Factory
//!
//! Canonical registry of constant-product pairs.
//!
//! ## Responsibilities:
//! 1. Deploy pairs (atomic: deploy + init + register)
//! 2. Register pairs that were deployed and initialized elsewhere
//! 3. Duplicate prevention, one pair per unordered token pair
//! 4. Pair lookup for routers (`get_pair`)

use soroban_sdk::{
    contract, contractimpl, vec, xdr::ToXdr, Address, BytesN, Env, IntoVal, Symbol, Vec,
};

mod error;
mod events;
mod storage;
mod types;

pub use error::FactoryError;
use events::*;
use storage::*;
pub use types::*;

#[contract]
pub struct LooterFactory;

#[contractimpl]
impl LooterFactory {
    // ========================================================
    // WRITE FUNCTIONS
    // ========================================================

    /// Initialize factory
    pub fn initialize(
        env: Env,
        admin: Address,
        pair_wasm_hash: BytesN<32>,
    ) -> Result<(), FactoryError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(FactoryError::AlreadyInitialized);
        }

        let config = FactoryConfig {
            admin: admin.clone(),
            pair_wasm_hash,
        };
        write_config(&env, &config);
        set_initialized(&env);

        emit_initialized(&env, &admin);

        Ok(())
    }

    /// Create pair (atomic: deploy + init + register)
    ///
    /// Permissionless. The deployment salt is derived from the sorted
    /// tokens, so each unordered pair can only ever land at one address.
    pub fn create_pair(
        env: Env,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, FactoryError> {
        let config = read_config(&env)?;

        if token_a == token_b {
            return Err(FactoryError::IdenticalTokens);
        }

        let (token_0, token_1) = sort_tokens(&token_a, &token_b);

        if pair_exists(&env, &token_0, &token_1) {
            return Err(FactoryError::PairExists);
        }

        // === DEPLOY PAIR ===
        let pair = Self::deploy_pair(&env, &config, &token_0, &token_1);

        // === INITIALIZE PAIR ===
        let _: () = env.invoke_contract(
            &pair,
            &Symbol::new(&env, "initialize"),
            vec![
                &env,
                env.current_contract_address().into_val(&env),
                token_0.clone().into_val(&env),
                token_1.clone().into_val(&env),
            ],
        );

        // === REGISTER PAIR ===
        let index = write_pair(&env, &token_0, &token_1, &pair);
        emit_pair_created(&env, &token_0, &token_1, &pair, index);

        Ok(pair)
    }

    /// Register a pair that was deployed and initialized against this factory
    pub fn register_pair(env: Env, pair: Address) -> Result<u32, FactoryError> {
        let config = read_config(&env)?;
        config.admin.require_auth();

        let pair_factory: Address = env.invoke_contract(
            &pair,
            &Symbol::new(&env, "factory"),
            Vec::new(&env),
        );
        if pair_factory != env.current_contract_address() {
            return Err(FactoryError::ForeignPair);
        }

        let (token_0, token_1): (Address, Address) = env.invoke_contract(
            &pair,
            &Symbol::new(&env, "get_tokens"),
            Vec::new(&env),
        );

        if pair_exists(&env, &token_0, &token_1) {
            return Err(FactoryError::PairExists);
        }

        let index = write_pair(&env, &token_0, &token_1, &pair);
        emit_pair_created(&env, &token_0, &token_1, &pair, index);

        Ok(index)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    /// Get pair address for a token pair, in either order
    pub fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address> {
        let (token_0, token_1) = sort_tokens(&token_a, &token_b);
        read_pair(&env, &token_0, &token_1)
    }

    /// Get pair address by creation index
    pub fn all_pairs(env: Env, index: u32) -> Option<Address> {
        read_pair_by_index(&env, index)
    }

    /// Number of pairs known to the factory
    pub fn all_pairs_length(env: Env) -> u32 {
        read_pair_count(&env)
    }

    pub fn admin(env: Env) -> Result<Address, FactoryError> {
        Ok(read_config(&env)?.admin)
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Update pair WASM hash (for future pair deployments)
    pub fn set_pair_wasm_hash(env: Env, new_hash: BytesN<32>) -> Result<(), FactoryError> {
        let mut config = read_config(&env)?;
        config.admin.require_auth();

        emit_pair_wasm_updated(&env, &new_hash);

        config.pair_wasm_hash = new_hash;
        write_config(&env, &config);
        Ok(())
    }

    /// Transfer admin role to new address
    /// Both old and new admin must authorize
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), FactoryError> {
        let mut config = read_config(&env)?;
        config.admin.require_auth();
        new_admin.require_auth();

        emit_admin_updated(&env, &config.admin, &new_admin);

        config.admin = new_admin;
        write_config(&env, &config);
        Ok(())
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn deploy_pair(
        env: &Env,
        config: &FactoryConfig,
        token_0: &Address,
        token_1: &Address,
    ) -> Address {
        // Deterministic salt
        let mut salt_data = token_0.clone().to_xdr(env);
        salt_data.append(&token_1.clone().to_xdr(env));
        let salt = env.crypto().sha256(&salt_data);

        env.deployer()
            .with_current_contract(salt)
            .deploy_v2(config.pair_wasm_hash.clone(), ())
    }
}
