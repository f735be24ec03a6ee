// Factory storage module for LootSwap

use soroban_sdk::{contracttype, Address, Env};

use crate::error::FactoryError;
use crate::types::FactoryConfig;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum FactoryDataKey {
    /// Factory configuration
    Config,
    /// Initialization flag
    Initialized,
    /// Pair address by (token0, token1) - tokens must be sorted
    Pair(Address, Address),
    /// Pair address by creation index
    PairByIndex(u32),
    /// Number of registered pairs
    PairCount,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// TTL bump threshold
const PERSISTENT_BUMP: u32 = 6_307_200;

/// Extend TTL for a persistent storage key
fn extend_ttl(env: &Env, key: &FactoryDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&FactoryDataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage()
        .persistent()
        .set(&FactoryDataKey::Initialized, &true);
    extend_ttl(env, &FactoryDataKey::Initialized);
}

// ============================================================
// FACTORY CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &FactoryConfig) {
    env.storage().persistent().set(&FactoryDataKey::Config, config);
    extend_ttl(env, &FactoryDataKey::Config);
}

pub fn read_config(env: &Env) -> Result<FactoryConfig, FactoryError> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::Config)
        .ok_or(FactoryError::NotInitialized)
}

// ============================================================
// PAIR REGISTRY
// ============================================================

/// Canonical order for a token pair
pub fn sort_tokens(token_a: &Address, token_b: &Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a.clone(), token_b.clone())
    } else {
        (token_b.clone(), token_a.clone())
    }
}

pub fn read_pair(env: &Env, token_0: &Address, token_1: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::Pair(token_0.clone(), token_1.clone()))
}

pub fn pair_exists(env: &Env, token_0: &Address, token_1: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&FactoryDataKey::Pair(token_0.clone(), token_1.clone()))
}

pub fn read_pair_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::PairCount)
        .unwrap_or(0)
}

pub fn read_pair_by_index(env: &Env, index: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::PairByIndex(index))
}

/// Record a pair under its sorted tokens and append it to the index.
/// Returns the pair's index.
pub fn write_pair(env: &Env, token_0: &Address, token_1: &Address, pair: &Address) -> u32 {
    let key = FactoryDataKey::Pair(token_0.clone(), token_1.clone());
    env.storage().persistent().set(&key, pair);
    extend_ttl(env, &key);

    let index = read_pair_count(env);
    let index_key = FactoryDataKey::PairByIndex(index);
    env.storage().persistent().set(&index_key, pair);
    extend_ttl(env, &index_key);

    env.storage()
        .persistent()
        .set(&FactoryDataKey::PairCount, &(index + 1));
    extend_ttl(env, &FactoryDataKey::PairCount);

    index
}
