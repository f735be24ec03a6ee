//! AutoLooter storage operations

use soroban_sdk::{Address, Env};

use crate::error::LooterError;
use crate::types::{DataKey, LooterConfig};

// ============================================================
// TTL CONFIG
// ============================================================

const PERSISTENT_TTL: u32 = 6_307_200; // ~1 year

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &LooterConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Result<LooterConfig, LooterError> {
    let key = DataKey::Config;
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(LooterError::NotInitialized)?;
    extend_ttl(env, &key);
    Ok(config)
}

// ============================================================
// BRIDGES
// ============================================================

pub fn read_bridge(env: &Env, token: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Bridge(token.clone()))
}

pub fn write_bridge(env: &Env, token: &Address, bridge: &Address) {
    let key = DataKey::Bridge(token.clone());
    env.storage().persistent().set(&key, bridge);
    extend_ttl(env, &key);
}

// ============================================================
// AUTHORIZED SET
// ============================================================

pub fn is_authorized(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Authorized(account.clone()))
        .unwrap_or(false)
}

pub fn write_authorized(env: &Env, account: &Address, authorized: bool) {
    let key = DataKey::Authorized(account.clone());
    if authorized {
        env.storage().persistent().set(&key, &true);
        extend_ttl(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// ============================================================
// REENTRANCY LOCK
// ============================================================

pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Locked)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}
