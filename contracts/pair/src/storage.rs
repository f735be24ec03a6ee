// Pair storage module for LootSwap

use soroban_sdk::{contracttype, Address, Env};

use crate::error::PairError;
use crate::types::{PairConfig, Reserves};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum PairDataKey {
    /// Pair configuration
    Config,
    /// Initialization flag
    Initialized,
    /// Last synced reserves
    Reserves,
    /// Total outstanding shares (including the locked minimum)
    TotalSupply,
    /// Share balance by holder
    Balance(Address),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// TTL bump threshold
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &PairDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&PairDataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&PairDataKey::Initialized, &true);
    extend_ttl(env, &PairDataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &PairConfig) {
    env.storage().persistent().set(&PairDataKey::Config, config);
    extend_ttl(env, &PairDataKey::Config);
}

pub fn read_config(env: &Env) -> Result<PairConfig, PairError> {
    env.storage()
        .persistent()
        .get(&PairDataKey::Config)
        .ok_or(PairError::NotInitialized)
}

// ============================================================
// RESERVES
// ============================================================

pub fn write_reserves(env: &Env, reserves: &Reserves) {
    env.storage().persistent().set(&PairDataKey::Reserves, reserves);
    extend_ttl(env, &PairDataKey::Reserves);
}

pub fn read_reserves(env: &Env) -> Reserves {
    env.storage()
        .persistent()
        .get(&PairDataKey::Reserves)
        .unwrap_or_default()
}

// ============================================================
// SHARE LEDGER
// ============================================================

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&PairDataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, total: i128) {
    env.storage().persistent().set(&PairDataKey::TotalSupply, &total);
    extend_ttl(env, &PairDataKey::TotalSupply);
}

pub fn read_balance(env: &Env, owner: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PairDataKey::Balance(owner.clone()))
        .unwrap_or(0)
}

fn write_balance(env: &Env, owner: &Address, amount: i128) {
    let key = PairDataKey::Balance(owner.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_ttl(env, &key);
    }
}

pub fn receive_balance(env: &Env, owner: &Address, amount: i128) {
    let balance = read_balance(env, owner);
    write_balance(env, owner, balance + amount);
}

pub fn spend_balance(env: &Env, owner: &Address, amount: i128) -> Result<(), PairError> {
    let balance = read_balance(env, owner);
    if balance < amount {
        return Err(PairError::InsufficientBalance);
    }
    write_balance(env, owner, balance - amount);
    Ok(())
}

/// Mint shares to `to` and grow the supply
pub fn mint_shares(env: &Env, to: &Address, amount: i128) {
    receive_balance(env, to, amount);
    write_total_supply(env, read_total_supply(env) + amount);
}

/// Burn shares held by `from` and shrink the supply
pub fn burn_shares(env: &Env, from: &Address, amount: i128) -> Result<(), PairError> {
    spend_balance(env, from, amount)?;
    write_total_supply(env, read_total_supply(env) - amount);
    Ok(())
}
