// Quests vault storage

use soroban_sdk::{Address, Env};

use crate::error::QuestsError;
use crate::types::{QuestsDataKey, VaultConfig};

const PERSISTENT_TTL: u32 = 6_307_200; // ~1 year

fn extend_ttl(env: &Env, key: &QuestsDataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_TTL, PERSISTENT_TTL);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&QuestsDataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&QuestsDataKey::Initialized, &true);
    extend_ttl(env, &QuestsDataKey::Initialized);
}

pub fn write_config(env: &Env, config: &VaultConfig) {
    env.storage().persistent().set(&QuestsDataKey::Config, config);
    extend_ttl(env, &QuestsDataKey::Config);
}

pub fn read_config(env: &Env) -> Result<VaultConfig, QuestsError> {
    env.storage()
        .persistent()
        .get(&QuestsDataKey::Config)
        .ok_or(QuestsError::NotInitialized)
}

// ============================================================
// SHARE LEDGER
// ============================================================

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&QuestsDataKey::TotalSupply)
        .unwrap_or(0)
}

fn write_total_supply(env: &Env, supply: i128) {
    env.storage().persistent().set(&QuestsDataKey::TotalSupply, &supply);
    extend_ttl(env, &QuestsDataKey::TotalSupply);
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&QuestsDataKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = QuestsDataKey::Balance(id.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_ttl(env, &key);
    }
}

pub fn spend_balance(env: &Env, id: &Address, amount: i128) -> Result<(), QuestsError> {
    let balance = read_balance(env, id);
    if balance < amount {
        return Err(QuestsError::InsufficientShares);
    }
    write_balance(env, id, balance - amount);
    Ok(())
}

pub fn receive_balance(env: &Env, id: &Address, amount: i128) {
    write_balance(env, id, read_balance(env, id) + amount);
}

pub fn mint_shares(env: &Env, to: &Address, amount: i128) {
    receive_balance(env, to, amount);
    write_total_supply(env, read_total_supply(env) + amount);
}

pub fn burn_shares(env: &Env, from: &Address, amount: i128) -> Result<(), QuestsError> {
    spend_balance(env, from, amount)?;
    write_total_supply(env, read_total_supply(env) - amount);
    Ok(())
}
