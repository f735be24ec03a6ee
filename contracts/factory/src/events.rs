//! Factory events

use soroban_sdk::{Address, BytesN, Env, Symbol};

/// Emitted when factory is initialized
pub fn emit_initialized(env: &Env, admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "FactoryInit"),),
        (admin.clone(),),
    );
}

/// Emitted when a pair is created or registered
pub fn emit_pair_created(
    env: &Env,
    token_0: &Address,
    token_1: &Address,
    pair: &Address,
    index: u32,
) {
    env.events().publish(
        (Symbol::new(env, "PairCreated"),),
        (token_0.clone(), token_1.clone(), pair.clone(), index),
    );
}

/// Emitted when admin is updated
pub fn emit_admin_updated(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminUpdated"),),
        (old_admin.clone(), new_admin.clone()),
    );
}

/// Emitted when the pair WASM hash is replaced
pub fn emit_pair_wasm_updated(env: &Env, new_hash: &BytesN<32>) {
    env.events().publish(
        (Symbol::new(env, "PairWasmUpdated"),),
        (new_hash.clone(),),
    );
}
