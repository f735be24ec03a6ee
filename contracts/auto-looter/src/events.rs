//! AutoLooter events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the looter is initialized
pub fn emit_initialized(env: &Env, factory: &Address, quest: &Address, owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "LooterInit"),),
        (factory.clone(), quest.clone(), owner.clone()),
    );
}

/// Emitted when a bridge is configured
pub fn emit_bridge_set(env: &Env, token: &Address, bridge: &Address) {
    env.events().publish(
        (Symbol::new(env, "BridgeSet"),),
        (token.clone(), bridge.clone()),
    );
}

/// Emitted on every completed pair conversion
pub fn emit_convert(
    env: &Env,
    caller: &Address,
    token_a: &Address,
    token_b: &Address,
    amount_a: i128,
    amount_b: i128,
    reward_out: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Convert"),),
        (
            caller.clone(),
            token_a.clone(),
            token_b.clone(),
            amount_a,
            amount_b,
            reward_out,
        ),
    );
}

pub fn emit_authorized_added(env: &Env, account: &Address) {
    env.events().publish(
        (Symbol::new(env, "AuthorizedAdded"),),
        (account.clone(),),
    );
}

pub fn emit_authorized_removed(env: &Env, account: &Address) {
    env.events().publish(
        (Symbol::new(env, "AuthorizedRemoved"),),
        (account.clone(),),
    );
}

/// Emitted when reward distribution is redirected
pub fn emit_quest_updated(env: &Env, old_quest: &Address, new_quest: &Address) {
    env.events().publish(
        (Symbol::new(env, "QuestUpdated"),),
        (old_quest.clone(), new_quest.clone()),
    );
}

pub fn emit_ownership_transferred(env: &Env, old_owner: &Address, new_owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "OwnershipTransferred"),),
        (old_owner.clone(), new_owner.clone()),
    );
}
