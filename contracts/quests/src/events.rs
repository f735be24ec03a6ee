use soroban_sdk::{Address, Env, Symbol};

pub fn emit_enter(env: &Env, from: &Address, amount: i128, shares: i128) {
    env.events().publish(
        (Symbol::new(env, "Enter"),),
        (from.clone(), amount, shares),
    );
}

pub fn emit_leave(env: &Env, from: &Address, shares: i128, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "Leave"),),
        (from.clone(), shares, amount),
    );
}

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "Transfer"),),
        (from.clone(), to.clone(), amount),
    );
}
