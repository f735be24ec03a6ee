// Pair events module for LootSwap

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the pair is initialized
/// Topics: ("PairInit",)
/// Data: (factory, token0, token1)
pub fn emit_initialized(env: &Env, factory: &Address, token_0: &Address, token_1: &Address) {
    env.events().publish(
        (Symbol::new(env, "PairInit"),),
        (factory.clone(), token_0.clone(), token_1.clone()),
    );
}

/// Emitted when liquidity is added
/// Topics: ("Mint",)
/// Data: (to, amount0, amount1, liquidity)
pub fn emit_mint(env: &Env, to: &Address, amount_0: i128, amount_1: i128, liquidity: i128) {
    env.events().publish(
        (Symbol::new(env, "Mint"),),
        (to.clone(), amount_0, amount_1, liquidity),
    );
}

/// Emitted when liquidity is removed
/// Topics: ("Burn",)
/// Data: (to, amount0, amount1, liquidity)
pub fn emit_burn(env: &Env, to: &Address, amount_0: i128, amount_1: i128, liquidity: i128) {
    env.events().publish(
        (Symbol::new(env, "Burn"),),
        (to.clone(), amount_0, amount_1, liquidity),
    );
}

/// Emitted on every swap
/// Topics: ("Swap",)
/// Data: (to, amount0_in, amount1_in, amount0_out, amount1_out)
pub fn emit_swap(
    env: &Env,
    to: &Address,
    amount_0_in: i128,
    amount_1_in: i128,
    amount_0_out: i128,
    amount_1_out: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"),),
        (to.clone(), amount_0_in, amount_1_in, amount_0_out, amount_1_out),
    );
}

/// Emitted whenever reserves are rewritten
/// Topics: ("Sync",)
/// Data: (reserve0, reserve1)
pub fn emit_sync(env: &Env, reserve_0: i128, reserve_1: i128) {
    env.events().publish((Symbol::new(env, "Sync"),), (reserve_0, reserve_1));
}

/// Emitted when shares move between holders
/// Topics: ("Transfer",)
/// Data: (from, to, amount)
pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "Transfer"),),
        (from.clone(), to.clone(), amount),
    );
}
