// Pair Types

use soroban_sdk::{contracttype, Address};

// ============================================================
// PAIR CONFIGURATION
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PairConfig {
    /// Factory that registered this pair
    pub factory: Address,
    /// Token0 address (sorted: token0 < token1)
    pub token_0: Address,
    /// Token1 address
    pub token_1: Address,
}

// ============================================================
// PAIR STATE
// ============================================================

/// Token balances as of the last `mint`, `burn`, `swap` or `sync`
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Reserves {
    pub reserve_0: i128,
    pub reserve_1: i128,
}
