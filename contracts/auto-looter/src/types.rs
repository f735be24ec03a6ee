//! AutoLooter type definitions

use soroban_sdk::{contracttype, Address};

// ============================================================
// LOOTER CONFIG
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LooterConfig {
    /// Pair factory used for every pool lookup
    pub factory: Address,
    /// Distribution vault receiving converted rewards
    pub quest: Address,
    /// Token everything is converted into
    pub reward_token: Address,
    /// Network base token, the default bridge
    pub base_token: Address,
    /// Owner of the authorized set
    pub owner: Address,
}

// ============================================================
// PATHS
// ============================================================

/// Which resolution rule produced a conversion path
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathKind {
    /// One side is the reward token
    Direct,
    /// One side is the base token
    BasePaired,
    /// Both sides meet at a common token first
    SharedBridge,
    /// Each side takes its own bridge to the reward token
    IndependentBridges,
}

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Looter config
    Config,
    /// Initialization flag
    Initialized,
    /// Bridge token by source token
    Bridge(Address),
    /// Authorization flag by account
    Authorized(Address),
    /// Reentrancy lock
    Locked,
}
