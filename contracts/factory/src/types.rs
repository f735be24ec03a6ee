//! Factory type definitions

use soroban_sdk::{contracttype, Address, BytesN};

// ============================================================
// FACTORY CONFIG
// ============================================================

/// Factory configuration
#[contracttype]
#[derive(Clone, Debug)]
pub struct FactoryConfig {
    pub admin: Address,
    pub pair_wasm_hash: BytesN<32>,
}
