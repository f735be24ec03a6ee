use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    /// Account that initialized the vault
    pub admin: Address,
    /// Token staked in and paid out of the vault
    pub reward_token: Address,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
pub enum QuestsDataKey {
    Config,
    Initialized,
    TotalSupply,
    Balance(Address),
}
