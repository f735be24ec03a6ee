// Factory error module for LootSwap

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    // Initialization errors (1000-1099)
    AlreadyInitialized = 1000,
    NotInitialized = 1001,

    // Pair creation errors (1100-1199)
    IdenticalTokens = 1100,
    PairExists = 1101,
    ForeignPair = 1102,
}
