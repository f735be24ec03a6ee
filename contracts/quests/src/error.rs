use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum QuestsError {
    // Initialization (1-9)
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Shares (10-19)
    InvalidAmount = 10,
    InsufficientShares = 11,
    ZeroShares = 12,
}
