//! AutoLooter error types

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum LooterError {
    // Initialization
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,

    // Access guard
    CallerMustBeExternal = 10,
    Reentrant = 11,
    Unauthorized = 12,

    // Bridge registry
    InvalidBridge = 20,

    // Conversion
    InvalidPair = 30,
    PairNotFound = 31,
    NoAvailablePath = 32,
    NothingToConvert = 33,
    BatchLengthMismatch = 34,

    // Swap
    InsufficientLiquidity = 40,
    InsufficientOutput = 41,

    // Arithmetic
    AmountOverflow = 50,
}
