// Pair error module for LootSwap

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PairError {
    // Initialization errors (100-199)
    /// Pair has already been initialized
    AlreadyInitialized = 100,
    /// Pair has not been initialized
    NotInitialized = 101,
    /// Both sides of the pair are the same token
    IdenticalTokens = 102,

    // Liquidity errors (200-299)
    /// Deposit too small to mint any shares
    InsufficientLiquidityMinted = 200,
    /// Burn would release nothing on at least one side
    InsufficientLiquidityBurned = 201,
    /// Requested output would empty a reserve
    InsufficientLiquidity = 202,

    // Swap errors (300-399)
    /// No output requested, or a negative output
    InsufficientOutputAmount = 300,
    /// Nothing was paid in before the swap
    InsufficientInputAmount = 301,
    /// Output recipient is one of the pair tokens
    InvalidTo = 302,
    /// Fee-adjusted constant product decreased
    KInvariant = 303,

    // Share ledger errors (400-499)
    /// Negative transfer amount
    InvalidAmount = 400,
    /// Sender holds fewer shares than requested
    InsufficientBalance = 401,
}
