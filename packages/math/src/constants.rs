// Constants for the constant-product pools and the fee router.

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Share of the input that reaches the curve, in thousandths (0.3% fee)
pub const FEE_NUMERATOR: i128 = 997;

/// Fee denominator matching `FEE_NUMERATOR`
pub const FEE_DENOMINATOR: i128 = 1000;

/// Portion of the input retained by liquidity providers, in thousandths
pub const FEE_RETAINED: i128 = FEE_DENOMINATOR - FEE_NUMERATOR;

// ============================================================
// LIQUIDITY CONSTANTS
// ============================================================

/// Shares locked forever on the first deposit into a pair.
/// Keeps the share price from being driven to a value that makes
/// later deposits round to zero.
pub const MINIMUM_LIQUIDITY: i128 = 1000;
