// LootSwap Math Package

#![no_std]

pub mod constants;
pub mod amm;
pub mod wide;

pub use constants::*;

// Constant-product pricing
pub use amm::{get_amount_out, k_invariant_holds, liquidity_for_deposit, amounts_for_burn};

// 256-bit helpers
pub use wide::{mul_div, sqrt_product};
