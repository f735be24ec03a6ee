//! Access guard
//!
//! Every mutating entry point goes through [`enter`]: the `caller`
//! argument must be an account rather than a contract, must authorize
//! the call, and no other guarded call may be in progress.
//!
//! The host exposes no invoker or transaction origin, so only the
//! declared `caller` is checked. A contract that forwards an account
//! `caller` carrying non-root authorization passes the check; what it
//! cannot do is act as the caller itself.

use soroban_sdk::{xdr::ToXdr, Address, Env};

use crate::error::LooterError;
use crate::storage::{is_authorized, is_locked, set_locked};
use crate::types::LooterConfig;

/// Byte offset of the address kind inside an XDR-encoded address value
const ADDRESS_KIND_OFFSET: u32 = 7;
const ADDRESS_KIND_ACCOUNT: u8 = 0;

/// True when `address` belongs to an account, false for contracts
pub fn is_external(env: &Env, address: &Address) -> bool {
    address.clone().to_xdr(env).get(ADDRESS_KIND_OFFSET) == Some(ADDRESS_KIND_ACCOUNT)
}

pub fn require_external(env: &Env, caller: &Address) -> Result<(), LooterError> {
    if !is_external(env, caller) {
        return Err(LooterError::CallerMustBeExternal);
    }
    caller.require_auth();
    Ok(())
}

/// Owner or a member of the authorized set
pub fn require_authorized(
    env: &Env,
    config: &LooterConfig,
    account: &Address,
) -> Result<(), LooterError> {
    if *account == config.owner || is_authorized(env, account) {
        Ok(())
    } else {
        Err(LooterError::Unauthorized)
    }
}

/// Origin check plus reentrancy lock, released when the guard drops
pub fn enter<'a>(env: &'a Env, caller: &Address) -> Result<ReentrancyGuard<'a>, LooterError> {
    require_external(env, caller)?;
    ReentrancyGuard::acquire(env)
}

pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, LooterError> {
        if is_locked(env) {
            return Err(LooterError::Reentrant);
        }
        set_locked(env, true);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        set_locked(self.env, false);
    }
}
