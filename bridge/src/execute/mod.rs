//! Execute handlers, split into user-facing transfer flow and
//! quorum-gated governance actions.

pub mod governance;
pub mod transfer;

use cosmwasm_std::{Addr, Deps, Storage};

use crate::error::ContractError;
use crate::state::{ACTIONS, VALIDATORS};

/// Every quorum-gated entry point requires the caller itself to be a
/// registered validator, independently of the signatures it submits.
pub fn ensure_validator(deps: Deps, caller: &Addr) -> Result<(), ContractError> {
    if !VALIDATORS.has(deps.storage, caller) {
        return Err(ContractError::NotAValidator {});
    }
    Ok(())
}

/// Consume a (category, scope, nonce) slot in the action ledger, failing
/// with `already` if a previous action claimed it. Must run before any
/// state change or outgoing message of the action it guards.
pub fn consume_action(
    storage: &mut dyn Storage,
    category: &str,
    scope: &str,
    nonce: &str,
    already: ContractError,
) -> Result<(), ContractError> {
    if ACTIONS.has(storage, (category, scope, nonce)) {
        return Err(already);
    }
    ACTIONS.save(storage, (category, scope, nonce), &true)?;
    Ok(())
}

/// Foreign recipient identifiers are opaque strings; empty or all-zero
/// values are rejected as the zero address.
pub fn is_zero_address(value: &str) -> bool {
    let hex = value.strip_prefix("0x").unwrap_or(value);
    hex.is_empty() || hex.chars().all(|c| c == '0')
}
