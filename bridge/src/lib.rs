//! Validator-quorum-gated cross-chain asset bridge.
//!
//! A fixed registry of validators co-signs canonical message digests off
//! ledger; any validator can then submit the signatures to move the bridge:
//! completing inbound transfers, refunding or vetoing stuck ones, and
//! changing governance parameters. Every action consumes a nonce-scoped
//! slot in a replay ledger before it takes effect.

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod quorum;
pub mod state;

pub use crate::error::ContractError;
