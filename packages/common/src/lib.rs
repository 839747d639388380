//! Common - Canonical Signing Messages for the Quorum Bridge
//!
//! This package builds the canonical 32-byte digests validators sign for each
//! quorum-gated bridge action. It is a pure crate with no ledger dependencies
//! so off-ledger signing tools can reproduce the exact digest the contract
//! verifies on submission.

pub mod message;

pub use message::{
    allowed_transfer_message, block_transfer_message, keccak256, lock_message,
    mintable_asset_message, recover_funds_message, reward_vote_message,
    rewards_and_lock_message, transaction_message, upgrade_message, validator_vote_message,
};
