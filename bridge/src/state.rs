//! State definitions for the quorum bridge contract.
//!
//! Everything persisted here must survive a code upgrade unchanged: the
//! migrate entry point never rewrites these maps.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Scalar governance state, mutated only through quorum-gated votes.
#[cw_serde]
pub struct Config {
    /// This bridge's chain identity; `initiate` requires it as source and
    /// `complete`/`block` require it as destination.
    pub chain_id: String,
    /// Denom of the chain's native coin (the "native" asset identity).
    pub native_denom: String,
    /// Reward paid to each validator per initiated transfer.
    pub validator_fee: Uint128,
    /// Pause flag. While set, no transfer may be initiated and completions
    /// may only pay out to a current validator.
    pub locked: bool,
}

/// A whitelisted, directional transfer route.
///
/// Keyed by (source chain, destination chain, asset in); a route and its
/// reverse are independent entries.
#[cw_serde]
pub struct Corridor {
    pub active: bool,
    /// Asset released on the destination side of the route.
    pub asset_out: String,
    /// Maximum amount per transfer through this corridor.
    pub max_amount: Uint128,
}

/// A registered validator's signing key.
///
/// The validator's account address is the map key; the uncompressed (65-byte
/// SEC1) secp256k1 public key identifies its signatures.
#[cw_serde]
pub struct ValidatorInfo {
    pub pubkey: Binary,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:quorum-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Expected length of a stored validator public key (uncompressed SEC1).
pub const PUBKEY_LEN: usize = 65;

/// Expected length of a submitted signature (r || s || v).
pub const SIGNATURE_LEN: usize = 65;

// Action-ledger categories. `CAT_TRANSFER` is shared by completion, recovery
// and blocking: whichever consumes a (src/dst, nonce) pair first resolves it
// for all three.
pub const CAT_VALIDATOR_VOTE: &str = "validator-vote";
pub const CAT_REWARD_VOTE: &str = "reward-vote";
pub const CAT_CORRIDOR_VOTE: &str = "corridor-vote";
pub const CAT_LOCK_VOTE: &str = "lock-vote";
pub const CAT_MINTABLE_VOTE: &str = "mintable-vote";
pub const CAT_TRANSFER: &str = "transfer";
pub const CAT_UPGRADE_VOTE: &str = "upgrade-vote";

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Registered validators
/// Key: account address, Value: signing key
pub const VALIDATORS: Map<&Addr, ValidatorInfo> = Map::new("validators");

/// Number of registered validators (quorum denominator)
pub const VALIDATOR_COUNT: Item<u32> = Item::new("validator_count");

/// Reverse index for signature recovery
/// Key: uncompressed pubkey bytes, Value: validator address
pub const SIGNERS: Map<&[u8], Addr> = Map::new("signers");

/// Corridor whitelist
/// Key: (source chain, destination chain, asset in)
pub const CORRIDORS: Map<(&str, &str, &str), Corridor> = Map::new("corridors");

/// Nonce-scoped action ledger
/// Key: (category, scope key, nonce), Value: consumed
pub const ACTIONS: Map<(&str, &str, &str), bool> = Map::new("actions");

/// Assets released by mint and absorbed by burn instead of custody transfer
/// Key: asset identifier, Value: mintable flag
pub const MINTABLE: Map<&str, bool> = Map::new("mintable");

/// Set by a quorum-approved upgrade vote just before self-migration; the
/// migrate entry point rejects unless it is present.
pub const PENDING_UPGRADE: Item<u64> = Item::new("pending_upgrade");

/// One-shot post-upgrade initializers that have already run
/// Key: initializer id
pub const INIT_RUNS: Map<&str, bool> = Map::new("init_runs");

/// Scope key shared by transfer completion, fund recovery and blocking.
pub fn transfer_scope(source_chain: &str, destination_chain: &str) -> String {
    format!("{}/{}", source_chain, destination_chain)
}
