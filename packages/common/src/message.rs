//! Canonical message digests for quorum-gated bridge actions.
//!
//! Every quorum-gated entry point verifies signatures over a deterministic
//! 32-byte keccak digest of the action's parameters and nonce. Each digest is
//! built from a fixed domain tag, a per-category tag, and the parameters in
//! call order, each field length-prefixed (u32 big-endian). The length
//! prefixes make the encoding injective: shifting a byte between adjacent
//! fields produces a different digest.
//!
//! Validators sign the digest directly as a prehash (secp256k1, 65-byte
//! r||s||v signatures). The contract exposes one read-only query per builder
//! so signers never have to reimplement this encoding.

use tiny_keccak::{Hasher, Keccak};

/// Domain separator, bumped on any encoding change.
const DOMAIN: &[u8] = b"quorum-bridge/v1";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Message for a validator add/remove vote.
///
/// `pubkey` is the new validator's uncompressed secp256k1 key for an add vote
/// and empty for a remove vote; binding it into the digest prevents a caller
/// from attaching a different signing key to an approved add.
pub fn validator_vote_message(vote_type: u8, target: &str, pubkey: &[u8], nonce: &str) -> [u8; 32] {
    digest(
        b"validator-vote",
        &[&[vote_type], target.as_bytes(), pubkey, nonce.as_bytes()],
    )
}

/// Message for a validator reward (fee) change vote.
pub fn reward_vote_message(value: u128, nonce: &str) -> [u8; 32] {
    digest(b"reward-vote", &[&value.to_be_bytes(), nonce.as_bytes()])
}

/// Message for a corridor whitelist vote.
#[allow(clippy::too_many_arguments)]
pub fn allowed_transfer_message(
    source_chain: &str,
    destination_chain: &str,
    asset_in: &str,
    asset_out: &str,
    active: bool,
    max_amount: u128,
    nonce: &str,
) -> [u8; 32] {
    digest(
        b"corridor-vote",
        &[
            source_chain.as_bytes(),
            destination_chain.as_bytes(),
            asset_in.as_bytes(),
            asset_out.as_bytes(),
            &[active as u8],
            &max_amount.to_be_bytes(),
            nonce.as_bytes(),
        ],
    )
}

/// Message for a plain lock (pause) vote.
pub fn lock_message(nonce: &str) -> [u8; 32] {
    digest(b"lock-vote", &[nonce.as_bytes()])
}

/// Message for a bundled fee change + lock/unlock vote.
pub fn rewards_and_lock_message(value: u128, locked: bool, nonce: &str) -> [u8; 32] {
    digest(
        b"lock-vote",
        &[&value.to_be_bytes(), &[locked as u8], nonce.as_bytes()],
    )
}

/// Message for a mintable-asset flag vote.
pub fn mintable_asset_message(asset: &str, mintable: bool, nonce: &str) -> [u8; 32] {
    digest(
        b"mintable-vote",
        &[asset.as_bytes(), &[mintable as u8], nonce.as_bytes()],
    )
}

/// Message for a transfer completion (the transaction message validators
/// co-sign after observing a `transfer_initiated` event on the source chain).
#[allow(clippy::too_many_arguments)]
pub fn transaction_message(
    recipient: &str,
    amount: u128,
    source_chain: &str,
    destination_chain: &str,
    asset_in: &str,
    asset_out: &str,
    nonce: &str,
) -> [u8; 32] {
    digest(
        b"transaction",
        &[
            recipient.as_bytes(),
            &amount.to_be_bytes(),
            source_chain.as_bytes(),
            destination_chain.as_bytes(),
            asset_in.as_bytes(),
            asset_out.as_bytes(),
            nonce.as_bytes(),
        ],
    )
}

/// Message for an administrative fund recovery.
pub fn recover_funds_message(
    recipient: &str,
    amount: u128,
    source_chain: &str,
    destination_chain: &str,
    asset_in: &str,
    nonce: &str,
) -> [u8; 32] {
    digest(
        b"recover-funds",
        &[
            recipient.as_bytes(),
            &amount.to_be_bytes(),
            source_chain.as_bytes(),
            destination_chain.as_bytes(),
            asset_in.as_bytes(),
            nonce.as_bytes(),
        ],
    )
}

/// Message for blocking a pending transfer nonce.
pub fn block_transfer_message(source_chain: &str, destination_chain: &str, nonce: &str) -> [u8; 32] {
    digest(
        b"block-transfer",
        &[
            source_chain.as_bytes(),
            destination_chain.as_bytes(),
            nonce.as_bytes(),
        ],
    )
}

/// Message authorizing a code upgrade to `new_code_id`.
pub fn upgrade_message(new_code_id: u64, nonce: &str) -> [u8; 32] {
    digest(
        b"upgrade-vote",
        &[&new_code_id.to_be_bytes(), nonce.as_bytes()],
    )
}

fn digest(tag: &[u8], fields: &[&[u8]]) -> [u8; 32] {
    let mut data = Vec::with_capacity(64 + fields.iter().map(|f| f.len() + 4).sum::<usize>());
    data.extend_from_slice(DOMAIN);
    push_field(&mut data, tag);
    for field in fields {
        push_field(&mut data, field);
    }
    keccak256(&data)
}

fn push_field(data: &mut Vec<u8>, field: &[u8]) {
    data.extend_from_slice(&(field.len() as u32).to_be_bytes());
    data.extend_from_slice(field);
}
