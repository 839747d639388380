//! Quorum verification over recoverable secp256k1 signatures.
//!
//! A submitted approval is a list of 65-byte `r || s || v` signatures over a
//! canonical message digest. Each signature is resolved to a registered
//! validator through pubkey recovery; signatures from unregistered keys are
//! discarded. The approval passes when the distinct validators found form a
//! strict majority of the current registry.

use std::collections::BTreeSet;

use cosmwasm_std::{Addr, Binary, Deps};

use crate::error::ContractError;
use crate::state::{SIGNATURE_LEN, SIGNERS, VALIDATOR_COUNT};

/// Strict majority of `total`: more than half, i.e. `total / 2 + 1`.
pub fn quorum_threshold(total: u32) -> u32 {
    total / 2 + 1
}

/// Recover the signer of a single `r || s || v` signature.
///
/// Returns the uncompressed 65-byte public key. Accepts both raw recovery
/// ids (0/1) and the 27/28 convention used by off-ledger signing tools.
fn recover_pubkey(
    deps: Deps,
    digest: &[u8],
    signature: &[u8],
) -> Result<Vec<u8>, ContractError> {
    if signature.len() != SIGNATURE_LEN {
        return Err(ContractError::InvalidSignatures {});
    }
    let mut v = signature[64];
    if v >= 27 {
        v -= 27;
    }
    deps.api
        .secp256k1_recover_pubkey(digest, &signature[..64], v)
        .map_err(|_| ContractError::InvalidSignatures {})
}

/// Verify that `signatures` over `digest` carry a strict majority of the
/// registered validators. Duplicate signatures from the same validator count
/// once; signatures that do not resolve to a registered signer are discarded.
pub fn verify_quorum(
    deps: Deps,
    digest: &[u8],
    signatures: &[Binary],
) -> Result<(), ContractError> {
    let total = VALIDATOR_COUNT.load(deps.storage)?;
    let needed = quorum_threshold(total);

    let mut approvers: BTreeSet<Addr> = BTreeSet::new();
    for signature in signatures {
        let pubkey = recover_pubkey(deps, digest, signature.as_slice())?;
        if let Some(validator) = SIGNERS.may_load(deps.storage, &pubkey)? {
            approvers.insert(validator);
        }
    }

    if (approvers.len() as u32) < needed {
        return Err(ContractError::InvalidSignatures {});
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict_majority() {
        assert_eq!(quorum_threshold(1), 1);
        assert_eq!(quorum_threshold(2), 2);
        assert_eq!(quorum_threshold(3), 2);
        assert_eq!(quorum_threshold(4), 3);
        assert_eq!(quorum_threshold(5), 3);
        assert_eq!(quorum_threshold(10), 6);
    }
}
