use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

use crate::state::{Config, Corridor};

/// A validator seeded at instantiation.
#[cw_serde]
pub struct ValidatorSpec {
    pub address: String,
    /// Uncompressed (65-byte SEC1) secp256k1 public key.
    pub pubkey: Binary,
}

#[cw_serde]
pub struct InstantiateMsg {
    /// This bridge's chain identity.
    pub chain_id: String,
    /// Denom treated as the native asset.
    pub native_denom: String,
    /// Initial per-transfer reward paid to each validator.
    pub validator_fee: Uint128,
    /// Initial validator set. Must be non-empty.
    pub validators: Vec<ValidatorSpec>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Add (vote_type 1) or remove (vote_type 2) a validator.
    VoteValidator {
        vote_type: u8,
        target: String,
        pubkey: Binary,
        nonce: String,
        signatures: Vec<Binary>,
    },
    /// Set the per-transfer validator reward.
    SetValidatorReward {
        value: Uint128,
        nonce: String,
        signatures: Vec<Binary>,
    },
    /// Create or update a corridor.
    SetAllowedTransfer {
        source_chain: String,
        destination_chain: String,
        asset_in: String,
        asset_out: String,
        active: bool,
        max_amount: Uint128,
        nonce: String,
        signatures: Vec<Binary>,
    },
    /// Pause the bridge.
    Lock {
        nonce: String,
        signatures: Vec<Binary>,
    },
    /// Set the validator reward and the pause flag in one action.
    SetRewardsAndLock {
        value: Uint128,
        locked: bool,
        nonce: String,
        signatures: Vec<Binary>,
    },
    /// Mark an asset as mint-and-burn instead of custody.
    SetMintable {
        asset: String,
        mintable: bool,
        nonce: String,
        signatures: Vec<Binary>,
    },
    /// Start an outbound transfer. Native transfers carry funds with the
    /// message; token transfers pull via a prior allowance.
    InitiateTransfer {
        recipient: String,
        amount: Uint128,
        source_chain: String,
        destination_chain: String,
        asset_in: String,
        asset_out: String,
    },
    /// Release an inbound transfer to its recipient.
    CompleteTransfer {
        recipient: String,
        amount: Uint128,
        source_chain: String,
        destination_chain: String,
        asset_in: String,
        asset_out: String,
        nonce: String,
        signatures: Vec<Binary>,
    },
    /// Refund an outbound transfer that failed on the destination side.
    /// Administrative: releases custodied funds without a corridor check.
    RecoverFunds {
        recipient: String,
        amount: Uint128,
        source_chain: String,
        destination_chain: String,
        asset_in: String,
        nonce: String,
        signatures: Vec<Binary>,
    },
    /// Veto an inbound transfer before it is completed.
    BlockTransfer {
        source_chain: String,
        destination_chain: String,
        nonce: String,
        signatures: Vec<Binary>,
    },
    /// Authorize and trigger a self-migration to `new_code_id`.
    Upgrade {
        new_code_id: u64,
        /// One-shot initializer to run in the new code, if any.
        init_id: Option<String>,
        nonce: String,
        signatures: Vec<Binary>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    #[returns(ValidatorResponse)]
    Validator { address: String },

    #[returns(ValidatorsResponse)]
    Validators {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(CorridorResponse)]
    Corridor {
        source_chain: String,
        destination_chain: String,
        asset_in: String,
    },

    #[returns(MintableResponse)]
    Mintable { asset: String },

    #[returns(ActionConsumedResponse)]
    ActionConsumed {
        category: String,
        scope: String,
        nonce: String,
    },

    /// Digest an off-ledger signer must sign to approve a validator vote.
    #[returns(Binary)]
    ValidatorVoteMessage {
        vote_type: u8,
        target: String,
        pubkey: Binary,
        nonce: String,
    },

    #[returns(Binary)]
    RewardVoteMessage { value: Uint128, nonce: String },

    #[returns(Binary)]
    AllowedTransferMessage {
        source_chain: String,
        destination_chain: String,
        asset_in: String,
        asset_out: String,
        active: bool,
        max_amount: Uint128,
        nonce: String,
    },

    #[returns(Binary)]
    LockMessage { nonce: String },

    #[returns(Binary)]
    RewardsAndLockMessage {
        value: Uint128,
        locked: bool,
        nonce: String,
    },

    #[returns(Binary)]
    MintableMessage {
        asset: String,
        mintable: bool,
        nonce: String,
    },

    #[returns(Binary)]
    TransferMessage {
        recipient: String,
        amount: Uint128,
        source_chain: String,
        destination_chain: String,
        asset_in: String,
        asset_out: String,
        nonce: String,
    },

    #[returns(Binary)]
    RecoverFundsMessage {
        recipient: String,
        amount: Uint128,
        source_chain: String,
        destination_chain: String,
        asset_in: String,
        nonce: String,
    },

    #[returns(Binary)]
    BlockTransferMessage {
        source_chain: String,
        destination_chain: String,
        nonce: String,
    },

    #[returns(Binary)]
    UpgradeMessage { new_code_id: u64, nonce: String },
}

#[cw_serde]
pub struct MigrateMsg {
    /// Optional one-shot initializer to run after the code swap. Running the
    /// same initializer twice fails.
    pub init_id: Option<String>,
}

#[cw_serde]
pub struct ValidatorResponse {
    pub registered: bool,
    pub pubkey: Option<Binary>,
}

#[cw_serde]
pub struct ValidatorEntry {
    pub address: String,
    pub pubkey: Binary,
}

#[cw_serde]
pub struct ValidatorsResponse {
    pub validators: Vec<ValidatorEntry>,
    pub count: u32,
}

#[cw_serde]
pub struct CorridorResponse {
    pub corridor: Option<Corridor>,
}

#[cw_serde]
pub struct MintableResponse {
    pub mintable: bool,
}

#[cw_serde]
pub struct ActionConsumedResponse {
    pub consumed: bool,
}
