//! Quorum-gated governance actions: validator set changes, reward and
//! pause management, corridor and mintable-asset whitelisting, upgrades.

use cosmwasm_std::{
    to_json_binary, Binary, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};

use crate::error::ContractError;
use crate::execute::{consume_action, ensure_validator};
use crate::msg::MigrateMsg;
use crate::quorum::verify_quorum;
use crate::state::{
    Corridor, ValidatorInfo, CAT_CORRIDOR_VOTE, CAT_LOCK_VOTE, CAT_MINTABLE_VOTE,
    CAT_REWARD_VOTE, CAT_UPGRADE_VOTE, CAT_VALIDATOR_VOTE, CONFIG, CORRIDORS, MINTABLE,
    PENDING_UPGRADE, PUBKEY_LEN, SIGNERS, VALIDATORS, VALIDATOR_COUNT,
};

pub const VOTE_ADD: u8 = 1;
pub const VOTE_REMOVE: u8 = 2;

/// Add or remove a validator. The signing key is bound into the digest so a
/// quorum approves the exact (address, key) pair being registered.
#[allow(clippy::too_many_arguments)]
pub fn vote_validator(
    deps: DepsMut,
    info: MessageInfo,
    vote_type: u8,
    target: String,
    pubkey: Binary,
    nonce: String,
    signatures: Vec<Binary>,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info.sender)?;

    if vote_type != VOTE_ADD && vote_type != VOTE_REMOVE {
        return Err(ContractError::InvalidVote {});
    }
    if vote_type == VOTE_ADD && pubkey.len() != PUBKEY_LEN {
        return Err(ContractError::InvalidPubkeyLength {});
    }
    let target_addr = deps.api.addr_validate(&target)?;

    let digest = common::validator_vote_message(vote_type, &target, pubkey.as_slice(), &nonce);
    verify_quorum(deps.as_ref(), &digest, &signatures)?;
    let scope = format!("{}/{}", vote_type, target);
    consume_action(
        deps.storage,
        CAT_VALIDATOR_VOTE,
        &scope,
        &nonce,
        ContractError::AlreadyVoted {},
    )?;

    let mut count = VALIDATOR_COUNT.load(deps.storage)?;
    match vote_type {
        VOTE_ADD => {
            if VALIDATORS.has(deps.storage, &target_addr)
                || SIGNERS.has(deps.storage, pubkey.as_slice())
            {
                return Err(ContractError::ValidatorAlreadyExists {});
            }
            VALIDATORS.save(
                deps.storage,
                &target_addr,
                &ValidatorInfo {
                    pubkey: pubkey.clone(),
                },
            )?;
            SIGNERS.save(deps.storage, pubkey.as_slice(), &target_addr)?;
            count += 1;
        }
        _ => {
            let registered = VALIDATORS
                .may_load(deps.storage, &target_addr)?
                .ok_or(ContractError::NotAValidator {})?;
            if count <= 1 {
                return Err(ContractError::CannotRemoveLastValidator {});
            }
            VALIDATORS.remove(deps.storage, &target_addr);
            SIGNERS.remove(deps.storage, registered.pubkey.as_slice());
            count -= 1;
        }
    }
    VALIDATOR_COUNT.save(deps.storage, &count)?;

    Ok(Response::new()
        .add_attribute("action", "vote_validator")
        .add_attribute("vote_type", vote_type.to_string())
        .add_attribute("target", target)
        .add_attribute("validator_count", count.to_string()))
}

pub fn set_validator_reward(
    deps: DepsMut,
    info: MessageInfo,
    value: Uint128,
    nonce: String,
    signatures: Vec<Binary>,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info.sender)?;

    let digest = common::reward_vote_message(value.u128(), &nonce);
    verify_quorum(deps.as_ref(), &digest, &signatures)?;
    consume_action(
        deps.storage,
        CAT_REWARD_VOTE,
        "",
        &nonce,
        ContractError::VoteAlreadyCast {},
    )?;

    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.validator_fee = value;
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_validator_reward")
        .add_attribute("value", value))
}

#[allow(clippy::too_many_arguments)]
pub fn set_allowed_transfer(
    deps: DepsMut,
    info: MessageInfo,
    source_chain: String,
    destination_chain: String,
    asset_in: String,
    asset_out: String,
    active: bool,
    max_amount: Uint128,
    nonce: String,
    signatures: Vec<Binary>,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info.sender)?;

    let digest = common::allowed_transfer_message(
        &source_chain,
        &destination_chain,
        &asset_in,
        &asset_out,
        active,
        max_amount.u128(),
        &nonce,
    );
    verify_quorum(deps.as_ref(), &digest, &signatures)?;

    let scope = format!("{}/{}/{}", source_chain, destination_chain, asset_in);
    consume_action(
        deps.storage,
        CAT_CORRIDOR_VOTE,
        &scope,
        &nonce,
        ContractError::TransferVoteAlreadyCast {},
    )?;

    CORRIDORS.save(
        deps.storage,
        (&source_chain, &destination_chain, &asset_in),
        &Corridor {
            active,
            asset_out: asset_out.clone(),
            max_amount,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "set_allowed_transfer")
        .add_attribute("source_chain", source_chain)
        .add_attribute("destination_chain", destination_chain)
        .add_attribute("asset_in", asset_in)
        .add_attribute("asset_out", asset_out)
        .add_attribute("active", active.to_string())
        .add_attribute("max_amount", max_amount))
}

pub fn lock(
    deps: DepsMut,
    info: MessageInfo,
    nonce: String,
    signatures: Vec<Binary>,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info.sender)?;

    let digest = common::lock_message(&nonce);
    verify_quorum(deps.as_ref(), &digest, &signatures)?;
    consume_action(
        deps.storage,
        CAT_LOCK_VOTE,
        "",
        &nonce,
        ContractError::VoteAlreadyCast {},
    )?;

    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.locked = true;
        Ok(config)
    })?;

    Ok(Response::new().add_attribute("action", "lock"))
}

pub fn set_rewards_and_lock(
    deps: DepsMut,
    info: MessageInfo,
    value: Uint128,
    locked: bool,
    nonce: String,
    signatures: Vec<Binary>,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info.sender)?;

    let digest = common::rewards_and_lock_message(value.u128(), locked, &nonce);
    verify_quorum(deps.as_ref(), &digest, &signatures)?;
    consume_action(
        deps.storage,
        CAT_LOCK_VOTE,
        "",
        &nonce,
        ContractError::VoteAlreadyCast {},
    )?;

    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.validator_fee = value;
        config.locked = locked;
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_rewards_and_lock")
        .add_attribute("value", value)
        .add_attribute("locked", locked.to_string()))
}

pub fn set_mintable(
    deps: DepsMut,
    info: MessageInfo,
    asset: String,
    mintable: bool,
    nonce: String,
    signatures: Vec<Binary>,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info.sender)?;

    let digest = common::mintable_asset_message(&asset, mintable, &nonce);
    verify_quorum(deps.as_ref(), &digest, &signatures)?;
    consume_action(
        deps.storage,
        CAT_MINTABLE_VOTE,
        &asset,
        &nonce,
        ContractError::VoteAlreadyCast {},
    )?;

    MINTABLE.save(deps.storage, &asset, &mintable)?;

    Ok(Response::new()
        .add_attribute("action", "set_mintable")
        .add_attribute("asset", asset)
        .add_attribute("mintable", mintable.to_string()))
}

/// Record quorum approval for a code swap and trigger the migration on
/// this contract. The contract must be its own wasm admin; migrate will
/// refuse to run unless the approval flag is set.
pub fn upgrade(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_code_id: u64,
    init_id: Option<String>,
    nonce: String,
    signatures: Vec<Binary>,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info.sender)?;

    let digest = common::upgrade_message(new_code_id, &nonce);
    verify_quorum(deps.as_ref(), &digest, &signatures)?;
    consume_action(
        deps.storage,
        CAT_UPGRADE_VOTE,
        "",
        &nonce,
        ContractError::VoteAlreadyCast {},
    )?;

    PENDING_UPGRADE.save(deps.storage, &new_code_id)?;

    let migrate = WasmMsg::Migrate {
        contract_addr: env.contract.address.to_string(),
        new_code_id,
        msg: to_json_binary(&MigrateMsg { init_id })?,
    };

    Ok(Response::new()
        .add_message(migrate)
        .add_attribute("action", "upgrade")
        .add_attribute("new_code_id", new_code_id.to_string()))
}
