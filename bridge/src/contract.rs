use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{governance, transfer};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{
    Config, ValidatorInfo, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, INIT_RUNS, PENDING_UPGRADE,
    PUBKEY_LEN, SIGNERS, VALIDATORS, VALIDATOR_COUNT,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.validators.is_empty() {
        return Err(StdError::generic_err("at least one validator is required").into());
    }

    CONFIG.save(
        deps.storage,
        &Config {
            chain_id: msg.chain_id,
            native_denom: msg.native_denom,
            validator_fee: msg.validator_fee,
            locked: false,
        },
    )?;

    let mut count: u32 = 0;
    for validator in msg.validators {
        if validator.pubkey.len() != PUBKEY_LEN {
            return Err(ContractError::InvalidPubkeyLength {});
        }
        let addr = deps.api.addr_validate(&validator.address)?;
        if VALIDATORS.has(deps.storage, &addr)
            || SIGNERS.has(deps.storage, validator.pubkey.as_slice())
        {
            return Err(ContractError::ValidatorAlreadyExists {});
        }
        VALIDATORS.save(
            deps.storage,
            &addr,
            &ValidatorInfo {
                pubkey: validator.pubkey.clone(),
            },
        )?;
        SIGNERS.save(deps.storage, validator.pubkey.as_slice(), &addr)?;
        count += 1;
    }
    VALIDATOR_COUNT.save(deps.storage, &count)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("validator_count", count.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::VoteValidator {
            vote_type,
            target,
            pubkey,
            nonce,
            signatures,
        } => governance::vote_validator(deps, info, vote_type, target, pubkey, nonce, signatures),
        ExecuteMsg::SetValidatorReward {
            value,
            nonce,
            signatures,
        } => governance::set_validator_reward(deps, info, value, nonce, signatures),
        ExecuteMsg::SetAllowedTransfer {
            source_chain,
            destination_chain,
            asset_in,
            asset_out,
            active,
            max_amount,
            nonce,
            signatures,
        } => governance::set_allowed_transfer(
            deps,
            info,
            source_chain,
            destination_chain,
            asset_in,
            asset_out,
            active,
            max_amount,
            nonce,
            signatures,
        ),
        ExecuteMsg::Lock { nonce, signatures } => governance::lock(deps, info, nonce, signatures),
        ExecuteMsg::SetRewardsAndLock {
            value,
            locked,
            nonce,
            signatures,
        } => governance::set_rewards_and_lock(deps, info, value, locked, nonce, signatures),
        ExecuteMsg::SetMintable {
            asset,
            mintable,
            nonce,
            signatures,
        } => governance::set_mintable(deps, info, asset, mintable, nonce, signatures),
        ExecuteMsg::InitiateTransfer {
            recipient,
            amount,
            source_chain,
            destination_chain,
            asset_in,
            asset_out,
        } => transfer::initiate_transfer(
            deps,
            env.contract.address,
            info,
            recipient,
            amount,
            source_chain,
            destination_chain,
            asset_in,
            asset_out,
        ),
        ExecuteMsg::CompleteTransfer {
            recipient,
            amount,
            source_chain,
            destination_chain,
            asset_in,
            asset_out,
            nonce,
            signatures,
        } => transfer::complete_transfer(
            deps,
            info,
            recipient,
            amount,
            source_chain,
            destination_chain,
            asset_in,
            asset_out,
            nonce,
            signatures,
        ),
        ExecuteMsg::RecoverFunds {
            recipient,
            amount,
            source_chain,
            destination_chain,
            asset_in,
            nonce,
            signatures,
        } => transfer::recover_funds(
            deps,
            info,
            recipient,
            amount,
            source_chain,
            destination_chain,
            asset_in,
            nonce,
            signatures,
        ),
        ExecuteMsg::BlockTransfer {
            source_chain,
            destination_chain,
            nonce,
            signatures,
        } => transfer::block_transfer(
            deps,
            info,
            source_chain,
            destination_chain,
            nonce,
            signatures,
        ),
        ExecuteMsg::Upgrade {
            new_code_id,
            init_id,
            nonce,
            signatures,
        } => governance::upgrade(deps, env, info, new_code_id, init_id, nonce, signatures),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query::config(deps)?),
        QueryMsg::Validator { address } => to_json_binary(&query::validator(deps, address)?),
        QueryMsg::Validators { start_after, limit } => {
            to_json_binary(&query::validators(deps, start_after, limit)?)
        }
        QueryMsg::Corridor {
            source_chain,
            destination_chain,
            asset_in,
        } => to_json_binary(&query::corridor(
            deps,
            source_chain,
            destination_chain,
            asset_in,
        )?),
        QueryMsg::Mintable { asset } => to_json_binary(&query::mintable(deps, asset)?),
        QueryMsg::ActionConsumed {
            category,
            scope,
            nonce,
        } => to_json_binary(&query::action_consumed(deps, category, scope, nonce)?),
        QueryMsg::ValidatorVoteMessage {
            vote_type,
            target,
            pubkey,
            nonce,
        } => to_json_binary(&Binary::from(common::validator_vote_message(
            vote_type,
            &target,
            pubkey.as_slice(),
            &nonce,
        ))),
        QueryMsg::RewardVoteMessage { value, nonce } => to_json_binary(&Binary::from(
            common::reward_vote_message(value.u128(), &nonce),
        )),
        QueryMsg::AllowedTransferMessage {
            source_chain,
            destination_chain,
            asset_in,
            asset_out,
            active,
            max_amount,
            nonce,
        } => to_json_binary(&Binary::from(common::allowed_transfer_message(
            &source_chain,
            &destination_chain,
            &asset_in,
            &asset_out,
            active,
            max_amount.u128(),
            &nonce,
        ))),
        QueryMsg::LockMessage { nonce } => {
            to_json_binary(&Binary::from(common::lock_message(&nonce)))
        }
        QueryMsg::RewardsAndLockMessage {
            value,
            locked,
            nonce,
        } => to_json_binary(&Binary::from(common::rewards_and_lock_message(
            value.u128(),
            locked,
            &nonce,
        ))),
        QueryMsg::MintableMessage {
            asset,
            mintable,
            nonce,
        } => to_json_binary(&Binary::from(common::mintable_asset_message(
            &asset, mintable, &nonce,
        ))),
        QueryMsg::TransferMessage {
            recipient,
            amount,
            source_chain,
            destination_chain,
            asset_in,
            asset_out,
            nonce,
        } => to_json_binary(&Binary::from(common::transaction_message(
            &recipient,
            amount.u128(),
            &source_chain,
            &destination_chain,
            &asset_in,
            &asset_out,
            &nonce,
        ))),
        QueryMsg::RecoverFundsMessage {
            recipient,
            amount,
            source_chain,
            destination_chain,
            asset_in,
            nonce,
        } => to_json_binary(&Binary::from(common::recover_funds_message(
            &recipient,
            amount.u128(),
            &source_chain,
            &destination_chain,
            &asset_in,
            &nonce,
        ))),
        QueryMsg::BlockTransferMessage {
            source_chain,
            destination_chain,
            nonce,
        } => to_json_binary(&Binary::from(common::block_transfer_message(
            &source_chain,
            &destination_chain,
            &nonce,
        ))),
        QueryMsg::UpgradeMessage { new_code_id, nonce } => to_json_binary(&Binary::from(
            common::upgrade_message(new_code_id, &nonce),
        )),
    }
}

/// Only reachable through a quorum-approved `Upgrade` action: the approval
/// flag must be present and is cleared here. Contract state other than the
/// version marker is left untouched.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    if PENDING_UPGRADE.may_load(deps.storage)?.is_none() {
        return Err(ContractError::UpgradeNotAuthorized {});
    }
    PENDING_UPGRADE.remove(deps.storage);
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let mut response = Response::new().add_attribute("action", "migrate");
    if let Some(init_id) = msg.init_id {
        if INIT_RUNS.has(deps.storage, &init_id) {
            return Err(ContractError::AlreadyInitialized {});
        }
        INIT_RUNS.save(deps.storage, &init_id, &true)?;
        response = response.add_attribute("init_id", init_id);
    }
    Ok(response)
}
