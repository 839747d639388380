//! The transfer flow: outbound initiation by users, inbound completion,
//! refund and veto by the validator quorum.

use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, Binary, CosmosMsg, Deps, DepsMut, MessageInfo,
    Order, QuerierWrapper, Response, Uint128, WasmMsg,
};
use cw20::{AllowanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;
use crate::execute::{consume_action, ensure_validator, is_zero_address};
use crate::quorum::verify_quorum;
use crate::state::{
    transfer_scope, Config, CAT_TRANSFER, CONFIG, CORRIDORS, MINTABLE, VALIDATORS,
    VALIDATOR_COUNT,
};

/// A corridor permits a transfer when it is active, releases the claimed
/// output asset, and the amount is within its per-transfer cap.
fn check_corridor(
    deps: Deps,
    source_chain: &str,
    destination_chain: &str,
    asset_in: &str,
    asset_out: &str,
    amount: Uint128,
) -> Result<(), ContractError> {
    let corridor = CORRIDORS
        .may_load(deps.storage, (source_chain, destination_chain, asset_in))?
        .ok_or(ContractError::TransferNotAllowed {})?;
    if !corridor.active || corridor.asset_out != asset_out || amount > corridor.max_amount {
        return Err(ContractError::TransferNotAllowed {});
    }
    Ok(())
}

fn attached_native(info: &MessageInfo, denom: &str) -> Uint128 {
    info.funds
        .iter()
        .filter(|coin| coin.denom == denom)
        .map(|coin| coin.amount)
        .sum()
}

/// Build the message that releases `amount` of `asset` to `recipient`:
/// a bank send for the native coin, a mint for mint-and-burn assets, a
/// custody transfer otherwise.
fn release_msg(
    deps: Deps,
    config: &Config,
    recipient: &Addr,
    asset: &str,
    amount: Uint128,
) -> Result<CosmosMsg, ContractError> {
    if asset == config.native_denom {
        return Ok(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: coins(amount.u128(), &config.native_denom),
        }
        .into());
    }
    let mintable = MINTABLE
        .may_load(deps.storage, asset)?
        .unwrap_or(false);
    let msg = if mintable {
        Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        }
    } else {
        Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        }
    };
    Ok(WasmMsg::Execute {
        contract_addr: asset.to_string(),
        msg: to_json_binary(&msg)?,
        funds: vec![],
    }
    .into())
}

fn cw20_allowance(
    querier: &QuerierWrapper,
    token: &str,
    owner: &Addr,
    spender: &Addr,
) -> Result<Uint128, ContractError> {
    let response: AllowanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Allowance {
            owner: owner.to_string(),
            spender: spender.to_string(),
        },
    )?;
    Ok(response.allowance)
}

/// Start an outbound transfer. The caller pays the per-validator reward in
/// native coin on top of the transferred amount; any surplus native funds
/// are returned.
#[allow(clippy::too_many_arguments)]
pub fn initiate_transfer(
    deps: DepsMut,
    contract: Addr,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
    source_chain: String,
    destination_chain: String,
    asset_in: String,
    asset_out: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.locked {
        return Err(ContractError::BridgeLocked {});
    }
    if is_zero_address(&recipient) {
        return Err(ContractError::ZeroRecipient {});
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }
    if source_chain != config.chain_id {
        return Err(ContractError::InvalidSourceChain {});
    }
    check_corridor(
        deps.as_ref(),
        &source_chain,
        &destination_chain,
        &asset_in,
        &asset_out,
        amount,
    )?;
    // Only the native coin is accepted as a deposit; anything else would sit
    // in the contract with no path back out.
    if info
        .funds
        .iter()
        .any(|coin| coin.denom != config.native_denom)
    {
        return Err(ContractError::UnsupportedDenom {});
    }

    let validator_count = VALIDATOR_COUNT.load(deps.storage)?;
    let fee_total = config.validator_fee * Uint128::from(validator_count);
    let attached = attached_native(&info, &config.native_denom);

    let mut messages: Vec<CosmosMsg> = vec![];
    let required = if asset_in == config.native_denom {
        amount + fee_total
    } else {
        fee_total
    };
    if attached < required {
        return Err(ContractError::InsufficientFundsOrAllowance {});
    }

    if asset_in != config.native_denom {
        let allowance = cw20_allowance(&deps.querier, &asset_in, &info.sender, &contract)?;
        if allowance < amount {
            return Err(ContractError::InsufficientFundsOrAllowance {});
        }
        let mintable = MINTABLE
            .may_load(deps.storage, &asset_in)?
            .unwrap_or(false);
        let pull = if mintable {
            Cw20ExecuteMsg::BurnFrom {
                owner: info.sender.to_string(),
                amount,
            }
        } else {
            Cw20ExecuteMsg::TransferFrom {
                owner: info.sender.to_string(),
                recipient: contract.to_string(),
                amount,
            }
        };
        messages.push(
            WasmMsg::Execute {
                contract_addr: asset_in.clone(),
                msg: to_json_binary(&pull)?,
                funds: vec![],
            }
            .into(),
        );
    }

    // Reward every current validator, then return any surplus deposit.
    if !config.validator_fee.is_zero() {
        let validators: Vec<Addr> = VALIDATORS
            .keys(deps.storage, None, None, Order::Ascending)
            .collect::<Result<_, _>>()?;
        for validator in validators {
            messages.push(
                BankMsg::Send {
                    to_address: validator.to_string(),
                    amount: coins(config.validator_fee.u128(), &config.native_denom),
                }
                .into(),
            );
        }
    }
    let surplus = attached - required;
    if !surplus.is_zero() {
        messages.push(
            BankMsg::Send {
                to_address: info.sender.to_string(),
                amount: coins(surplus.u128(), &config.native_denom),
            }
            .into(),
        );
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "initiate_transfer")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("source_chain", source_chain)
        .add_attribute("destination_chain", destination_chain)
        .add_attribute("asset_in", asset_in)
        .add_attribute("asset_out", asset_out))
}

/// Release an inbound transfer approved by the quorum. Consumes the
/// transfer's ledger slot before releasing funds, so a replay or a
/// prior veto of the same slot fails here.
#[allow(clippy::too_many_arguments)]
pub fn complete_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
    source_chain: String,
    destination_chain: String,
    asset_in: String,
    asset_out: String,
    nonce: String,
    signatures: Vec<Binary>,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info.sender)?;
    let config = CONFIG.load(deps.storage)?;

    if is_zero_address(&recipient) {
        return Err(ContractError::ZeroRecipient {});
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }
    if destination_chain != config.chain_id {
        return Err(ContractError::InvalidDestinationChain {});
    }
    check_corridor(
        deps.as_ref(),
        &source_chain,
        &destination_chain,
        &asset_in,
        &asset_out,
        amount,
    )?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;
    if config.locked && !VALIDATORS.has(deps.storage, &recipient_addr) {
        return Err(ContractError::RecipientNotAValidator {});
    }

    let digest = common::transaction_message(
        &recipient,
        amount.u128(),
        &source_chain,
        &destination_chain,
        &asset_in,
        &asset_out,
        &nonce,
    );
    verify_quorum(deps.as_ref(), &digest, &signatures)?;

    let scope = transfer_scope(&source_chain, &destination_chain);
    consume_action(
        deps.storage,
        CAT_TRANSFER,
        &scope,
        &nonce,
        ContractError::TransferAlreadyCompleted {},
    )?;

    let release = release_msg(deps.as_ref(), &config, &recipient_addr, &asset_out, amount)?;

    Ok(Response::new()
        .add_message(release)
        .add_attribute("action", "complete_transfer")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("source_chain", source_chain)
        .add_attribute("destination_chain", destination_chain)
        .add_attribute("asset_out", asset_out)
        .add_attribute("nonce", nonce)
        .add_attribute("digest", hex::encode(digest)))
}

/// Refund an outbound transfer that never landed: pays the input asset
/// back to the original sender on this, the source, side. An administrative
/// release, so the corridor is not consulted; the escrow may well have
/// happened through a corridor that has since been deactivated.
#[allow(clippy::too_many_arguments)]
pub fn recover_funds(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
    source_chain: String,
    destination_chain: String,
    asset_in: String,
    nonce: String,
    signatures: Vec<Binary>,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info.sender)?;
    let config = CONFIG.load(deps.storage)?;

    if is_zero_address(&recipient) {
        return Err(ContractError::ZeroRecipient {});
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }
    if source_chain != config.chain_id {
        return Err(ContractError::InvalidSourceChain {});
    }
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let digest = common::recover_funds_message(
        &recipient,
        amount.u128(),
        &source_chain,
        &destination_chain,
        &asset_in,
        &nonce,
    );
    verify_quorum(deps.as_ref(), &digest, &signatures)?;

    let scope = transfer_scope(&source_chain, &destination_chain);
    consume_action(
        deps.storage,
        CAT_TRANSFER,
        &scope,
        &nonce,
        ContractError::TransferAlreadyCompleted {},
    )?;

    let release = release_msg(deps.as_ref(), &config, &recipient_addr, &asset_in, amount)?;

    Ok(Response::new()
        .add_message(release)
        .add_attribute("action", "recover_funds")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("source_chain", source_chain)
        .add_attribute("destination_chain", destination_chain)
        .add_attribute("asset_in", asset_in)
        .add_attribute("nonce", nonce)
        .add_attribute("digest", hex::encode(digest)))
}

/// Veto an inbound transfer by consuming its ledger slot before any
/// completion can. A later completion of the same slot fails as already
/// resolved.
pub fn block_transfer(
    deps: DepsMut,
    info: MessageInfo,
    source_chain: String,
    destination_chain: String,
    nonce: String,
    signatures: Vec<Binary>,
) -> Result<Response, ContractError> {
    ensure_validator(deps.as_ref(), &info.sender)?;
    let config = CONFIG.load(deps.storage)?;

    if destination_chain != config.chain_id {
        return Err(ContractError::InvalidDestinationChain {});
    }

    let digest = common::block_transfer_message(&source_chain, &destination_chain, &nonce);
    verify_quorum(deps.as_ref(), &digest, &signatures)?;

    let scope = transfer_scope(&source_chain, &destination_chain);
    consume_action(
        deps.storage,
        CAT_TRANSFER,
        &scope,
        &nonce,
        ContractError::TransferAlreadyBlocked {},
    )?;

    Ok(Response::new()
        .add_attribute("action", "block_transfer")
        .add_attribute("source_chain", source_chain)
        .add_attribute("destination_chain", destination_chain)
        .add_attribute("nonce", nonce)
        .add_attribute("digest", hex::encode(digest)))
}
