use cosmwasm_std::{Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    ActionConsumedResponse, CorridorResponse, MintableResponse, ValidatorEntry,
    ValidatorResponse, ValidatorsResponse,
};
use crate::state::{Config, ACTIONS, CONFIG, CORRIDORS, MINTABLE, VALIDATORS, VALIDATOR_COUNT};

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

pub fn config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn validator(deps: Deps, address: String) -> StdResult<ValidatorResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let info = VALIDATORS.may_load(deps.storage, &addr)?;
    Ok(ValidatorResponse {
        registered: info.is_some(),
        pubkey: info.map(|v| v.pubkey),
    })
}

pub fn validators(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ValidatorsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start.as_ref().map(Bound::exclusive);

    let validators = VALIDATORS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (addr, info) = item?;
            Ok(ValidatorEntry {
                address: addr.to_string(),
                pubkey: info.pubkey,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ValidatorsResponse {
        validators,
        count: VALIDATOR_COUNT.load(deps.storage)?,
    })
}

pub fn corridor(
    deps: Deps,
    source_chain: String,
    destination_chain: String,
    asset_in: String,
) -> StdResult<CorridorResponse> {
    let corridor =
        CORRIDORS.may_load(deps.storage, (&source_chain, &destination_chain, &asset_in))?;
    Ok(CorridorResponse { corridor })
}

pub fn mintable(deps: Deps, asset: String) -> StdResult<MintableResponse> {
    Ok(MintableResponse {
        mintable: MINTABLE.may_load(deps.storage, &asset)?.unwrap_or(false),
    })
}

pub fn action_consumed(
    deps: Deps,
    category: String,
    scope: String,
    nonce: String,
) -> StdResult<ActionConsumedResponse> {
    Ok(ActionConsumedResponse {
        consumed: ACTIONS.has(deps.storage, (&category, &scope, &nonce)),
    })
}
