use cosmwasm_std::{to_json_binary, Binary, Deps, StdResult};

use crate::state::{CONFIG, LAST_REQUEST_ID, REQUESTS, SUBSCRIPTIONS};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_subscription(deps: Deps, sub_id: u64) -> StdResult<Binary> {
    let subscription = SUBSCRIPTIONS.may_load(deps.storage, sub_id)?;
    to_json_binary(&subscription)
}

pub fn query_request(deps: Deps, request_id: u64) -> StdResult<Binary> {
    let request = REQUESTS.may_load(deps.storage, request_id)?;
    to_json_binary(&request)
}

pub fn query_latest_request_id(deps: Deps) -> StdResult<Binary> {
    let id = LAST_REQUEST_ID.may_load(deps.storage)?.unwrap_or(0);
    to_json_binary(&id)
}
