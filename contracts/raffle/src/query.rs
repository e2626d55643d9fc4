use cosmwasm_std::{coin, to_json_binary, Binary, Deps, Env, Order};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::ledger;
use crate::msg::RoundHistoryResponse;
use crate::state::{CONFIG, RAFFLE, ROUNDS};
use crate::upkeep;

pub fn query_config(deps: Deps) -> Result<Binary, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(to_json_binary(&config)?)
}

pub fn query_raffle_info(deps: Deps) -> Result<Binary, ContractError> {
    let raffle = RAFFLE.load(deps.storage)?;
    Ok(to_json_binary(&raffle)?)
}

pub fn query_raffle_state(deps: Deps) -> Result<Binary, ContractError> {
    let raffle = RAFFLE.load(deps.storage)?;
    Ok(to_json_binary(&raffle.state)?)
}

pub fn query_entrance_fee(deps: Deps) -> Result<Binary, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(to_json_binary(&coin(config.entrance_fee.u128(), config.denom))?)
}

pub fn query_interval(deps: Deps) -> Result<Binary, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(to_json_binary(&config.interval_seconds)?)
}

pub fn query_num_players(deps: Deps) -> Result<Binary, ContractError> {
    let raffle = RAFFLE.load(deps.storage)?;
    Ok(to_json_binary(&raffle.num_players)?)
}

pub fn query_player(deps: Deps, index: u32) -> Result<Binary, ContractError> {
    let raffle = RAFFLE.load(deps.storage)?;
    let player = ledger::player_at(deps.storage, &raffle, index)?;
    Ok(to_json_binary(&player)?)
}

pub fn query_pool(deps: Deps) -> Result<Binary, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let raffle = RAFFLE.load(deps.storage)?;
    Ok(to_json_binary(&coin(raffle.pool.u128(), config.denom))?)
}

pub fn query_recent_winner(deps: Deps) -> Result<Binary, ContractError> {
    let raffle = RAFFLE.load(deps.storage)?;
    Ok(to_json_binary(&raffle.recent_winner)?)
}

pub fn query_last_draw_time(deps: Deps) -> Result<Binary, ContractError> {
    let raffle = RAFFLE.load(deps.storage)?;
    Ok(to_json_binary(&raffle.last_draw_time)?)
}

pub fn query_pending_request(deps: Deps) -> Result<Binary, ContractError> {
    let raffle = RAFFLE.load(deps.storage)?;
    Ok(to_json_binary(&raffle.pending_request)?)
}

/// Evaluated at the current block time.
pub fn query_check_upkeep(deps: Deps, env: Env) -> Result<Binary, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let raffle = RAFFLE.load(deps.storage)?;
    Ok(to_json_binary(&upkeep::check_upkeep(
        &config,
        &raffle,
        env.block.time,
    ))?)
}

pub fn query_round(deps: Deps, round: u64) -> Result<Binary, ContractError> {
    let result = ROUNDS.may_load(deps.storage, round)?;
    Ok(to_json_binary(&result)?)
}

pub fn query_round_history(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> Result<Binary, ContractError> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let rounds: Vec<_> = ROUNDS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|r| r.ok())
        .map(|(_, round)| round)
        .collect();

    Ok(to_json_binary(&RoundHistoryResponse { rounds })?)
}
