use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use raffle_common::RaffleState;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{
    RaffleConfig, RaffleInfo, CONFIG, PAYOUT_REPLY_ID, RAFFLE, REQUEST_RANDOMNESS_REPLY_ID,
};

const CONTRACT_NAME: &str = "crates.io:raffle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.entrance_fee.is_zero() {
        return Err(ContractError::InvalidConfig {
            reason: "entrance fee must be positive".to_string(),
        });
    }
    if msg.denom.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "denom must not be empty".to_string(),
        });
    }

    let key_hash = hex::decode(&msg.key_hash).map_err(|_| ContractError::InvalidHex {
        field: "key_hash".to_string(),
    })?;
    if key_hash.len() != 32 {
        return Err(ContractError::InvalidConfig {
            reason: format!("key hash must be 32 bytes, got {}", key_hash.len()),
        });
    }

    let config = RaffleConfig {
        entrance_fee: msg.entrance_fee,
        denom: msg.denom,
        interval_seconds: msg.interval_seconds,
        vrf_coordinator: deps.api.addr_validate(&msg.vrf_coordinator)?,
        key_hash: msg.key_hash.to_lowercase(),
        subscription_id: msg.subscription_id,
        request_confirmations: msg.request_confirmations,
        callback_gas_limit: msg.callback_gas_limit,
    };
    CONFIG.save(deps.storage, &config)?;

    // The first interval runs from deployment.
    let raffle = RaffleInfo {
        state: RaffleState::Open,
        round: 0,
        num_players: 0,
        pool: Uint128::zero(),
        pending_request: None,
        recent_winner: None,
        last_draw_time: env.block.time,
        total_paid_out: Uint128::zero(),
    };
    RAFFLE.save(deps.storage, &raffle)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "raffle")
        .add_attribute("creator", info.sender.to_string())
        .add_attribute("entrance_fee", config.entrance_fee.to_string())
        .add_attribute("denom", config.denom)
        .add_attribute("interval_seconds", config.interval_seconds.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::EnterRaffle {} => execute::enter_raffle(deps, env, info),
        ExecuteMsg::PerformUpkeep {} => execute::perform_upkeep(deps, env, info),
        ExecuteMsg::RawFulfillRandomWords {
            request_id,
            random_words,
        } => execute::fulfill_random_words(deps, env, info, request_id, random_words),
    }
}

#[entry_point]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REQUEST_RANDOMNESS_REPLY_ID => execute::handle_randomness_requested(deps, env, msg),
        PAYOUT_REPLY_ID => execute::handle_payout_failed(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::RaffleInfo {} => query::query_raffle_info(deps),
        QueryMsg::RaffleState {} => query::query_raffle_state(deps),
        QueryMsg::EntranceFee {} => query::query_entrance_fee(deps),
        QueryMsg::Interval {} => query::query_interval(deps),
        QueryMsg::NumPlayers {} => query::query_num_players(deps),
        QueryMsg::Player { index } => query::query_player(deps, index),
        QueryMsg::Pool {} => query::query_pool(deps),
        QueryMsg::RecentWinner {} => query::query_recent_winner(deps),
        QueryMsg::LastDrawTime {} => query::query_last_draw_time(deps),
        QueryMsg::PendingRequest {} => query::query_pending_request(deps),
        QueryMsg::CheckUpkeep {} => query::query_check_upkeep(deps, env),
        QueryMsg::Round { round } => query::query_round(deps, round),
        QueryMsg::RoundHistory { start_after, limit } => {
            query::query_round_history(deps, start_after, limit)
        }
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
