use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, RequestRandomWordsParams};
use crate::query;
use crate::state::{CoordinatorConfig, CONFIG, LAST_REQUEST_ID, LAST_SUB_ID};

const CONTRACT_NAME: &str = "crates.io:vrf-coordinator-mock";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // Validate operator addresses
    let mut operators = Vec::new();
    for op in &msg.operators {
        operators.push(deps.api.addr_validate(op)?);
    }

    let config = CoordinatorConfig {
        admin: info.sender.clone(),
        operators,
        base_fee: msg.base_fee,
        gas_price: msg.gas_price,
    };

    CONFIG.save(deps.storage, &config)?;
    LAST_SUB_ID.save(deps.storage, &0u64)?;
    LAST_REQUEST_ID.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "vrf-coordinator-mock")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("base_fee", config.base_fee.to_string())
        .add_attribute("gas_price", config.gas_price.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateSubscription {} => execute::create_subscription(deps, env, info),
        ExecuteMsg::FundSubscription { sub_id, amount } => {
            execute::fund_subscription(deps, env, info, sub_id, amount)
        }
        ExecuteMsg::AddConsumer { sub_id, consumer } => {
            execute::add_consumer(deps, env, info, sub_id, consumer)
        }
        ExecuteMsg::RemoveConsumer { sub_id, consumer } => {
            execute::remove_consumer(deps, env, info, sub_id, consumer)
        }
        ExecuteMsg::RequestRandomWords {
            key_hash,
            sub_id,
            request_confirmations,
            callback_gas_limit,
            num_words,
        } => execute::request_random_words(
            deps,
            env,
            info,
            RequestRandomWordsParams {
                key_hash,
                sub_id,
                request_confirmations,
                callback_gas_limit,
                num_words,
            },
        ),
        ExecuteMsg::FulfillRandomWords {
            request_id,
            consumer,
        } => execute::fulfill_random_words(deps, env, info, request_id, consumer),
        ExecuteMsg::FulfillRandomWordsWithOverride {
            request_id,
            consumer,
            random_words,
        } => execute::fulfill_random_words_with_override(
            deps,
            env,
            info,
            request_id,
            consumer,
            random_words,
        ),
        ExecuteMsg::UpdateOperators { add, remove } => {
            execute::update_operators(deps, env, info, add, remove)
        }
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Subscription { sub_id } => query::query_subscription(deps, sub_id),
        QueryMsg::Request { request_id } => query::query_request(deps, request_id),
        QueryMsg::LatestRequestId {} => query::query_latest_request_id(deps),
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
