use cosmwasm_std::{
    to_json_binary, Addr, DepsMut, Env, Event, MessageInfo, Response, Storage, Uint128, Uint256,
    WasmMsg,
};
use raffle_common::VrfConsumerExecuteMsg;

use crate::error::ContractError;
use crate::msg::RequestRandomWordsParams;
use crate::randomness::{derive_random_words, is_valid_key_hash};
use crate::state::{
    RandomnessRequest, Subscription, CONFIG, LAST_REQUEST_ID, LAST_SUB_ID, MAX_NUM_WORDS,
    REQUESTS, SUBSCRIPTIONS,
};

/// Open a new subscription owned by the sender.
pub fn create_subscription(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let sub_id = LAST_SUB_ID.may_load(deps.storage)?.unwrap_or(0) + 1;
    LAST_SUB_ID.save(deps.storage, &sub_id)?;

    let subscription = Subscription {
        id: sub_id,
        owner: info.sender.clone(),
        balance: Uint128::zero(),
        consumers: vec![],
    };
    SUBSCRIPTIONS.save(deps.storage, sub_id, &subscription)?;

    Ok(Response::new()
        .set_data(to_json_binary(&sub_id)?)
        .add_attribute("action", "create_subscription")
        .add_attribute("sub_id", sub_id.to_string())
        .add_attribute("owner", info.sender.to_string()))
}

/// Credit a subscription. Anyone can top up.
pub fn fund_subscription(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    sub_id: u64,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut subscription = SUBSCRIPTIONS
        .may_load(deps.storage, sub_id)?
        .ok_or(ContractError::InvalidSubscription { sub_id })?;

    subscription.balance = subscription.balance.checked_add(amount)?;
    SUBSCRIPTIONS.save(deps.storage, sub_id, &subscription)?;

    Ok(Response::new()
        .add_attribute("action", "fund_subscription")
        .add_attribute("sub_id", sub_id.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("new_balance", subscription.balance.to_string()))
}

pub fn add_consumer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    sub_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    let mut subscription = owned_subscription(deps.storage, &info.sender, sub_id)?;
    let consumer = deps.api.addr_validate(&consumer)?;

    if !subscription.consumers.contains(&consumer) {
        subscription.consumers.push(consumer.clone());
        SUBSCRIPTIONS.save(deps.storage, sub_id, &subscription)?;
    }

    Ok(Response::new()
        .add_attribute("action", "add_consumer")
        .add_attribute("sub_id", sub_id.to_string())
        .add_attribute("consumer", consumer.to_string()))
}

pub fn remove_consumer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    sub_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    let mut subscription = owned_subscription(deps.storage, &info.sender, sub_id)?;
    let consumer = deps.api.addr_validate(&consumer)?;

    subscription.consumers.retain(|c| *c != consumer);
    SUBSCRIPTIONS.save(deps.storage, sub_id, &subscription)?;

    Ok(Response::new()
        .add_attribute("action", "remove_consumer")
        .add_attribute("sub_id", sub_id.to_string())
        .add_attribute("consumer", consumer.to_string()))
}

fn owned_subscription(
    storage: &dyn Storage,
    sender: &Addr,
    sub_id: u64,
) -> Result<Subscription, ContractError> {
    let subscription = SUBSCRIPTIONS
        .may_load(storage, sub_id)?
        .ok_or(ContractError::InvalidSubscription { sub_id })?;
    if subscription.owner != *sender {
        return Err(ContractError::Unauthorized {
            reason: "only the subscription owner can manage consumers".to_string(),
        });
    }
    Ok(subscription)
}

/// Record a randomness request from a registered consumer.
/// The request id goes back to the consumer as response data.
pub fn request_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: RequestRandomWordsParams,
) -> Result<Response, ContractError> {
    let RequestRandomWordsParams {
        key_hash,
        sub_id,
        request_confirmations,
        callback_gas_limit,
        num_words,
    } = params;

    if !is_valid_key_hash(&key_hash) {
        return Err(ContractError::InvalidHex {
            field: "key_hash".to_string(),
        });
    }

    let subscription = SUBSCRIPTIONS
        .may_load(deps.storage, sub_id)?
        .ok_or(ContractError::InvalidSubscription { sub_id })?;
    if !subscription.consumers.contains(&info.sender) {
        return Err(ContractError::InvalidConsumer {
            sub_id,
            consumer: info.sender.to_string(),
        });
    }

    if num_words == 0 {
        return Err(ContractError::InvalidNumWords);
    }
    if num_words > MAX_NUM_WORDS {
        return Err(ContractError::NumWordsTooBig {
            have: num_words,
            max: MAX_NUM_WORDS,
        });
    }

    let request_id = LAST_REQUEST_ID.may_load(deps.storage)?.unwrap_or(0) + 1;
    LAST_REQUEST_ID.save(deps.storage, &request_id)?;

    let request = RandomnessRequest {
        request_id,
        sub_id,
        consumer: info.sender.clone(),
        key_hash: key_hash.clone(),
        request_confirmations,
        callback_gas_limit,
        num_words,
        requested_at: env.block.time,
    };
    REQUESTS.save(deps.storage, request_id, &request)?;

    Ok(Response::new()
        .set_data(to_json_binary(&request_id)?)
        .add_attribute("action", "request_random_words")
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("vrf_random_words_requested")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("key_hash", key_hash)
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute("consumer", info.sender.to_string())
                .add_attribute("num_words", num_words.to_string())
                .add_attribute("callback_gas_limit", callback_gas_limit.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Fulfill with words derived from the request id. Operators only.
pub fn fulfill_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    let num_words = REQUESTS
        .may_load(deps.storage, request_id)?
        .map(|r| r.num_words)
        .unwrap_or(0);
    let random_words = derive_random_words(request_id, num_words);
    fulfill_random_words_with_override(deps, env, info, request_id, consumer, random_words)
}

/// Fulfill with caller-chosen words. Operators only.
///
/// The subscription is charged `base_fee + gas_price * callback_gas_limit`
/// and the request deleted before the callback is dispatched. The callback
/// is a plain message: if the consumer rejects it the whole fulfilment
/// reverts and the request can be delivered again.
pub fn fulfill_random_words_with_override(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    consumer: String,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Authorization: only operators
    if !config.operators.contains(&info.sender) {
        return Err(ContractError::Unauthorized {
            reason: "only operators can fulfill requests".to_string(),
        });
    }

    let request = REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or(ContractError::RequestNotFound { request_id })?;

    let consumer = deps.api.addr_validate(&consumer)?;
    if consumer != request.consumer {
        return Err(ContractError::ConsumerMismatch {
            request_id,
            expected: request.consumer.to_string(),
            got: consumer.to_string(),
        });
    }

    if random_words.len() != request.num_words as usize {
        return Err(ContractError::InvalidRandomWords {
            expected: request.num_words,
            got: random_words.len(),
        });
    }

    let payment = config
        .gas_price
        .checked_mul(Uint128::from(request.callback_gas_limit))?
        .checked_add(config.base_fee)?;

    let mut subscription = SUBSCRIPTIONS
        .may_load(deps.storage, request.sub_id)?
        .ok_or(ContractError::InvalidSubscription {
            sub_id: request.sub_id,
        })?;
    if subscription.balance < payment {
        return Err(ContractError::InsufficientBalance {
            needed: payment,
            available: subscription.balance,
        });
    }
    subscription.balance = subscription.balance.checked_sub(payment)?;
    SUBSCRIPTIONS.save(deps.storage, request.sub_id, &subscription)?;

    REQUESTS.remove(deps.storage, request_id);

    let callback = WasmMsg::Execute {
        contract_addr: consumer.to_string(),
        msg: to_json_binary(&VrfConsumerExecuteMsg::RawFulfillRandomWords {
            request_id,
            random_words,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(callback)
        .add_attribute("action", "fulfill_random_words")
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("vrf_random_words_fulfilled")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("consumer", consumer.to_string())
                .add_attribute("payment", payment.to_string())
                .add_attribute("fulfilled_by", info.sender.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Update the operator list. Admin only.
pub fn update_operators(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    add: Vec<String>,
    remove: Vec<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update operators".to_string(),
        });
    }

    for addr_str in &remove {
        let addr = deps.api.addr_validate(addr_str)?;
        config.operators.retain(|a| *a != addr);
    }

    for addr_str in &add {
        let addr = deps.api.addr_validate(addr_str)?;
        if !config.operators.contains(&addr) {
            config.operators.push(addr);
        }
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_operators")
        .add_attribute("added", add.join(","))
        .add_attribute("removed", remove.join(",")))
}
