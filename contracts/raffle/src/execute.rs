use cosmwasm_std::{
    coins, from_json, to_json_binary, BankMsg, DepsMut, Env, Event, MessageInfo, Reply, Response,
    SubMsg, SubMsgResult, Uint128, Uint256, WasmMsg,
};
use cw_utils::parse_reply_execute_data;
use raffle_common::{RaffleState, VrfCoordinatorExecuteMsg};

use crate::error::ContractError;
use crate::ledger;
use crate::state::{
    PendingRequest, RoundResult, CONFIG, NUM_WORDS, PAYOUT_REPLY_ID, RAFFLE,
    REQUEST_RANDOMNESS_REPLY_ID, ROUNDS,
};
use crate::upkeep;

/// Buy one entry into the current round.
///
/// The payment is checked first so an underpaid entry is always reported
/// as such, whatever else is attached and whatever state the raffle is in.
pub fn enter_raffle(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let sent = info
        .funds
        .iter()
        .find(|c| c.denom == config.denom)
        .map(|c| c.amount)
        .unwrap_or(Uint128::zero());

    if sent < config.entrance_fee {
        return Err(ContractError::InsufficientPayment {
            sent,
            required: config.entrance_fee,
        });
    }

    if let Some(other) = info.funds.iter().find(|c| c.denom != config.denom) {
        return Err(ContractError::UnexpectedFunds {
            denom: other.denom.clone(),
        });
    }

    let mut raffle = RAFFLE.load(deps.storage)?;
    if !raffle.state.is_open() {
        return Err(ContractError::NotAccepting);
    }

    let slot = ledger::append_player(deps.storage, &mut raffle, &info.sender, sent)?;
    RAFFLE.save(deps.storage, &raffle)?;

    Ok(Response::new()
        .add_attribute("action", "enter_raffle")
        .add_attribute("player", info.sender.to_string())
        .add_attribute("amount", sent.to_string())
        .add_event(
            Event::new("raffle_entered")
                .add_attribute("player", info.sender.to_string())
                .add_attribute("round", raffle.round.to_string())
                .add_attribute("slot", slot.to_string())
                .add_attribute("amount", sent.to_string())
                .add_attribute("num_players", raffle.num_players.to_string())
                .add_attribute("pool", raffle.pool.to_string()),
        ))
}

/// Start a draw. Anyone can call, the keeper is expected to.
///
/// The due check and the switch to `Calculating` happen in this one
/// message, so of two racing callers only the first gets through. The
/// randomness request goes out as a submessage; if the coordinator rejects
/// it the whole transaction reverts and the raffle stays `Open`. The
/// request id is recorded by `handle_randomness_requested` in the same
/// transaction.
pub fn perform_upkeep(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut raffle = RAFFLE.load(deps.storage)?;

    if !raffle.state.is_open() {
        return Err(ContractError::AlreadyCalculating);
    }

    if !upkeep::is_draw_due(&config, &raffle, env.block.time) {
        return Err(ContractError::UpkeepNotNeeded {
            pool: raffle.pool,
            num_players: raffle.num_players,
            state: raffle.state,
        });
    }

    raffle.state = RaffleState::Calculating;
    raffle.pending_request = None;
    RAFFLE.save(deps.storage, &raffle)?;

    let request = WasmMsg::Execute {
        contract_addr: config.vrf_coordinator.to_string(),
        msg: to_json_binary(&VrfCoordinatorExecuteMsg::RequestRandomWords {
            key_hash: config.key_hash.clone(),
            sub_id: config.subscription_id,
            request_confirmations: config.request_confirmations,
            callback_gas_limit: config.callback_gas_limit,
            num_words: NUM_WORDS,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(
            request,
            REQUEST_RANDOMNESS_REPLY_ID,
        ))
        .add_attribute("action", "perform_upkeep")
        .add_attribute("round", raffle.round.to_string())
        .add_attribute("num_players", raffle.num_players.to_string())
        .add_attribute("pool", raffle.pool.to_string()))
}

/// Reply from the coordinator accepting our randomness request.
pub fn handle_randomness_requested(
    deps: DepsMut,
    env: Env,
    msg: Reply,
) -> Result<Response, ContractError> {
    let res = parse_reply_execute_data(msg)?;
    let data = res.data.ok_or(ContractError::MissingRequestId)?;
    let request_id: u64 = from_json(&data)?;

    let mut raffle = RAFFLE.load(deps.storage)?;
    if raffle.state != RaffleState::Calculating || raffle.pending_request.is_some() {
        return Err(ContractError::UnexpectedRequestReply { request_id });
    }

    raffle.pending_request = Some(PendingRequest {
        request_id,
        issued_at: env.block.time,
    });
    RAFFLE.save(deps.storage, &raffle)?;

    Ok(Response::new()
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("raffle_draw_started")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("round", raffle.round.to_string())
                .add_attribute("num_players", raffle.num_players.to_string())
                .add_attribute("pool", raffle.pool.to_string()),
        ))
}

/// Resolve the pending draw. Coordinator only.
///
/// 1. Match `request_id` against the pending request
/// 2. winner = players[random_words[0] % num_players]
/// 3. Check the contract can cover the pool
/// 4. Archive the round, reset the ledger, reopen
/// 5. Send the pool to the winner
///
/// A failed send surfaces as `TransferFailed` from the payout reply and
/// reverts all of the above, leaving the same request pending.
pub fn fulfill_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.vrf_coordinator {
        return Err(ContractError::Unauthorized {
            reason: "only the VRF coordinator can fulfill".to_string(),
        });
    }

    let mut raffle = RAFFLE.load(deps.storage)?;
    let matches_pending = raffle.state == RaffleState::Calculating
        && raffle
            .pending_request
            .as_ref()
            .is_some_and(|p| p.request_id == request_id);
    if !matches_pending {
        return Err(ContractError::UnknownRequest { request_id });
    }

    let random_word = *random_words.first().ok_or(ContractError::NoRandomWords)?;

    let winner_index = ledger::winner_index(random_word, raffle.num_players)?;
    let winner = ledger::player_at(deps.storage, &raffle, winner_index)?;
    let amount = raffle.pool;
    let num_players = raffle.num_players;
    let round = raffle.round;

    let balance = deps
        .querier
        .query_balance(env.contract.address.to_string(), config.denom.clone())?;
    if balance.amount < amount {
        let reason = format!(
            "balance {}{} cannot cover pool {}{}",
            balance.amount, config.denom, amount, config.denom
        );
        deps.api
            .debug(&format!("raffle: round {round} request {request_id}: {reason}"));
        return Err(ContractError::TransferFailed { reason });
    }

    ROUNDS.save(
        deps.storage,
        round,
        &RoundResult {
            round,
            winner: winner.clone(),
            amount,
            request_id,
            random_word,
            winner_index,
            num_players,
            drawn_at: env.block.time,
        },
    )?;

    raffle.recent_winner = Some(winner.clone());
    raffle.last_draw_time = env.block.time;
    raffle.pending_request = None;
    raffle.total_paid_out = raffle.total_paid_out.checked_add(amount)?;
    ledger::reset(&mut raffle);
    raffle.state = RaffleState::Open;
    RAFFLE.save(deps.storage, &raffle)?;

    let payout = BankMsg::Send {
        to_address: winner.to_string(),
        amount: coins(amount.u128(), config.denom.clone()),
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_error(payout, PAYOUT_REPLY_ID))
        .add_attribute("action", "fulfill_random_words")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("winner", winner.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("raffle_winner_picked")
                .add_attribute("winner", winner.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("denom", config.denom)
                .add_attribute("round", round.to_string())
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("winner_index", winner_index.to_string())
                .add_attribute("num_players", num_players.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Reply for a payout that did not go through. Turning it into an error
/// rolls back the resolution.
pub fn handle_payout_failed(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    match msg.result {
        SubMsgResult::Ok(_) => Ok(Response::new()),
        SubMsgResult::Err(reason) => {
            deps.api
                .debug(&format!("raffle: prize transfer failed: {reason}"));
            Err(ContractError::TransferFailed { reason })
        }
    }
}
