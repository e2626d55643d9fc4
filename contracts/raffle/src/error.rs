use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_utils::ParseReplyError;
use raffle_common::RaffleState;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    ParseReply(#[from] ParseReplyError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("insufficient payment: sent {sent}, entrance fee is {required}")]
    InsufficientPayment { sent: Uint128, required: Uint128 },

    #[error("unexpected funds in denom {denom}")]
    UnexpectedFunds { denom: String },

    #[error("raffle is not accepting entries")]
    NotAccepting,

    #[error("a draw is already in progress")]
    AlreadyCalculating,

    #[error("upkeep not needed: pool {pool}, players {num_players}, state {state}")]
    UpkeepNotNeeded {
        pool: Uint128,
        num_players: u32,
        state: RaffleState,
    },

    #[error("unknown randomness request {request_id}")]
    UnknownRequest { request_id: u64 },

    #[error("randomness response carried no random words")]
    NoRandomWords,

    #[error("coordinator did not return a request id")]
    MissingRequestId,

    #[error("request {request_id} accepted outside of a draw")]
    UnexpectedRequestReply { request_id: u64 },

    #[error("player index {index} out of range (count {count})")]
    IndexOutOfRange { index: u32, count: u32 },

    #[error("prize transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("unknown reply id {id}")]
    UnknownReplyId { id: u64 },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("invalid hex: {field}")]
    InvalidHex { field: String },
}
