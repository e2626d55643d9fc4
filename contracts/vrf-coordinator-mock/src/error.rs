use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("subscription {sub_id} does not exist")]
    InvalidSubscription { sub_id: u64 },

    #[error("{consumer} is not a consumer of subscription {sub_id}")]
    InvalidConsumer { sub_id: u64, consumer: String },

    #[error("num words {have} above max {max}")]
    NumWordsTooBig { have: u32, max: u32 },

    #[error("must request at least one word")]
    InvalidNumWords,

    #[error("nonexistent request {request_id}")]
    RequestNotFound { request_id: u64 },

    #[error("request {request_id} belongs to {expected}, not {got}")]
    ConsumerMismatch {
        request_id: u64,
        expected: String,
        got: String,
    },

    #[error("expected {expected} random words, got {got}")]
    InvalidRandomWords { expected: u32, got: usize },

    #[error("insufficient subscription balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Uint128, available: Uint128 },

    #[error("invalid hex input: {field}")]
    InvalidHex { field: String },
}
