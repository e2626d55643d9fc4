use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Uint128, Uint256};

use crate::state::{CoordinatorConfig, RandomnessRequest, Subscription};

#[cw_serde]
pub struct InstantiateMsg {
    pub operators: Vec<String>,
    pub base_fee: Uint128,
    pub gas_price: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Open a subscription owned by the sender. Returns the id as data.
    CreateSubscription {},
    /// Credit a subscription. Mock accounting, no funds move.
    FundSubscription { sub_id: u64, amount: Uint128 },
    /// Allow a contract to request against a subscription (owner only).
    AddConsumer { sub_id: u64, consumer: String },
    /// Revoke a consumer (owner only).
    RemoveConsumer { sub_id: u64, consumer: String },
    /// Consumer entry point. Returns the request id as data.
    RequestRandomWords {
        /// Hex-encoded gas lane key hash (32 bytes)
        key_hash: String,
        sub_id: u64,
        request_confirmations: u16,
        callback_gas_limit: u64,
        num_words: u32,
    },
    /// Deliver words derived from the request id (operator only).
    FulfillRandomWords { request_id: u64, consumer: String },
    /// Deliver caller-chosen words (operator only).
    FulfillRandomWordsWithOverride {
        request_id: u64,
        consumer: String,
        random_words: Vec<Uint256>,
    },
    /// Update operator list (admin only).
    UpdateOperators {
        add: Vec<String>,
        remove: Vec<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CoordinatorConfig)]
    Config {},

    #[returns(Option<Subscription>)]
    Subscription { sub_id: u64 },

    #[returns(Option<RandomnessRequest>)]
    Request { request_id: u64 },

    #[returns(u64)]
    LatestRequestId {},
}

/// Fields of `ExecuteMsg::RequestRandomWords`, passed through to the handler.
pub struct RequestRandomWordsParams {
    pub key_hash: String,
    pub sub_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u64,
    pub num_words: u32,
}

#[cw_serde]
pub struct MigrateMsg {}
