use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<CoordinatorConfig> = Item::new("config");
pub const SUBSCRIPTIONS: Map<u64, Subscription> = Map::new("subscriptions");
pub const REQUESTS: Map<u64, RandomnessRequest> = Map::new("requests");
pub const LAST_SUB_ID: Item<u64> = Item::new("last_sub_id");
pub const LAST_REQUEST_ID: Item<u64> = Item::new("last_request_id");

pub const MAX_NUM_WORDS: u32 = 500;

#[cw_serde]
pub struct CoordinatorConfig {
    pub admin: Addr,
    /// Accounts allowed to deliver randomness
    pub operators: Vec<Addr>,
    /// Flat fee charged per fulfilled request
    pub base_fee: Uint128,
    /// Charged per unit of callback gas limit
    pub gas_price: Uint128,
}

#[cw_serde]
pub struct Subscription {
    pub id: u64,
    pub owner: Addr,
    pub balance: Uint128,
    pub consumers: Vec<Addr>,
}

#[cw_serde]
pub struct RandomnessRequest {
    pub request_id: u64,
    pub sub_id: u64,
    pub consumer: Addr,
    pub key_hash: String,
    pub request_confirmations: u16,
    pub callback_gas_limit: u64,
    pub num_words: u32,
    pub requested_at: Timestamp,
}
