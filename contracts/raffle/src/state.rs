use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128, Uint256};
use cw_storage_plus::{Item, Map};
use raffle_common::RaffleState;

pub const CONFIG: Item<RaffleConfig> = Item::new("config");
/// Lifecycle, pool, pending request and history. Always loaded and saved
/// as one record so no reader sees a mix of two rounds.
pub const RAFFLE: Item<RaffleInfo> = Item::new("raffle");
/// Entry slots of the current round, keyed by insertion index.
pub const PLAYERS: Map<u32, Addr> = Map::new("players");
/// Archive of resolved rounds
pub const ROUNDS: Map<u64, RoundResult> = Map::new("rounds");

/// Random words requested per draw.
pub const NUM_WORDS: u32 = 1;

pub const REQUEST_RANDOMNESS_REPLY_ID: u64 = 1;
pub const PAYOUT_REPLY_ID: u64 = 2;

#[cw_serde]
pub struct RaffleConfig {
    /// Minimum payment per entry, in `denom`
    pub entrance_fee: Uint128,
    pub denom: String,
    /// Minimum seconds between two draws
    pub interval_seconds: u64,
    pub vrf_coordinator: Addr,
    /// Gas lane, hex-encoded 32 bytes
    pub key_hash: String,
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u64,
}

#[cw_serde]
pub struct PendingRequest {
    pub request_id: u64,
    pub issued_at: Timestamp,
}

#[cw_serde]
pub struct RaffleInfo {
    pub state: RaffleState,
    pub round: u64,
    pub num_players: u32,
    pub pool: Uint128,
    /// Set only while `state` is `Calculating`
    pub pending_request: Option<PendingRequest>,
    pub recent_winner: Option<Addr>,
    pub last_draw_time: Timestamp,
    pub total_paid_out: Uint128,
}

#[cw_serde]
pub struct RoundResult {
    pub round: u64,
    pub winner: Addr,
    pub amount: Uint128,
    pub request_id: u64,
    pub random_word: Uint256,
    pub winner_index: u32,
    pub num_players: u32,
    pub drawn_at: Timestamp,
}
