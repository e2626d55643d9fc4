use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Timestamp, Uint128, Uint256};
use raffle_common::RaffleState;

use crate::state::{PendingRequest, RaffleConfig, RaffleInfo, RoundResult};

#[cw_serde]
pub struct InstantiateMsg {
    pub entrance_fee: Uint128,
    pub denom: String,
    pub interval_seconds: u64,
    pub vrf_coordinator: String,
    /// Hex-encoded gas lane key hash (32 bytes = 64 hex chars)
    pub key_hash: String,
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Buy one entry. Attach at least the entrance fee in the raffle denom.
    EnterRaffle {},
    /// Start a draw if one is due. Anyone can call; meant for the keeper.
    PerformUpkeep {},
    /// Randomness callback. Coordinator only.
    RawFulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(RaffleConfig)]
    Config {},

    #[returns(RaffleInfo)]
    RaffleInfo {},

    #[returns(RaffleState)]
    RaffleState {},

    #[returns(Coin)]
    EntranceFee {},

    #[returns(u64)]
    Interval {},

    #[returns(u32)]
    NumPlayers {},

    #[returns(Addr)]
    Player { index: u32 },

    #[returns(Coin)]
    Pool {},

    #[returns(Option<Addr>)]
    RecentWinner {},

    #[returns(Timestamp)]
    LastDrawTime {},

    #[returns(Option<PendingRequest>)]
    PendingRequest {},

    #[returns(CheckUpkeepResponse)]
    CheckUpkeep {},

    #[returns(Option<RoundResult>)]
    Round { round: u64 },

    #[returns(RoundHistoryResponse)]
    RoundHistory {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct CheckUpkeepResponse {
    pub upkeep_needed: bool,
    pub state: RaffleState,
    pub num_players: u32,
    pub pool: Uint128,
    pub seconds_since_last_draw: u64,
}

#[cw_serde]
pub struct RoundHistoryResponse {
    pub rounds: Vec<RoundResult>,
}
