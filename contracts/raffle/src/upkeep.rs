use cosmwasm_std::Timestamp;

use crate::msg::CheckUpkeepResponse;
use crate::state::{RaffleConfig, RaffleInfo};

/// Seconds since the last draw. A clock behind the last draw counts as zero.
pub fn seconds_since_last_draw(raffle: &RaffleInfo, now: Timestamp) -> u64 {
    now.seconds().saturating_sub(raffle.last_draw_time.seconds())
}

/// A draw is due when the raffle is open, has players, holds a pool and the
/// draw interval has elapsed. All four must hold.
pub fn is_draw_due(config: &RaffleConfig, raffle: &RaffleInfo, now: Timestamp) -> bool {
    raffle.state.is_open()
        && raffle.num_players > 0
        && !raffle.pool.is_zero()
        && seconds_since_last_draw(raffle, now) >= config.interval_seconds
}

pub fn check_upkeep(
    config: &RaffleConfig,
    raffle: &RaffleInfo,
    now: Timestamp,
) -> CheckUpkeepResponse {
    CheckUpkeepResponse {
        upkeep_needed: is_draw_due(config, raffle, now),
        state: raffle.state,
        num_players: raffle.num_players,
        pool: raffle.pool,
        seconds_since_last_draw: seconds_since_last_draw(raffle, now),
    }
}
