use cosmwasm_std::{Addr, StdResult, Storage, Uint128, Uint256};

use crate::error::ContractError;
use crate::state::{RaffleInfo, PLAYERS};

/// Append one paid entry to the current round and grow the pool.
/// Returns the slot index the player was stored at.
pub fn append_player(
    storage: &mut dyn Storage,
    raffle: &mut RaffleInfo,
    player: &Addr,
    payment: Uint128,
) -> StdResult<u32> {
    let slot = raffle.num_players;
    PLAYERS.save(storage, slot, player)?;
    raffle.num_players += 1;
    raffle.pool = raffle.pool.checked_add(payment)?;
    Ok(slot)
}

pub fn player_at(
    storage: &dyn Storage,
    raffle: &RaffleInfo,
    index: u32,
) -> Result<Addr, ContractError> {
    if index >= raffle.num_players {
        return Err(ContractError::IndexOutOfRange {
            index,
            count: raffle.num_players,
        });
    }
    PLAYERS
        .may_load(storage, index)?
        .ok_or(ContractError::IndexOutOfRange {
            index,
            count: raffle.num_players,
        })
}

/// Empty the ledger, zero the pool and move on to the next round.
/// Only the draw resolver calls this, after the payout has been queued.
///
/// Old slots are left in storage: reads are bounded by `num_players` and
/// the next round overwrites them from slot 0, so resolving costs the same
/// however many entries the round had.
pub fn reset(raffle: &mut RaffleInfo) {
    raffle.num_players = 0;
    raffle.pool = Uint128::zero();
    raffle.round += 1;
}

/// `random_word mod count`, i.e. the winning slot.
///
/// Only depends on its inputs, so re-running a failed resolution against
/// the same ledger lands on the same slot.
pub fn winner_index(random_word: Uint256, count: u32) -> Result<u32, ContractError> {
    if count == 0 {
        return Err(ContractError::IndexOutOfRange { index: 0, count });
    }
    let index = random_word % Uint256::from(count);
    // index < count, so it fits in the low four bytes
    let bytes = index.to_be_bytes();
    Ok(u32::from_be_bytes([bytes[28], bytes[29], bytes[30], bytes[31]]))
}
