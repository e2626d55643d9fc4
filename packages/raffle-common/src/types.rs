use cosmwasm_schema::cw_serde;

/// Lifecycle of a raffle round.
///
/// Entries are only accepted while `Open`. The raffle sits in `Calculating`
/// from the moment randomness is requested until the matching response
/// has paid out the winner.
#[cw_serde]
#[derive(Copy, Default)]
pub enum RaffleState {
    #[default]
    Open,
    Calculating,
}

impl RaffleState {
    pub fn is_open(&self) -> bool {
        matches!(self, RaffleState::Open)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RaffleState::Open => "open",
            RaffleState::Calculating => "calculating",
        }
    }
}

impl std::fmt::Display for RaffleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
