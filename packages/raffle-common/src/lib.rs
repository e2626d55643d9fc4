pub mod types;
pub mod vrf;

pub use types::RaffleState;
pub use vrf::{VrfConsumerExecuteMsg, VrfCoordinatorExecuteMsg};
