//! Messages exchanged between a randomness consumer and a VRF coordinator.
//!
//! The coordinator contract accepts more messages than these; each side only
//! needs to serialize the variant it sends, and a single-variant enum
//! produces the same JSON as the matching variant of the full enum.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint256;

/// Sent by a consumer to the coordinator.
///
/// The coordinator must reply with the assigned request id (JSON `u64`) as
/// response data so the consumer can bind its pending draw to it.
#[cw_serde]
pub enum VrfCoordinatorExecuteMsg {
    RequestRandomWords {
        /// Gas lane, hex-encoded 32 bytes
        key_hash: String,
        sub_id: u64,
        request_confirmations: u16,
        callback_gas_limit: u64,
        num_words: u32,
    },
}

/// Sent by the coordinator to the consumer once randomness is available.
#[cw_serde]
pub enum VrfConsumerExecuteMsg {
    RawFulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}
