use cosmwasm_std::Uint256;
use sha2::{Digest, Sha256};

/// Deterministic stand-in for VRF output.
///
/// `word[i] = sha256(request_id_be || i_be)` read as a big-endian 256-bit
/// integer. Not unpredictable; only for local deployments and tests.
pub fn derive_random_words(request_id: u64, num_words: u32) -> Vec<Uint256> {
    (0..num_words)
        .map(|index| {
            let mut hasher = Sha256::new();
            hasher.update(request_id.to_be_bytes());
            hasher.update(index.to_be_bytes());
            let digest: [u8; 32] = hasher.finalize().into();
            Uint256::from_be_bytes(digest)
        })
        .collect()
}

/// Key hashes are 32 bytes, hex-encoded.
pub fn is_valid_key_hash(key_hash: &str) -> bool {
    matches!(hex::decode(key_hash), Ok(bytes) if bytes.len() == 32)
}
