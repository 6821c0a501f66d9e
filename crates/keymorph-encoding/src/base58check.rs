//! Base58Check encoding/decoding
//!
//! Base58Check appends the first four bytes of a double SHA-256 digest to the
//! payload before base58 encoding. Used by WIF private keys and Bitcoin
//! addresses.
//!
//! See: <https://en.bitcoin.it/wiki/Base58Check_encoding>

use crate::EncodingError;
use sha2::{Digest, Sha256};

/// Number of checksum bytes appended to the payload
const CHECKSUM_LENGTH: usize = 4;

/// First four bytes of SHA-256(SHA-256(payload))
fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = Sha256::digest(Sha256::digest(payload));
    let mut out = [0u8; CHECKSUM_LENGTH];
    out.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    out
}

/// Encode a payload as Base58Check (payload ‖ 4-byte checksum)
pub fn encode_base58check(payload: &[u8]) -> String {
    let mut buffer = Vec::with_capacity(payload.len() + CHECKSUM_LENGTH);
    buffer.extend_from_slice(payload);
    buffer.extend_from_slice(&checksum(payload));
    bs58::encode(buffer).into_string()
}

/// Decode a Base58Check string, verifying and stripping the checksum
///
/// Returns the payload without the 4 checksum bytes.
pub fn decode_base58check(s: &str) -> Result<Vec<u8>, EncodingError> {
    let decoded = bs58::decode(s)
        .into_vec()
        .map_err(|e| EncodingError::InvalidBase58(e.to_string()))?;

    if decoded.len() < CHECKSUM_LENGTH + 1 {
        return Err(EncodingError::TruncatedInput {
            expected: CHECKSUM_LENGTH + 1,
            found: decoded.len(),
        });
    }

    let (payload, found) = decoded.split_at(decoded.len() - CHECKSUM_LENGTH);
    if checksum(payload) != found {
        return Err(EncodingError::InvalidChecksum);
    }

    Ok(payload.to_vec())
}
