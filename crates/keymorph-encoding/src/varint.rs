//! Unsigned varint helpers
//!
//! Thin wrappers over `unsigned-varint` used when assembling CIDs and key
//! envelopes.
//!
//! See: <https://github.com/multiformats/unsigned-varint>

use crate::EncodingError;

/// Append a u64 as an unsigned varint to `buffer`
pub fn write_u64(value: u64, buffer: &mut Vec<u8>) {
    let mut scratch = [0u8; 10];
    buffer.extend_from_slice(unsigned_varint::encode::u64(value, &mut scratch));
}

/// Encode a u64 as an unsigned varint
pub fn encode_u64(value: u64) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(10);
    write_u64(value, &mut buffer);
    buffer
}

/// Decode an unsigned varint from the front of `bytes`
///
/// Returns the value and the remaining bytes.
pub fn read_u64(bytes: &[u8]) -> Result<(u64, &[u8]), EncodingError> {
    unsigned_varint::decode::u64(bytes)
        .map_err(|e| EncodingError::InvalidVarint(e.to_string()))
}
