//! Encoding errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Invalid base58 encoding: {0}")]
    InvalidBase58(String),

    #[error("Invalid Base58Check checksum")]
    InvalidChecksum,

    #[error("Invalid varint: {0}")]
    InvalidVarint(String),

    #[error("Invalid key envelope: {0}")]
    InvalidEnvelope(String),

    #[error("Truncated input: expected at least {expected} bytes, got {found}")]
    TruncatedInput { expected: usize, found: usize },
}
