//! Error types for cryptographic operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Key error: {0}")]
    KeyError(String),

    #[error("Signature error: {0}")]
    SignatureError(String),

    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),

    #[error("Random source failure: {0}")]
    Rng(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
