//! Error types for key conversion

use keymorph_crypto::{CryptoError, Curve};
use keymorph_encoding::EncodingError;
use thiserror::Error;

use crate::{format::KeyFormat, material::KeyKind};

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),

    #[error("Curve mismatch: expected {expected}, found {found}")]
    CurveMismatch { expected: Curve, found: String },

    #[error("Malformed {format} input: {reason}")]
    MalformedInput { format: KeyFormat, reason: String },

    #[error("Format {format} cannot carry a {kind} key here")]
    UnsupportedKeyKind { format: KeyFormat, kind: KeyKind },

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("No key loaded")]
    NoKeyLoaded,

    #[error("Operation requires a private key, but only public material is loaded")]
    PrivateKeyRequired,

    #[error("Import from {format} failed: {source}")]
    ImportFailed {
        format: KeyFormat,
        #[source]
        source: Box<ConversionError>,
    },

    #[error("Export to {format} failed: {source}")]
    ExportFailed {
        format: KeyFormat,
        #[source]
        source: Box<ConversionError>,
    },

    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
