//! Base58Check, varint and libp2p key-envelope encoding utilities for Keymorph
//!
//! This crate provides the wire-format primitives used across Keymorph:
//! - Base58Check encoding/decoding (WIF, Bitcoin addresses)
//! - Unsigned varint prefixes (CID assembly)
//! - The libp2p public-key envelope (protobuf `{key_type, data}`)

pub mod base58check;
pub mod envelope;
pub mod varint;

pub use base58check::{decode_base58check, encode_base58check};
pub use envelope::KeyEnvelope;

mod error;
pub use error::EncodingError;
