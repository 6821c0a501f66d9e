//! Curve registry and pluggable cryptographic provider for Keymorph
//!
//! This crate provides:
//! - A closed [`Curve`] enumeration with static per-curve descriptors
//! - The [`CryptoProvider`] capability trait (key generation, public-key
//!   derivation, point validation, sign/verify)
//! - [`SoftwareProvider`], the default implementation over the pure-Rust
//!   curve crates

mod curve;
mod error;
mod provider;

#[cfg(feature = "ed25519")]
pub mod ed25519;

#[cfg(feature = "p256")]
pub mod p256;

#[cfg(feature = "k256")]
pub mod secp256k1;

pub use curve::{
    Curve, CurveInfo, HashAlgorithm, LIBP2P_ECDSA, LIBP2P_ED25519, LIBP2P_RSA, LIBP2P_SECP256K1,
    PointEncoding,
};
pub use error::CryptoError;
pub use provider::{CryptoProvider, KeyPair, SoftwareProvider};
