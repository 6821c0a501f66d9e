//! Universal asymmetric-key format converter
//!
//! Keymorph normalizes a private or public key expressed in any supported
//! serialization (raw bytes, hex, WIF, BIP-39 mnemonic, JWK, PKCS#8/SPKI
//! PEM) into a curve-tagged internal representation, re-serializes it into
//! any of the same formats, and derives network identifiers (Bitcoin
//! address, Ethereum address, libp2p/IPFS peer ID) from the public point.
//!
//! Three curves are supported: secp256k1, P-256 and Ed25519. Round-tripping
//! a key through any two formats preserves the underlying key: private
//! imports always recompute the public point through the cryptographic
//! provider rather than trusting the external format.
//!
//! The entry point is [`KeyConverter`]; see the README for examples.

pub mod codec;
pub mod converter;
pub mod derive;
pub mod error;
pub mod format;
pub mod material;
pub mod network;

pub use converter::KeyConverter;
pub use error::ConversionError;
pub use format::{EncodedKey, FormatDescriptor, KeyFormat, KeySource};
pub use material::{KeyKind, KeyMaterial};
pub use network::Network;

pub use keymorph_crypto::{CryptoProvider, Curve, SoftwareProvider};
