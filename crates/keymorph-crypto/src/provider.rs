//! Pluggable cryptographic provider
//!
//! All point arithmetic, signing and verification flows through the
//! [`CryptoProvider`] capability trait. Callers construct key converters with
//! an explicit provider instance; there is no process-wide provider registry.
//! [`SoftwareProvider`] is the default implementation over the pure-Rust
//! curve crates.

use std::fmt;

use rand_core::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{CryptoError, Curve, error::Result};

/// Generated key pair with raw bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    #[zeroize(skip)]
    pub curve: Curve,
    pub private_bytes: Vec<u8>,
    pub public_bytes: Vec<u8>,
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("curve", &self.curve)
            .field("private_bytes", &"[REDACTED]")
            .field("public_bytes", &hex_preview(&self.public_bytes))
            .finish()
    }
}

fn hex_preview(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Capability set required from a cryptographic backend
///
/// Points passed in may be in any encoding the curve accepts (compressed or
/// uncompressed SEC1 for the Weierstrass curves); points returned by
/// `derive_public_key` and `compress_point` are always in the curve's
/// canonical form (compressed SEC1, raw Edwards y for Ed25519).
pub trait CryptoProvider {
    /// Generate a new key pair from an injected random-bytes source
    fn generate(&self, curve: Curve, rng: &mut dyn RngCore) -> Result<KeyPair>;

    /// Derive the canonical public point from a private scalar
    fn derive_public_key(&self, curve: Curve, scalar: &[u8]) -> Result<Vec<u8>>;

    /// Check that the bytes encode a valid point on the curve
    fn validate_point(&self, curve: Curve, point: &[u8]) -> Result<()>;

    /// Re-encode a point into the curve's canonical compressed form
    fn compress_point(&self, curve: Curve, point: &[u8]) -> Result<Vec<u8>>;

    /// Re-encode a point into the curve's uncompressed form
    /// (identity for Ed25519)
    fn decompress_point(&self, curve: Curve, point: &[u8]) -> Result<Vec<u8>>;

    /// Sign a message with a private scalar
    fn sign(&self, curve: Curve, scalar: &[u8], message: &[u8]) -> Result<Vec<u8>>;

    /// Verify a signature against a public point
    fn verify(&self, curve: Curve, point: &[u8], message: &[u8], signature: &[u8])
    -> Result<bool>;
}

/// Default provider over the pure-Rust curve crates (`k256`, `p256`,
/// `ed25519-dalek`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftwareProvider;

impl SoftwareProvider {
    pub fn new() -> Self {
        Self
    }
}

impl CryptoProvider for SoftwareProvider {
    fn generate(&self, curve: Curve, rng: &mut dyn RngCore) -> Result<KeyPair> {
        match curve {
            #[cfg(feature = "k256")]
            Curve::Secp256k1 => crate::secp256k1::generate(rng),
            #[cfg(feature = "p256")]
            Curve::P256 => crate::p256::generate(rng),
            #[cfg(feature = "ed25519")]
            Curve::Ed25519 => crate::ed25519::generate(rng),
            #[allow(unreachable_patterns)]
            other => Err(CryptoError::UnsupportedCurve(other.to_string())),
        }
    }

    fn derive_public_key(&self, curve: Curve, scalar: &[u8]) -> Result<Vec<u8>> {
        match curve {
            #[cfg(feature = "k256")]
            Curve::Secp256k1 => crate::secp256k1::derive_public_key(scalar),
            #[cfg(feature = "p256")]
            Curve::P256 => crate::p256::derive_public_key(scalar),
            #[cfg(feature = "ed25519")]
            Curve::Ed25519 => crate::ed25519::derive_public_key(scalar),
            #[allow(unreachable_patterns)]
            other => Err(CryptoError::UnsupportedCurve(other.to_string())),
        }
    }

    fn validate_point(&self, curve: Curve, point: &[u8]) -> Result<()> {
        match curve {
            #[cfg(feature = "k256")]
            Curve::Secp256k1 => crate::secp256k1::validate_point(point),
            #[cfg(feature = "p256")]
            Curve::P256 => crate::p256::validate_point(point),
            #[cfg(feature = "ed25519")]
            Curve::Ed25519 => crate::ed25519::validate_point(point),
            #[allow(unreachable_patterns)]
            other => Err(CryptoError::UnsupportedCurve(other.to_string())),
        }
    }

    fn compress_point(&self, curve: Curve, point: &[u8]) -> Result<Vec<u8>> {
        match curve {
            #[cfg(feature = "k256")]
            Curve::Secp256k1 => crate::secp256k1::compress_point(point),
            #[cfg(feature = "p256")]
            Curve::P256 => crate::p256::compress_point(point),
            #[cfg(feature = "ed25519")]
            Curve::Ed25519 => crate::ed25519::compress_point(point),
            #[allow(unreachable_patterns)]
            other => Err(CryptoError::UnsupportedCurve(other.to_string())),
        }
    }

    fn decompress_point(&self, curve: Curve, point: &[u8]) -> Result<Vec<u8>> {
        match curve {
            #[cfg(feature = "k256")]
            Curve::Secp256k1 => crate::secp256k1::decompress_point(point),
            #[cfg(feature = "p256")]
            Curve::P256 => crate::p256::decompress_point(point),
            #[cfg(feature = "ed25519")]
            Curve::Ed25519 => crate::ed25519::decompress_point(point),
            #[allow(unreachable_patterns)]
            other => Err(CryptoError::UnsupportedCurve(other.to_string())),
        }
    }

    fn sign(&self, curve: Curve, scalar: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        match curve {
            #[cfg(feature = "k256")]
            Curve::Secp256k1 => crate::secp256k1::sign(scalar, message),
            #[cfg(feature = "p256")]
            Curve::P256 => crate::p256::sign(scalar, message),
            #[cfg(feature = "ed25519")]
            Curve::Ed25519 => crate::ed25519::sign(scalar, message),
            #[allow(unreachable_patterns)]
            other => Err(CryptoError::UnsupportedCurve(other.to_string())),
        }
    }

    fn verify(
        &self,
        curve: Curve,
        point: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool> {
        match curve {
            #[cfg(feature = "k256")]
            Curve::Secp256k1 => crate::secp256k1::verify(point, message, signature),
            #[cfg(feature = "p256")]
            Curve::P256 => crate::p256::verify(point, message, signature),
            #[cfg(feature = "ed25519")]
            Curve::Ed25519 => crate::ed25519::verify(point, message, signature),
            #[allow(unreachable_patterns)]
            other => Err(CryptoError::UnsupportedCurve(other.to_string())),
        }
    }
}
