//! Curve registry
//!
//! A closed enumeration of the supported curves plus a static descriptor per
//! curve. Adding a curve means adding a variant and registering its byte
//! lengths and encodings here.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::CryptoError;

// ****************************************************************************
// libp2p key type tags
// See: https://github.com/libp2p/specs/blob/master/peer-ids/peer-ids.md
// ****************************************************************************
pub const LIBP2P_RSA: u64 = 0;
pub const LIBP2P_ED25519: u64 = 1;
pub const LIBP2P_SECP256K1: u64 = 2;
pub const LIBP2P_ECDSA: u64 = 3;

/// Supported curves
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Zeroize)]
pub enum Curve {
    Secp256k1,
    P256,
    Ed25519,
}

/// Hash algorithm associated with a curve's signature scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
}

/// How public points are encoded on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointEncoding {
    /// SEC1: 33-byte compressed or 65-byte uncompressed, 0x02/0x03/0x04 tag
    Sec1,
    /// Compressed Edwards y-coordinate, always 32 bytes
    Edwards,
}

/// Static description of a curve's byte lengths and encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveInfo {
    pub scalar_length: usize,
    pub compressed_point_length: usize,
    pub uncompressed_point_length: usize,
    pub hash: HashAlgorithm,
    pub point_encoding: PointEncoding,
    pub jwk_kty: &'static str,
    pub jwk_crv: &'static str,
    pub libp2p_key_type: u64,
}

static SECP256K1_INFO: CurveInfo = CurveInfo {
    scalar_length: 32,
    compressed_point_length: 33,
    uncompressed_point_length: 65,
    hash: HashAlgorithm::Sha256,
    point_encoding: PointEncoding::Sec1,
    jwk_kty: "EC",
    jwk_crv: "secp256k1",
    libp2p_key_type: LIBP2P_SECP256K1,
};

static P256_INFO: CurveInfo = CurveInfo {
    scalar_length: 32,
    compressed_point_length: 33,
    uncompressed_point_length: 65,
    hash: HashAlgorithm::Sha256,
    point_encoding: PointEncoding::Sec1,
    jwk_kty: "EC",
    jwk_crv: "P-256",
    libp2p_key_type: LIBP2P_ECDSA,
};

static ED25519_INFO: CurveInfo = CurveInfo {
    scalar_length: 32,
    compressed_point_length: 32,
    uncompressed_point_length: 32,
    hash: HashAlgorithm::Sha512,
    point_encoding: PointEncoding::Edwards,
    jwk_kty: "OKP",
    jwk_crv: "Ed25519",
    libp2p_key_type: LIBP2P_ED25519,
};

impl Curve {
    /// Static descriptor for this curve
    pub fn info(&self) -> &'static CurveInfo {
        match self {
            Curve::Secp256k1 => &SECP256K1_INFO,
            Curve::P256 => &P256_INFO,
            Curve::Ed25519 => &ED25519_INFO,
        }
    }
}

impl TryFrom<&str> for Curve {
    type Error = CryptoError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "secp256k1" => Ok(Curve::Secp256k1),
            "P-256" => Ok(Curve::P256),
            "Ed25519" => Ok(Curve::Ed25519),
            _ => Err(CryptoError::UnsupportedCurve(value.to_string())),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Curve::Secp256k1 => write!(f, "secp256k1"),
            Curve::P256 => write!(f, "P-256"),
            Curve::Ed25519 => write!(f, "Ed25519"),
        }
    }
}
