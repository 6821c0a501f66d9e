//! IPFS/libp2p peer-ID derivation
//!
//! The public key is wrapped in the libp2p key envelope, multihashed
//! (identity for short envelopes, SHA-256 otherwise), assembled into a CIDv1
//! with the libp2p-key codec, and multibase-encoded as base32-lower.
//!
//! Key payloads per libp2p: Ed25519 and secp256k1 carry the raw/compressed
//! point; ECDSA (P-256) carries the DER SubjectPublicKeyInfo.

use keymorph_crypto::{CryptoProvider, Curve};
use keymorph_encoding::{KeyEnvelope, varint};
use multihash::Multihash;
use sha2::{Digest, Sha256};

use crate::{
    codec,
    error::{ConversionError, Result},
    material::KeyMaterial,
};

/// Multihash code for the identity hash
const IDENTITY_CODE: u64 = 0x00;
/// Multihash code for SHA2-256
const SHA2_256_CODE: u64 = 0x12;
/// CID version 1
const CID_VERSION: u64 = 0x01;
/// Multicodec for libp2p public keys
const LIBP2P_KEY_CODEC: u64 = 0x72;
/// Envelopes up to this length are inlined with the identity hash
const MAX_INLINE_KEY_LENGTH: usize = 42;

pub fn peer_id(material: &KeyMaterial, provider: &dyn CryptoProvider) -> Result<String> {
    let payload = match material.curve() {
        Curve::Secp256k1 | Curve::Ed25519 => material.public_point().to_vec(),
        Curve::P256 => codec::pkcs8::public_key_der(material, provider)?,
    };

    let envelope = KeyEnvelope::new(material.curve().info().libp2p_key_type, payload).encode();
    let multihash = if envelope.len() <= MAX_INLINE_KEY_LENGTH {
        Multihash::<64>::wrap(IDENTITY_CODE, &envelope)
    } else {
        Multihash::<64>::wrap(SHA2_256_CODE, &Sha256::digest(&envelope))
    }
    .map_err(|e| {
        ConversionError::Encoding(keymorph_encoding::EncodingError::InvalidEnvelope(
            e.to_string(),
        ))
    })?;

    let mut cid = Vec::with_capacity(2 + envelope.len() + 2);
    varint::write_u64(CID_VERSION, &mut cid);
    varint::write_u64(LIBP2P_KEY_CODEC, &mut cid);
    cid.extend_from_slice(&multihash.to_bytes());

    Ok(multibase::encode(multibase::Base::Base32Lower, cid))
}
