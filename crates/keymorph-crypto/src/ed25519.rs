//! Ed25519 key operations
//!
//! The "private scalar" for Ed25519 is the 32-byte signing seed per RFC 8032;
//! public points are compressed Edwards y-coordinates with no uncompressed
//! form.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand_core::RngCore;
use zeroize::Zeroizing;

use crate::{CryptoError, Curve, KeyPair, error::Result};

/// Generates an Ed25519 key pair from the given random source
pub fn generate(rng: &mut dyn RngCore) -> Result<KeyPair> {
    let mut seed = Zeroizing::new([0u8; 32]);
    rng.try_fill_bytes(&mut *seed)
        .map_err(|e| CryptoError::Rng(e.to_string()))?;

    let signing_key = SigningKey::from_bytes(&seed);
    Ok(KeyPair {
        curve: Curve::Ed25519,
        private_bytes: signing_key.to_bytes().to_vec(),
        public_bytes: signing_key.verifying_key().to_bytes().to_vec(),
    })
}

fn signing_key(scalar: &[u8]) -> Result<SigningKey> {
    let seed: &[u8; 32] = scalar.try_into().map_err(|_| {
        CryptoError::KeyError(format!(
            "Ed25519 seed must be 32 bytes, got {}",
            scalar.len()
        ))
    })?;
    Ok(SigningKey::from_bytes(seed))
}

/// Derives the public point from a signing seed
pub fn derive_public_key(scalar: &[u8]) -> Result<Vec<u8>> {
    Ok(signing_key(scalar)?.verifying_key().to_bytes().to_vec())
}

fn verifying_key(point: &[u8]) -> Result<VerifyingKey> {
    VerifyingKey::try_from(point)
        .map_err(|e| CryptoError::KeyError(format!("Ed25519 public key isn't valid: {e}")))
}

pub fn validate_point(point: &[u8]) -> Result<()> {
    verifying_key(point).map(|_| ())
}

/// Edwards points have a single canonical 32-byte encoding, so compression
/// and decompression only validate
pub fn compress_point(point: &[u8]) -> Result<Vec<u8>> {
    verifying_key(point).map(|vk| vk.to_bytes().to_vec())
}

pub fn decompress_point(point: &[u8]) -> Result<Vec<u8>> {
    compress_point(point)
}

/// EdDSA signature per RFC 8032, 64 bytes
pub fn sign(scalar: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    Ok(signing_key(scalar)?.sign(message).to_bytes().to_vec())
}

pub fn verify(point: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
    let verifying_key = verifying_key(point)?;
    let signature = Signature::from_slice(signature)
        .map_err(|e| CryptoError::SignatureError(format!("Ed25519 signature: {e}")))?;

    Ok(verifying_key.verify(message, &signature).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8032 test vector 1
    const SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const PUBLIC: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const SIGNATURE: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

    #[test]
    fn derive_from_seed() {
        let public = derive_public_key(&hex::decode(SEED).unwrap()).unwrap();
        assert_eq!(hex::encode(public), PUBLIC);
    }

    #[test]
    fn rfc8032_signature() {
        let signature = sign(&hex::decode(SEED).unwrap(), b"").unwrap();
        assert_eq!(hex::encode(&signature), SIGNATURE);
        assert!(verify(&hex::decode(PUBLIC).unwrap(), b"", &signature).unwrap());
    }

    #[test]
    fn wrong_seed_length() {
        assert!(derive_public_key(&[0u8; 31]).is_err());
    }

    #[test]
    fn tampered_message() {
        let signature = sign(&hex::decode(SEED).unwrap(), b"hello").unwrap();
        assert!(!verify(&hex::decode(PUBLIC).unwrap(), b"hell0", &signature).unwrap());
    }
}
