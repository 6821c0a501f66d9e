//! P-256 (secp256r1/prime256v1) key operations

use p256::{
    AffinePoint, EncodedPoint,
    ecdsa::{
        Signature, SigningKey, VerifyingKey,
        signature::{Signer, Verifier},
    },
    elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint},
};
use rand_core::RngCore;
use zeroize::Zeroizing;

use crate::{CryptoError, Curve, KeyPair, error::Result};

/// Generates a P-256 key pair from the given random source
pub fn generate(rng: &mut dyn RngCore) -> Result<KeyPair> {
    let mut scalar = Zeroizing::new([0u8; 32]);
    let signing_key = loop {
        rng.try_fill_bytes(&mut *scalar)
            .map_err(|e| CryptoError::Rng(e.to_string()))?;
        if let Ok(key) = SigningKey::from_slice(&*scalar) {
            break key;
        }
    };

    let verifying_key = VerifyingKey::from(&signing_key);
    Ok(KeyPair {
        curve: Curve::P256,
        private_bytes: signing_key.to_bytes().to_vec(),
        public_bytes: verifying_key.to_encoded_point(true).as_bytes().to_vec(),
    })
}

/// Derives the compressed public point from a private scalar
pub fn derive_public_key(scalar: &[u8]) -> Result<Vec<u8>> {
    let signing_key = SigningKey::from_slice(scalar)
        .map_err(|e| CryptoError::KeyError(format!("P-256 secret material isn't valid: {e}")))?;

    Ok(VerifyingKey::from(&signing_key)
        .to_encoded_point(true)
        .as_bytes()
        .to_vec())
}

fn affine_point(point: &[u8]) -> Result<AffinePoint> {
    let ep = EncodedPoint::from_bytes(point)
        .map_err(|e| CryptoError::KeyError(format!("P-256 public key isn't valid: {e}")))?;

    AffinePoint::from_encoded_point(&ep)
        .into_option()
        .ok_or_else(|| CryptoError::KeyError("P-256 point is not on the curve".into()))
}

pub fn validate_point(point: &[u8]) -> Result<()> {
    affine_point(point).map(|_| ())
}

pub fn compress_point(point: &[u8]) -> Result<Vec<u8>> {
    Ok(affine_point(point)?.to_encoded_point(true).as_bytes().to_vec())
}

pub fn decompress_point(point: &[u8]) -> Result<Vec<u8>> {
    Ok(affine_point(point)?
        .to_encoded_point(false)
        .as_bytes()
        .to_vec())
}

/// ECDSA signature over SHA-256, 64-byte r ‖ s
pub fn sign(scalar: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let signing_key = SigningKey::from_slice(scalar)
        .map_err(|e| CryptoError::KeyError(format!("P-256 secret material isn't valid: {e}")))?;

    let signature: Signature = signing_key.sign(message);
    Ok(signature.to_vec())
}

pub fn verify(point: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
    let verifying_key = VerifyingKey::from_sec1_bytes(point)
        .map_err(|e| CryptoError::KeyError(format!("P-256 public key isn't valid: {e}")))?;
    let signature = Signature::from_slice(signature)
        .map_err(|e| CryptoError::SignatureError(format!("P-256 signature: {e}")))?;

    Ok(verifying_key.verify(message, &signature).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALAR: &str = "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a";
    const COMPRESSED: &str = "02a88652f80c01cc32214587bb31b314f628fa5d5a9f1a13d7ac52afb7a894d357";
    const UNCOMPRESSED: &str = "04a88652f80c01cc32214587bb31b314f628fa5d5a9f1a13d7ac52afb7a894d35739a2a5c631637be276f5a369957fdcbb6b895314d42367e8199d269db13f8e74";

    #[test]
    fn derive_from_scalar() {
        let public = derive_public_key(&hex::decode(SCALAR).unwrap()).unwrap();
        assert_eq!(hex::encode(public), COMPRESSED);
    }

    #[test]
    fn compress_decompress() {
        let compressed = hex::decode(COMPRESSED).unwrap();
        let uncompressed = decompress_point(&compressed).unwrap();
        assert_eq!(hex::encode(&uncompressed), UNCOMPRESSED);
        assert_eq!(compress_point(&uncompressed).unwrap(), compressed);
    }

    #[test]
    fn sign_and_verify() {
        let scalar = hex::decode(SCALAR).unwrap();
        let public = derive_public_key(&scalar).unwrap();
        let signature = sign(&scalar, b"test message").unwrap();

        assert!(verify(&public, b"test message", &signature).unwrap());
        assert!(!verify(&public, b"other message", &signature).unwrap());
    }
}
