//! secp256k1 key operations

use k256::{
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

/// Generates a secp256k1 key pair from the given random source
pub fn generate(rng: &mut dyn RngCore) -> Result<KeyPair> {
    let mut scalar = Zeroizing::new([0u8; 32]);
    let signing_key = loop {
        rng.try_fill_bytes(&mut *scalar)
            .map_err(|e| CryptoError::Rng(e.to_string()))?;
        // Rejection-sample until the bytes are a valid scalar (non-zero, < n)
        if let Ok(key) = SigningKey::from_slice(&*scalar) {
            break key;
        }
    };

    let verifying_key = VerifyingKey::from(&signing_key);
    Ok(KeyPair {
        curve: Curve::Secp256k1,
        private_bytes: signing_key.to_bytes().to_vec(),
        public_bytes: verifying_key.to_encoded_point(true).as_bytes().to_vec(),
    })
}

/// Derives the compressed public point from a private scalar
pub fn derive_public_key(scalar: &[u8]) -> Result<Vec<u8>> {
    let signing_key = SigningKey::from_slice(scalar).map_err(|e| {
        CryptoError::KeyError(format!("secp256k1 secret material isn't valid: {e}"))
    })?;

    Ok(VerifyingKey::from(&signing_key)
        .to_encoded_point(true)
        .as_bytes()
        .to_vec())
}

/// Parses SEC1 bytes (compressed or uncompressed) and checks the point is on
/// the curve
fn affine_point(point: &[u8]) -> Result<AffinePoint> {
    let ep = EncodedPoint::from_bytes(point)
        .map_err(|e| CryptoError::KeyError(format!("secp256k1 public key isn't valid: {e}")))?;

    AffinePoint::from_encoded_point(&ep)
        .into_option()
        .ok_or_else(|| CryptoError::KeyError("secp256k1 point is not on the curve".into()))
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
    let signing_key = SigningKey::from_slice(scalar).map_err(|e| {
        CryptoError::KeyError(format!("secp256k1 secret material isn't valid: {e}"))
    })?;

    let signature: Signature = signing_key.sign(message);
    Ok(signature.to_vec())
}

pub fn verify(point: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
    let verifying_key = VerifyingKey::from_sec1_bytes(point)
        .map_err(|e| CryptoError::KeyError(format!("secp256k1 public key isn't valid: {e}")))?;
    let signature = Signature::from_slice(signature)
        .map_err(|e| CryptoError::SignatureError(format!("secp256k1 signature: {e}")))?;

    Ok(verifying_key.verify(message, &signature).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALAR: &str = "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a";
    const COMPRESSED: &str = "025b7032d9b3955e59dfdfc1d56860dc971495246ac027eab148699210e66607ac";
    const UNCOMPRESSED: &str = "045b7032d9b3955e59dfdfc1d56860dc971495246ac027eab148699210e66607ac6a8d9d47d313698480e565ee1f18e99683d6ed7a6fbd1e9de68f4dea053898c0";

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
    fn reject_zero_scalar() {
        assert!(derive_public_key(&[0u8; 32]).is_err());
    }

    #[test]
    fn reject_point_off_curve() {
        let mut point = hex::decode(UNCOMPRESSED).unwrap();
        point[64] ^= 0x01;
        assert!(validate_point(&point).is_err());
    }

    #[test]
    fn sign_and_verify() {
        let scalar = hex::decode(SCALAR).unwrap();
        let public = derive_public_key(&scalar).unwrap();
        let signature = sign(&scalar, b"test message").unwrap();

        assert_eq!(signature.len(), 64);
        assert!(verify(&public, b"test message", &signature).unwrap());
        assert!(!verify(&public, b"other message", &signature).unwrap());
    }
}
