//! Bitcoin P2PKH address derivation
//!
//! Base58Check(version ‖ RIPEMD160(SHA256(compressed point))). secp256k1
//! only.

use keymorph_encoding::encode_base58check;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use keymorph_crypto::Curve;

use crate::{
    error::{ConversionError, Result},
    material::KeyMaterial,
    network::Network,
};

pub fn address(material: &KeyMaterial, network: Network) -> Result<String> {
    if material.curve() != Curve::Secp256k1 {
        return Err(ConversionError::UnsupportedCurve(
            material.curve().to_string(),
        ));
    }

    let digest = Ripemd160::digest(Sha256::digest(material.public_point()));
    let mut payload = Vec::with_capacity(1 + digest.len());
    payload.push(network.p2pkh_version());
    payload.extend_from_slice(&digest);

    Ok(encode_base58check(&payload))
}
