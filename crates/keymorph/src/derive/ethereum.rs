//! Ethereum address derivation
//!
//! Keccak-256 of the 64-byte uncompressed x ‖ y (no 0x04 prefix), last 20
//! bytes, EIP-55 mixed-case hex. secp256k1 only.
//!
//! See: <https://eips.ethereum.org/EIPS/eip-55>

use keymorph_crypto::{CryptoProvider, Curve};
use sha3::{Digest, Keccak256};

use crate::{
    error::{ConversionError, Result},
    material::KeyMaterial,
};

pub fn address(material: &KeyMaterial, provider: &dyn CryptoProvider) -> Result<String> {
    if material.curve() != Curve::Secp256k1 {
        return Err(ConversionError::UnsupportedCurve(
            material.curve().to_string(),
        ));
    }

    let uncompressed = provider.decompress_point(material.curve(), material.public_point())?;
    let hash = Keccak256::digest(&uncompressed[1..]);

    Ok(to_checksum(&hash[12..]))
}

/// EIP-55 mixed-case checksum over a 20-byte address
///
/// A hex letter is uppercased when the corresponding nibble of
/// Keccak-256(lowercase hex) is >= 8.
fn to_checksum(address: &[u8]) -> String {
    let lower = hex::encode(address);
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use keymorph_crypto::SoftwareProvider;

    fn address_for(scalar: &str) -> String {
        let provider = SoftwareProvider::new();
        let material = KeyMaterial::from_private_scalar(
            Curve::Secp256k1,
            hex::decode(scalar).unwrap(),
            &provider,
        )
        .unwrap();
        address(&material, &provider).unwrap()
    }

    #[test]
    fn known_vector() {
        assert_eq!(
            address_for("501c797c4b1fdfa88fb7efdf7c9871b8e0f46dbc44259e3e270e0d4c938165f5"),
            "0xb611C31e4284BF7A7daD3296e62880F14b3b15DD"
        );
    }

    #[test]
    fn anvil_account_zero() {
        assert_eq!(
            address_for("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
    }

    #[test]
    fn eip55_checksum_vectors() {
        // From the EIP-55 specification
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            let bytes = hex::decode(&expected[2..]).unwrap();
            assert_eq!(to_checksum(&bytes), *expected);
        }
    }

    #[test]
    fn non_secp256k1_rejected() {
        let provider = SoftwareProvider::new();
        let material = KeyMaterial::from_private_scalar(
            Curve::Ed25519,
            hex::decode("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60")
                .unwrap(),
            &provider,
        )
        .unwrap();
        assert!(matches!(
            address(&material, &provider).unwrap_err(),
            ConversionError::UnsupportedCurve(_)
        ));
    }
}
