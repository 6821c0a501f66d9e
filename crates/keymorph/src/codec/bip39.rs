//! BIP-39 mnemonic codec
//!
//! Decode maps phrase → 64-byte PBKDF2 seed (delegated to the `bip39` crate,
//! empty passphrase) → the first 32 seed bytes as the private scalar. The
//! same truncation applies to every supported curve; for Ed25519 those bytes
//! are the signing seed.
//!
//! The mnemonic is one-directional: the phrase cannot be reconstructed from
//! a scalar, so encode only succeeds when the material was imported from a
//! mnemonic and the original phrase was retained.

use bip39::Mnemonic;
use keymorph_crypto::{CryptoProvider, Curve};
use zeroize::Zeroizing;

use crate::{
    error::{ConversionError, Result},
    format::KeyFormat,
    material::{KeyKind, KeyMaterial},
};

const SCALAR_LENGTH: usize = 32;

pub fn decode(
    phrase: &str,
    curve: Curve,
    kind: KeyKind,
    provider: &dyn CryptoProvider,
) -> Result<KeyMaterial> {
    if kind == KeyKind::Public {
        return Err(ConversionError::UnsupportedKeyKind {
            format: KeyFormat::Bip39,
            kind,
        });
    }

    let normalized = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
    let mnemonic = Mnemonic::parse(&normalized).map_err(|e| ConversionError::MalformedInput {
        format: KeyFormat::Bip39,
        reason: e.to_string(),
    })?;

    let seed = Zeroizing::new(mnemonic.to_seed(""));
    let material =
        KeyMaterial::from_private_scalar(curve, seed[..SCALAR_LENGTH].to_vec(), provider)
            .map_err(|e| match e {
                // A seed slice that isn't a valid scalar is a malformed input,
                // not a crypto failure
                ConversionError::Crypto(err) => ConversionError::MalformedInput {
                    format: KeyFormat::Bip39,
                    reason: err.to_string(),
                },
                other => other,
            })?;

    Ok(material.with_mnemonic(normalized))
}

pub fn encode(material: &KeyMaterial, kind: KeyKind) -> Result<String> {
    if kind == KeyKind::Public {
        return Err(ConversionError::UnsupportedKeyKind {
            format: KeyFormat::Bip39,
            kind,
        });
    }

    material
        .mnemonic()
        .map(str::to_owned)
        .ok_or(ConversionError::UnsupportedKeyKind {
            format: KeyFormat::Bip39,
            kind,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use keymorph_crypto::SoftwareProvider;

    // BIP-39 test vector: 128-bit zero entropy
    const PHRASE: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const SCALAR: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1";

    #[test]
    fn seed_truncation() {
        let provider = SoftwareProvider::new();
        let material = decode(PHRASE, Curve::Secp256k1, KeyKind::Private, &provider).unwrap();
        assert_eq!(hex::encode(material.private_scalar().unwrap()), SCALAR);
    }

    #[test]
    fn whitespace_normalized() {
        let provider = SoftwareProvider::new();
        let messy = format!("  {}  ", PHRASE.replace(' ', "   "));
        let material = decode(&messy, Curve::Secp256k1, KeyKind::Private, &provider).unwrap();
        assert_eq!(encode(&material, KeyKind::Private).unwrap(), PHRASE);
    }

    #[test]
    fn invalid_word_rejected() {
        let provider = SoftwareProvider::new();
        let bad = PHRASE.replace("about", "aboot");
        let result = decode(&bad, Curve::Secp256k1, KeyKind::Private, &provider);
        assert!(matches!(
            result.unwrap_err(),
            ConversionError::MalformedInput { .. }
        ));
    }

    #[test]
    fn bad_checksum_rejected() {
        let provider = SoftwareProvider::new();
        // Valid words, broken BIP-39 checksum
        let bad = PHRASE.replace("about", "abandon");
        let result = decode(&bad, Curve::Secp256k1, KeyKind::Private, &provider);
        assert!(matches!(
            result.unwrap_err(),
            ConversionError::MalformedInput { .. }
        ));
    }

    #[test]
    fn phrase_retained_for_reverse_export() {
        let provider = SoftwareProvider::new();
        let material = decode(PHRASE, Curve::Ed25519, KeyKind::Private, &provider).unwrap();
        assert_eq!(encode(&material, KeyKind::Private).unwrap(), PHRASE);
    }

    #[test]
    fn scalar_material_cannot_export() {
        let provider = SoftwareProvider::new();
        let material = KeyMaterial::from_private_scalar(
            Curve::Secp256k1,
            hex::decode(SCALAR).unwrap(),
            &provider,
        )
        .unwrap();
        assert!(matches!(
            encode(&material, KeyKind::Private).unwrap_err(),
            ConversionError::UnsupportedKeyKind { .. }
        ));
    }
}
