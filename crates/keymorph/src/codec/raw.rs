//! Raw byte codec
//!
//! Fixed-length big-endian scalar or SEC1/Edwards point bytes. Raw bytes
//! carry neither a curve tag nor a key kind, so both come from the caller.

use keymorph_crypto::{CryptoProvider, Curve};

use crate::{
    error::{ConversionError, Result},
    format::KeyFormat,
    material::{KeyKind, KeyMaterial},
};

pub fn decode(
    bytes: &[u8],
    curve: Curve,
    kind: KeyKind,
    provider: &dyn CryptoProvider,
) -> Result<KeyMaterial> {
    match kind {
        KeyKind::Private => {
            let expected = curve.info().scalar_length;
            if bytes.len() != expected {
                return Err(ConversionError::MalformedInput {
                    format: KeyFormat::Raw,
                    reason: format!("expected {expected} scalar bytes, got {}", bytes.len()),
                });
            }
            KeyMaterial::from_private_scalar(curve, bytes.to_vec(), provider)
        }
        KeyKind::Public => KeyMaterial::from_public_point(curve, bytes, provider),
    }
}

pub fn encode(material: &KeyMaterial, kind: KeyKind) -> Result<Vec<u8>> {
    match kind {
        KeyKind::Private => material
            .private_scalar()
            .map(<[u8]>::to_vec)
            .ok_or(ConversionError::UnsupportedKeyKind {
                format: KeyFormat::Raw,
                kind,
            }),
        KeyKind::Public => Ok(material.public_point().to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keymorph_crypto::SoftwareProvider;

    #[test]
    fn private_roundtrip() {
        let provider = SoftwareProvider::new();
        let scalar =
            hex::decode("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a")
                .unwrap();

        let material = decode(&scalar, Curve::Secp256k1, KeyKind::Private, &provider).unwrap();
        assert_eq!(encode(&material, KeyKind::Private).unwrap(), scalar);
    }

    #[test]
    fn wrong_scalar_length() {
        let provider = SoftwareProvider::new();
        let result = decode(&[0xAB; 31], Curve::Ed25519, KeyKind::Private, &provider);
        assert!(matches!(
            result.unwrap_err(),
            ConversionError::MalformedInput { .. }
        ));
    }

    #[test]
    fn public_only_material_has_no_private_export() {
        let provider = SoftwareProvider::new();
        let scalar =
            hex::decode("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60")
                .unwrap();
        let full = decode(&scalar, Curve::Ed25519, KeyKind::Private, &provider).unwrap();

        let public_only = decode(
            full.public_point(),
            Curve::Ed25519,
            KeyKind::Public,
            &provider,
        )
        .unwrap();

        assert!(matches!(
            encode(&public_only, KeyKind::Private).unwrap_err(),
            ConversionError::UnsupportedKeyKind { .. }
        ));
    }
}
