//! Hex string codec
//!
//! Case-insensitive hex over the raw byte encoding. Odd-length and non-hex
//! inputs are rejected.

use keymorph_crypto::{CryptoProvider, Curve};

use crate::{
    codec::raw,
    error::{ConversionError, Result},
    format::KeyFormat,
    material::{KeyKind, KeyMaterial},
};

pub fn decode(
    text: &str,
    curve: Curve,
    kind: KeyKind,
    provider: &dyn CryptoProvider,
) -> Result<KeyMaterial> {
    let bytes = hex::decode(text.trim()).map_err(|e| ConversionError::MalformedInput {
        format: KeyFormat::Hex,
        reason: e.to_string(),
    })?;

    raw::decode(&bytes, curve, kind, provider).map_err(|e| match e {
        // Re-attribute structural errors from the raw layer to this codec
        ConversionError::MalformedInput { reason, .. } => ConversionError::MalformedInput {
            format: KeyFormat::Hex,
            reason,
        },
        other => other,
    })
}

pub fn encode(material: &KeyMaterial, kind: KeyKind) -> Result<String> {
    raw::encode(material, kind)
        .map(|bytes| hex::encode(bytes))
        .map_err(|e| match e {
            ConversionError::UnsupportedKeyKind { kind, .. } => {
                ConversionError::UnsupportedKeyKind {
                    format: KeyFormat::Hex,
                    kind,
                }
            }
            other => other,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use keymorph_crypto::SoftwareProvider;

    const SCALAR: &str = "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a";

    #[test]
    fn case_insensitive() {
        let provider = SoftwareProvider::new();
        let lower = decode(SCALAR, Curve::Secp256k1, KeyKind::Private, &provider).unwrap();
        let upper = decode(
            SCALAR.to_uppercase().as_str(),
            Curve::Secp256k1,
            KeyKind::Private,
            &provider,
        )
        .unwrap();

        assert_eq!(lower.private_scalar(), upper.private_scalar());
        assert_eq!(encode(&lower, KeyKind::Private).unwrap(), SCALAR);
    }

    #[test]
    fn odd_length_rejected() {
        let provider = SoftwareProvider::new();
        let result = decode(&SCALAR[1..], Curve::Secp256k1, KeyKind::Private, &provider);
        assert!(matches!(
            result.unwrap_err(),
            ConversionError::MalformedInput { .. }
        ));
    }

    #[test]
    fn non_hex_digit_rejected() {
        let provider = SoftwareProvider::new();
        let mut bad = SCALAR.to_string();
        bad.replace_range(0..2, "zz");
        let result = decode(&bad, Curve::Secp256k1, KeyKind::Private, &provider);
        assert!(matches!(
            result.unwrap_err(),
            ConversionError::MalformedInput { .. }
        ));
    }
}
