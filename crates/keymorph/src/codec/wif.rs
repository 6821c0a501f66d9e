//! Wallet Import Format codec
//!
//! Base58Check over (version byte ‖ 32-byte scalar ‖ optional 0x01
//! compression flag). WIF is a secp256k1-only, private-only format; the
//! version byte must match the converter's configured network.
//!
//! See: <https://en.bitcoin.it/wiki/Wallet_import_format>

use keymorph_crypto::{CryptoProvider, Curve};
use keymorph_encoding::{EncodingError, decode_base58check, encode_base58check};

use crate::{
    error::{ConversionError, Result},
    format::KeyFormat,
    material::{KeyKind, KeyMaterial},
    network::Network,
};

/// Trailing payload byte marking a compressed public key
const COMPRESSION_FLAG: u8 = 0x01;

const SCALAR_LENGTH: usize = 32;

pub fn decode(
    text: &str,
    expected: Curve,
    kind: KeyKind,
    network: Network,
    provider: &dyn CryptoProvider,
) -> Result<KeyMaterial> {
    if kind == KeyKind::Public {
        return Err(ConversionError::UnsupportedKeyKind {
            format: KeyFormat::Wif,
            kind,
        });
    }
    if expected != Curve::Secp256k1 {
        return Err(ConversionError::CurveMismatch {
            expected,
            found: Curve::Secp256k1.to_string(),
        });
    }

    let payload = decode_base58check(text).map_err(|e| {
        let reason = match e {
            EncodingError::InvalidChecksum => "checksum mismatch".to_string(),
            other => other.to_string(),
        };
        ConversionError::MalformedInput {
            format: KeyFormat::Wif,
            reason,
        }
    })?;

    let Some((&version, rest)) = payload.split_first() else {
        return Err(ConversionError::MalformedInput {
            format: KeyFormat::Wif,
            reason: "empty payload".into(),
        });
    };
    if version != network.wif_version() {
        return Err(ConversionError::MalformedInput {
            format: KeyFormat::Wif,
            reason: format!(
                "version byte 0x{version:02x} doesn't match the configured network"
            ),
        });
    }

    // Compression is inferred from the payload length after the version byte
    let scalar = match rest.len() {
        SCALAR_LENGTH => rest,
        33 if rest[SCALAR_LENGTH] == COMPRESSION_FLAG => &rest[..SCALAR_LENGTH],
        33 => {
            return Err(ConversionError::MalformedInput {
                format: KeyFormat::Wif,
                reason: format!("invalid compression flag 0x{:02x}", rest[SCALAR_LENGTH]),
            });
        }
        other => {
            return Err(ConversionError::MalformedInput {
                format: KeyFormat::Wif,
                reason: format!("unexpected payload length {other}"),
            });
        }
    };

    KeyMaterial::from_private_scalar(Curve::Secp256k1, scalar.to_vec(), provider)
}

pub fn encode(material: &KeyMaterial, kind: KeyKind, network: Network) -> Result<String> {
    if kind == KeyKind::Public {
        return Err(ConversionError::UnsupportedKeyKind {
            format: KeyFormat::Wif,
            kind,
        });
    }
    if material.curve() != Curve::Secp256k1 {
        return Err(ConversionError::CurveMismatch {
            expected: Curve::Secp256k1,
            found: material.curve().to_string(),
        });
    }
    let scalar = material
        .private_scalar()
        .ok_or(ConversionError::UnsupportedKeyKind {
            format: KeyFormat::Wif,
            kind,
        })?;

    let mut payload = Vec::with_capacity(2 + SCALAR_LENGTH);
    payload.push(network.wif_version());
    payload.extend_from_slice(scalar);
    // The internal public point is always compressed, so the flag is always
    // emitted
    payload.push(COMPRESSION_FLAG);

    Ok(encode_base58check(&payload))
}
