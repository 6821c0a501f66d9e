//! JWK (JSON Web Key) codec per RFC 7517
//!
//! EC curves carry `{kty:"EC", crv, x, y, d?}`; Ed25519 carries
//! `{kty:"OKP", crv:"Ed25519", x, d?}`. All members are base64url without
//! padding. The declared `crv` is validated against the converter's curve.

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use keymorph_crypto::{CryptoProvider, Curve, PointEncoding};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    error::{ConversionError, Result},
    format::KeyFormat,
    material::{KeyKind, KeyMaterial},
};

/// RFC 7517 JWK struct
#[derive(Debug, Serialize, Deserialize, Clone, Zeroize, ZeroizeOnDrop)]
pub struct Jwk {
    #[serde(rename = "kid")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    #[serde(flatten)]
    pub params: Params,
}

/// JWK key types and associated parameters
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Zeroize, ZeroizeOnDrop)]
#[serde(tag = "kty")]
pub enum Params {
    EC(EcParams),
    OKP(OkpParams),
}

/// Elliptic curve parameters (secp256k1, P-256)
#[derive(Debug, Serialize, Deserialize, Clone, Zeroize, PartialEq, ZeroizeOnDrop)]
pub struct EcParams {
    #[serde(rename = "crv")]
    pub curve: String,
    pub x: String,
    pub y: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
}

/// Octet key pair parameters (Ed25519)
#[derive(Debug, Serialize, Deserialize, Clone, Zeroize, PartialEq, ZeroizeOnDrop)]
pub struct OkpParams {
    #[serde(rename = "crv")]
    pub curve: String,
    pub x: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
}

fn malformed(reason: impl Into<String>) -> ConversionError {
    ConversionError::MalformedInput {
        format: KeyFormat::Jwk,
        reason: reason.into(),
    }
}

fn decode_member(name: &str, value: &str, expected_length: usize) -> Result<Vec<u8>> {
    let bytes = BASE64_URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|e| malformed(format!("member {name}: {e}")))?;
    if bytes.len() != expected_length {
        return Err(malformed(format!(
            "member {name}: expected {expected_length} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(bytes)
}

/// Resolve the declared `crv` and check it against the converter's curve
fn resolve_curve(declared: &str, expected: Curve) -> Result<Curve> {
    let curve = Curve::try_from(declared)
        .map_err(|_| ConversionError::UnsupportedCurve(declared.to_string()))?;
    if curve != expected {
        return Err(ConversionError::CurveMismatch {
            expected,
            found: declared.to_string(),
        });
    }
    Ok(curve)
}

pub fn decode(
    text: &str,
    expected: Curve,
    kind: KeyKind,
    provider: &dyn CryptoProvider,
) -> Result<KeyMaterial> {
    let jwk: Jwk = serde_json::from_str(text).map_err(|e| malformed(e.to_string()))?;

    match &jwk.params {
        Params::EC(params) => {
            let curve = resolve_curve(&params.curve, expected)?;
            let info = curve.info();
            if info.jwk_kty != "EC" {
                return Err(malformed(format!(
                    "curve {curve} does not use kty \"EC\""
                )));
            }

            let coordinate_length = info.scalar_length;
            let x = decode_member("x", &params.x, coordinate_length)?;
            let y = decode_member("y", &params.y, coordinate_length)?;
            let mut uncompressed = Vec::with_capacity(info.uncompressed_point_length);
            uncompressed.push(0x04);
            uncompressed.extend_from_slice(&x);
            uncompressed.extend_from_slice(&y);

            match (&params.d, kind) {
                (Some(d), KeyKind::Private) => {
                    let scalar = decode_member("d", d, info.scalar_length)?;
                    let material = KeyMaterial::from_private_scalar(curve, scalar, provider)?;
                    // The declared point is never trusted, but silent
                    // disagreement would mask a corrupted key
                    let declared = provider.compress_point(curve, &uncompressed)?;
                    if declared != material.public_point() {
                        return Err(malformed(
                            "declared public point doesn't match the private key",
                        ));
                    }
                    Ok(material)
                }
                (None, KeyKind::Private) => Err(ConversionError::UnsupportedKeyKind {
                    format: KeyFormat::Jwk,
                    kind,
                }),
                (_, KeyKind::Public) => {
                    KeyMaterial::from_public_point(curve, &uncompressed, provider)
                }
            }
        }
        Params::OKP(params) => {
            let curve = resolve_curve(&params.curve, expected)?;
            let info = curve.info();
            if info.jwk_kty != "OKP" {
                return Err(malformed(format!(
                    "curve {curve} does not use kty \"OKP\""
                )));
            }

            let x = decode_member("x", &params.x, info.compressed_point_length)?;

            match (&params.d, kind) {
                (Some(d), KeyKind::Private) => {
                    let scalar = decode_member("d", d, info.scalar_length)?;
                    let material = KeyMaterial::from_private_scalar(curve, scalar, provider)?;
                    if x != material.public_point() {
                        return Err(malformed(
                            "declared public point doesn't match the private key",
                        ));
                    }
                    Ok(material)
                }
                (None, KeyKind::Private) => Err(ConversionError::UnsupportedKeyKind {
                    format: KeyFormat::Jwk,
                    kind,
                }),
                (_, KeyKind::Public) => KeyMaterial::from_public_point(curve, &x, provider),
            }
        }
    }
}

pub fn encode(material: &KeyMaterial, kind: KeyKind, provider: &dyn CryptoProvider) -> Result<String> {
    let curve = material.curve();
    let info = curve.info();

    let d = match kind {
        KeyKind::Private => {
            let scalar =
                material
                    .private_scalar()
                    .ok_or(ConversionError::UnsupportedKeyKind {
                        format: KeyFormat::Jwk,
                        kind,
                    })?;
            Some(BASE64_URL_SAFE_NO_PAD.encode(scalar))
        }
        KeyKind::Public => None,
    };

    let params = match info.point_encoding {
        PointEncoding::Sec1 => {
            let uncompressed = provider.decompress_point(curve, material.public_point())?;
            let (x, y) = uncompressed[1..].split_at(info.scalar_length);
            Params::EC(EcParams {
                curve: info.jwk_crv.to_string(),
                x: BASE64_URL_SAFE_NO_PAD.encode(x),
                y: BASE64_URL_SAFE_NO_PAD.encode(y),
                d,
            })
        }
        PointEncoding::Edwards => Params::OKP(OkpParams {
            curve: info.jwk_crv.to_string(),
            x: BASE64_URL_SAFE_NO_PAD.encode(material.public_point()),
            d,
        }),
    };

    serde_json::to_string(&Jwk {
        key_id: None,
        params,
    })
    .map_err(|e| malformed(format!("serialization: {e}")))
}
