//! Format registry
//!
//! One [`FormatDescriptor`] per supported external encoding, purely
//! declarative: whether decoding needs the caller to supply a curve, and
//! which key kinds the format can round-trip.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, Result};

/// Supported external key serializations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyFormat {
    Raw,
    Hex,
    Wif,
    Bip39,
    Jwk,
    Pkcs8,
}

/// Static description of a format's capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub name: &'static str,
    /// Input carries no curve tag; the converter's curve is authoritative
    pub requires_curve: bool,
    pub private_capable: bool,
    pub public_capable: bool,
}

static RAW: FormatDescriptor = FormatDescriptor {
    name: "raw",
    requires_curve: true,
    private_capable: true,
    public_capable: true,
};

static HEX: FormatDescriptor = FormatDescriptor {
    name: "hex",
    requires_curve: true,
    private_capable: true,
    public_capable: true,
};

static WIF: FormatDescriptor = FormatDescriptor {
    name: "wif",
    requires_curve: false,
    private_capable: true,
    public_capable: false,
};

static BIP39: FormatDescriptor = FormatDescriptor {
    name: "bip39",
    requires_curve: true,
    private_capable: true,
    public_capable: false,
};

static JWK: FormatDescriptor = FormatDescriptor {
    name: "jwk",
    requires_curve: false,
    private_capable: true,
    public_capable: true,
};

static PKCS8: FormatDescriptor = FormatDescriptor {
    name: "pkcs8",
    requires_curve: false,
    private_capable: true,
    public_capable: true,
};

impl KeyFormat {
    /// Static descriptor for this format
    pub fn descriptor(&self) -> &'static FormatDescriptor {
        match self {
            KeyFormat::Raw => &RAW,
            KeyFormat::Hex => &HEX,
            KeyFormat::Wif => &WIF,
            KeyFormat::Bip39 => &BIP39,
            KeyFormat::Jwk => &JWK,
            KeyFormat::Pkcs8 => &PKCS8,
        }
    }
}

impl TryFrom<&str> for KeyFormat {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "raw" => Ok(KeyFormat::Raw),
            "hex" => Ok(KeyFormat::Hex),
            "wif" => Ok(KeyFormat::Wif),
            "bip39" => Ok(KeyFormat::Bip39),
            "jwk" => Ok(KeyFormat::Jwk),
            "pkcs8" => Ok(KeyFormat::Pkcs8),
            _ => Err(ConversionError::UnknownFormat(value.to_string())),
        }
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.descriptor().name)
    }
}

/// Input to an import: either raw bytes or text, depending on the format
#[derive(Debug, Clone, Copy)]
pub enum KeySource<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl<'a> KeySource<'a> {
    /// View as text (UTF-8 byte inputs are accepted)
    pub(crate) fn text(&self, format: KeyFormat) -> Result<&'a str> {
        match self {
            KeySource::Text(s) => Ok(s),
            KeySource::Bytes(b) => std::str::from_utf8(b).map_err(|_| {
                ConversionError::MalformedInput {
                    format,
                    reason: "expected text input".into(),
                }
            }),
        }
    }

    pub(crate) fn bytes(&self) -> &'a [u8] {
        match self {
            KeySource::Bytes(b) => b,
            KeySource::Text(s) => s.as_bytes(),
        }
    }
}

impl<'a> From<&'a [u8]> for KeySource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        KeySource::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for KeySource<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        KeySource::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for KeySource<'a> {
    fn from(text: &'a str) -> Self {
        KeySource::Text(text)
    }
}

impl<'a> From<&'a String> for KeySource<'a> {
    fn from(text: &'a String) -> Self {
        KeySource::Text(text)
    }
}

/// Output of an export: bytes for `raw`, text for every other format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedKey {
    Bytes(Vec<u8>),
    Text(String),
}

impl EncodedKey {
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            EncodedKey::Bytes(bytes) => bytes,
            EncodedKey::Text(text) => text.into_bytes(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            EncodedKey::Text(text) => Some(text),
            EncodedKey::Bytes(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_roundtrip() {
        for format in [
            KeyFormat::Raw,
            KeyFormat::Hex,
            KeyFormat::Wif,
            KeyFormat::Bip39,
            KeyFormat::Jwk,
            KeyFormat::Pkcs8,
        ] {
            assert_eq!(
                KeyFormat::try_from(format.to_string().as_str()).unwrap(),
                format
            );
        }
    }

    #[test]
    fn unknown_format() {
        assert!(matches!(
            KeyFormat::try_from("pgp").unwrap_err(),
            ConversionError::UnknownFormat(_)
        ));
    }

    #[test]
    fn descriptors() {
        assert!(KeyFormat::Raw.descriptor().requires_curve);
        assert!(!KeyFormat::Wif.descriptor().public_capable);
        assert!(!KeyFormat::Bip39.descriptor().public_capable);
        assert!(KeyFormat::Jwk.descriptor().private_capable);
    }
}
