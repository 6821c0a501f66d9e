//! Curve-tagged key material
//!
//! [`KeyMaterial`] is the internal representation every codec decodes into
//! and encodes from. The public point is always recomputed (private imports)
//! or validated and canonicalized (public imports) through the provider, so
//! a constructed value is guaranteed internally consistent.

use std::fmt;

use keymorph_crypto::{CryptoProvider, Curve};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Result;

/// Which half of a key pair an operation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    Private,
    Public,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeyKind::Private => write!(f, "private"),
            KeyKind::Public => write!(f, "public"),
        }
    }
}

/// A private/public key pair (or public half alone) tied to a curve
///
/// Immutable once constructed; a new import replaces the whole value.
/// The BIP-39 phrase is retained only when the material was imported from a
/// mnemonic, which is what makes exporting back to a mnemonic well-defined.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    #[zeroize(skip)]
    curve: Curve,
    private_scalar: Option<Vec<u8>>,
    public_point: Vec<u8>,
    mnemonic: Option<String>,
}

impl KeyMaterial {
    /// Build from a private scalar, deriving the public point
    ///
    /// The point is always recomputed through the provider, never trusted
    /// from the external format.
    pub fn from_private_scalar(
        curve: Curve,
        scalar: Vec<u8>,
        provider: &dyn CryptoProvider,
    ) -> Result<Self> {
        let public_point = provider.derive_public_key(curve, &scalar)?;
        Ok(Self {
            curve,
            private_scalar: Some(scalar),
            public_point,
            mnemonic: None,
        })
    }

    /// Build from a public point alone, validating it and re-encoding to the
    /// curve's canonical compressed form
    pub fn from_public_point(
        curve: Curve,
        point: &[u8],
        provider: &dyn CryptoProvider,
    ) -> Result<Self> {
        let public_point = provider.compress_point(curve, point)?;
        Ok(Self {
            curve,
            private_scalar: None,
            public_point,
            mnemonic: None,
        })
    }

    /// Attach the originating mnemonic phrase (BIP-39 imports only)
    pub(crate) fn with_mnemonic(mut self, phrase: String) -> Self {
        self.mnemonic = Some(phrase);
        self
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn private_scalar(&self) -> Option<&[u8]> {
        self.private_scalar.as_deref()
    }

    pub fn public_point(&self) -> &[u8] {
        &self.public_point
    }

    pub fn has_private(&self) -> bool {
        self.private_scalar.is_some()
    }

    pub(crate) fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_deref()
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("curve", &self.curve)
            .field(
                "private_scalar",
                &self.private_scalar.as_ref().map(|_| "[REDACTED]"),
            )
            .field("public_point", &hex::encode(&self.public_point))
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
