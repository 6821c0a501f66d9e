//! Conversion facade
//!
//! [`KeyConverter`] owns a single [`KeyMaterial`] slot and orchestrates the
//! codecs and the derivation engine over it. Imports are atomic: the new
//! material is fully decoded before the slot is replaced, so a failed import
//! leaves the prior state untouched.

use keymorph_crypto::{CryptoProvider, Curve, SoftwareProvider};
use rand_core::RngCore;
use tracing::debug;

use crate::{
    codec, derive,
    error::{ConversionError, Result},
    format::{EncodedKey, KeyFormat, KeySource},
    material::{KeyKind, KeyMaterial},
    network::Network,
};

/// Universal key format converter
///
/// One instance holds at most one key, tied to the curve chosen at
/// construction. Instances don't share state; use one per key.
pub struct KeyConverter<P: CryptoProvider = SoftwareProvider> {
    curve: Curve,
    network: Network,
    provider: P,
    material: Option<KeyMaterial>,
}

impl KeyConverter<SoftwareProvider> {
    /// New converter over the default software provider
    pub fn new(curve: Curve) -> Self {
        Self::with_provider(curve, SoftwareProvider::new())
    }
}

impl<P: CryptoProvider> KeyConverter<P> {
    /// New converter with an explicit cryptographic provider
    pub fn with_provider(curve: Curve, provider: P) -> Self {
        Self {
            curve,
            network: Network::default(),
            provider,
            material: None,
        }
    }

    /// Select the Bitcoin network (WIF and P2PKH version bytes)
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Currently loaded key material, if any
    pub fn material(&self) -> Option<&KeyMaterial> {
        self.material.as_ref()
    }

    /// Decode `source` as `format` and replace the held key material
    pub fn import<'a>(
        &mut self,
        source: impl Into<KeySource<'a>>,
        format: KeyFormat,
        kind: KeyKind,
    ) -> Result<()> {
        let source = source.into();
        let material = self
            .decode(&source, format, kind)
            .map_err(|e| ConversionError::ImportFailed {
                format,
                source: Box::new(e),
            })?;

        debug!(curve = %self.curve, %format, %kind, "imported key material");
        self.material = Some(material);
        Ok(())
    }

    fn decode(
        &self,
        source: &KeySource<'_>,
        format: KeyFormat,
        kind: KeyKind,
    ) -> Result<KeyMaterial> {
        let provider: &dyn CryptoProvider = &self.provider;
        match format {
            KeyFormat::Raw => codec::raw::decode(source.bytes(), self.curve, kind, provider),
            KeyFormat::Hex => {
                codec::hex::decode(source.text(format)?, self.curve, kind, provider)
            }
            KeyFormat::Wif => codec::wif::decode(
                source.text(format)?,
                self.curve,
                kind,
                self.network,
                provider,
            ),
            KeyFormat::Bip39 => {
                codec::bip39::decode(source.text(format)?, self.curve, kind, provider)
            }
            KeyFormat::Jwk => {
                codec::jwk::decode(source.text(format)?, self.curve, kind, provider)
            }
            KeyFormat::Pkcs8 => match kind {
                KeyKind::Private => {
                    codec::pkcs8::decode_private(source.text(format)?, self.curve, provider)
                }
                KeyKind::Public => {
                    codec::pkcs8::decode_public(source.text(format)?, self.curve, provider)
                }
            },
        }
    }

    /// Serialize the held key into `format`
    pub fn export(&self, format: KeyFormat, kind: KeyKind) -> Result<EncodedKey> {
        let material = self.material.as_ref().ok_or(ConversionError::NoKeyLoaded)?;
        self.encode(material, format, kind)
            .map_err(|e| ConversionError::ExportFailed {
                format,
                source: Box::new(e),
            })
    }

    fn encode(
        &self,
        material: &KeyMaterial,
        format: KeyFormat,
        kind: KeyKind,
    ) -> Result<EncodedKey> {
        let provider: &dyn CryptoProvider = &self.provider;
        match format {
            KeyFormat::Raw => codec::raw::encode(material, kind).map(EncodedKey::Bytes),
            KeyFormat::Hex => codec::hex::encode(material, kind).map(EncodedKey::Text),
            KeyFormat::Wif => {
                codec::wif::encode(material, kind, self.network).map(EncodedKey::Text)
            }
            KeyFormat::Bip39 => codec::bip39::encode(material, kind).map(EncodedKey::Text),
            KeyFormat::Jwk => codec::jwk::encode(material, kind, provider).map(EncodedKey::Text),
            KeyFormat::Pkcs8 => match kind {
                KeyKind::Private => {
                    codec::pkcs8::encode_private(material, provider).map(EncodedKey::Text)
                }
                KeyKind::Public => {
                    codec::pkcs8::encode_public(material, provider).map(EncodedKey::Text)
                }
            },
        }
    }

    /// Lowercase hex of the private scalar
    pub fn private_key_hex(&self) -> Result<String> {
        let material = self.material.as_ref().ok_or(ConversionError::NoKeyLoaded)?;
        codec::hex::encode(material, KeyKind::Private)
    }

    /// Lowercase hex of the canonical public point
    pub fn public_key_hex(&self) -> Result<String> {
        let material = self.material.as_ref().ok_or(ConversionError::NoKeyLoaded)?;
        codec::hex::encode(material, KeyKind::Public)
    }

    /// Bitcoin P2PKH address for the configured network (secp256k1 only)
    pub fn bitcoin_address(&self) -> Result<String> {
        let material = self.material.as_ref().ok_or(ConversionError::NoKeyLoaded)?;
        derive::bitcoin::address(material, self.network)
    }

    /// EIP-55 checksummed Ethereum address (secp256k1 only)
    pub fn ethereum_address(&self) -> Result<String> {
        let material = self.material.as_ref().ok_or(ConversionError::NoKeyLoaded)?;
        derive::ethereum::address(material, &self.provider)
    }

    /// libp2p/IPFS peer ID (CIDv1, base32)
    pub fn ipfs_peer_id(&self) -> Result<String> {
        let material = self.material.as_ref().ok_or(ConversionError::NoKeyLoaded)?;
        derive::peer_id::peer_id(material, &self.provider)
    }

    /// Generate a fresh key pair from the injected random source and load it
    ///
    /// Same state transition as a successful import.
    pub fn generate(&mut self, rng: &mut dyn RngCore) -> Result<()> {
        let pair = self.provider.generate(self.curve, rng)?;
        let material =
            KeyMaterial::from_private_scalar(self.curve, pair.private_bytes.clone(), &self.provider)?;

        debug!(curve = %self.curve, "generated key pair");
        self.material = Some(material);
        Ok(())
    }

    /// Sign a message with the held private key
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let material = self.material.as_ref().ok_or(ConversionError::NoKeyLoaded)?;
        let scalar = material
            .private_scalar()
            .ok_or(ConversionError::PrivateKeyRequired)?;

        Ok(self.provider.sign(self.curve, scalar, message)?)
    }

    /// Verify a signature against the held public key
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        let material = self.material.as_ref().ok_or(ConversionError::NoKeyLoaded)?;
        Ok(self
            .provider
            .verify(self.curve, material.public_point(), message, signature)?)
    }
}
