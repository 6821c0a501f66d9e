//! Format codecs
//!
//! One module per external serialization, each a pure `decode`/`encode` pair
//! over [`KeyMaterial`](crate::KeyMaterial). Structural failures surface as
//! `MalformedInput`; a self-describing format whose curve disagrees with the
//! converter's configured curve fails with `CurveMismatch`.

pub mod bip39;
pub mod hex;
pub mod jwk;
pub mod pkcs8;
pub mod raw;
pub mod wif;
