//! libp2p public-key envelope
//!
//! libp2p wraps public keys in a two-field protobuf message before hashing
//! them into peer IDs:
//!
//! ```text
//! message PublicKey {
//!     required KeyType Type = 1;   // varint
//!     required bytes   Data = 2;   // length-delimited
//! }
//! ```
//!
//! See: <https://github.com/libp2p/specs/blob/master/peer-ids/peer-ids.md>

use crate::{EncodingError, varint};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Protobuf wire tag for field 1, varint (`Type`)
const TAG_KEY_TYPE: u64 = 0x08;
/// Protobuf wire tag for field 2, length-delimited (`Data`)
const TAG_DATA: u64 = 0x12;

/// A libp2p key-descriptor: `{key_type, data}`
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyEnvelope {
    pub key_type: u64,
    pub data: Vec<u8>,
}

impl KeyEnvelope {
    pub fn new(key_type: u64, data: Vec<u8>) -> Self {
        Self { key_type, data }
    }

    /// Serialize to protobuf wire format (fields in ascending order)
    pub fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(4 + self.data.len());
        varint::write_u64(TAG_KEY_TYPE, &mut buffer);
        varint::write_u64(self.key_type, &mut buffer);
        varint::write_u64(TAG_DATA, &mut buffer);
        varint::write_u64(self.data.len() as u64, &mut buffer);
        buffer.extend_from_slice(&self.data);
        buffer
    }

    /// Parse from protobuf wire format
    ///
    /// Both fields are required; unknown fields are rejected.
    pub fn decode(bytes: &[u8]) -> Result<Self, EncodingError> {
        let mut key_type = None;
        let mut data = None;
        let mut rest = bytes;

        while !rest.is_empty() {
            let (tag, after_tag) = varint::read_u64(rest)?;
            match tag {
                TAG_KEY_TYPE => {
                    let (value, after_value) = varint::read_u64(after_tag)?;
                    key_type = Some(value);
                    rest = after_value;
                }
                TAG_DATA => {
                    let (length, after_length) = varint::read_u64(after_tag)?;
                    let length = length as usize;
                    if after_length.len() < length {
                        return Err(EncodingError::TruncatedInput {
                            expected: length,
                            found: after_length.len(),
                        });
                    }
                    data = Some(after_length[..length].to_vec());
                    rest = &after_length[length..];
                }
                other => {
                    return Err(EncodingError::InvalidEnvelope(format!(
                        "unexpected field tag 0x{other:x}"
                    )));
                }
            }
        }

        match (key_type, data) {
            (Some(key_type), Some(data)) => Ok(Self { key_type, data }),
            (None, _) => Err(EncodingError::InvalidEnvelope(
                "missing key_type field".into(),
            )),
            (_, None) => Err(EncodingError::InvalidEnvelope("missing data field".into())),
        }
    }
}
