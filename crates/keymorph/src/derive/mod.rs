//! Network identifier derivation
//!
//! Pure functions of the public point: Bitcoin P2PKH addresses, Ethereum
//! EIP-55 addresses, and libp2p/IPFS peer IDs. None of these require the
//! private scalar.

pub mod bitcoin;
pub mod ethereum;
pub mod peer_id;
