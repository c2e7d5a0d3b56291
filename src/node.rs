//! Node identifier providers
//!
//! A provider yields a raw value; [`resolve_node_id`] reduces it into the
//! 10-bit node range and substitutes a random value whenever the provider
//! fails, whatever the cause.

use mac_address::{MacAddressError, MacAddressIterator};
use rand::Rng;
use thiserror::Error;
use tracing::warn;

use crate::config::{SnowflakeConfig, NODE_ID_BITS};

/// Errors a provider may report while deriving a node identifier
#[derive(Debug, Error)]
pub enum NodeIdError {
    /// Network interfaces could not be enumerated
    #[error("failed to enumerate network interfaces: {0}")]
    Interfaces(#[from] MacAddressError),
    /// No interface exposes a non-zero hardware address
    #[error("no hardware address found on any network interface")]
    NoHardwareAddress,
}

/// Supplies a raw, unreduced node identifier
pub trait NodeIdProvider {
    fn provide(&self) -> Result<u64, NodeIdError>;
}

impl<F> NodeIdProvider for F
where
    F: Fn() -> Result<u64, NodeIdError>,
{
    fn provide(&self) -> Result<u64, NodeIdError> {
        self()
    }
}

/// Where a resolved node identifier came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeIdSource {
    Provider,
    Random,
}

/// A node identifier reduced into `0..=1023`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedNodeId {
    node_id: u16,
    source: NodeIdSource,
}

impl ResolvedNodeId {
    #[inline]
    pub const fn node_id(&self) -> u16 {
        self.node_id
    }

    #[inline]
    pub const fn source(&self) -> NodeIdSource {
        self.source
    }
}

#[inline(always)]
fn reduce(raw: u64) -> u16 {
    (raw & SnowflakeConfig::calculate_mask(NODE_ID_BITS)) as u16
}

/// Run `provider` once, falling back to a random value on any error
pub fn resolve_node_id<P: NodeIdProvider + ?Sized>(provider: &P) -> ResolvedNodeId {
    match provider.provide() {
        Ok(raw) => ResolvedNodeId {
            node_id: reduce(raw),
            source: NodeIdSource::Provider,
        },
        Err(err) => {
            warn!(error = %err, "node id provider failed, falling back to a random node id");
            ResolvedNodeId {
                node_id: reduce(rand::rng().random::<u64>()),
                source: NodeIdSource::Random,
            }
        }
    }
}

/// Derives a stable value from the hardware addresses of all local interfaces
#[derive(Debug, Clone, Copy, Default)]
pub struct MacAddressProvider;

impl NodeIdProvider for MacAddressProvider {
    fn provide(&self) -> Result<u64, NodeIdError> {
        let addresses = MacAddressIterator::new()?
            .map(|mac| mac.bytes())
            .filter(|bytes| bytes.iter().any(|&b| b != 0));
        hash_addresses(addresses).ok_or(NodeIdError::NoHardwareAddress)
    }
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over the concatenated addresses; `None` when there are none
fn hash_addresses<I>(addresses: I) -> Option<u64>
where
    I: IntoIterator<Item = [u8; 6]>,
{
    let mut seen = false;
    let mut hash = FNV_OFFSET_BASIS;
    for byte in addresses.into_iter().flatten() {
        seen = true;
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    seen.then_some(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable() {
        let macs = [[0x02, 0x42, 0xac, 0x11, 0x00, 0x02], [0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]];
        assert_eq!(hash_addresses(macs), hash_addresses(macs));
        assert_ne!(hash_addresses(macs), hash_addresses([macs[0]]));
    }

    #[test]
    fn test_hash_known_value() {
        // FNV-1a of the single byte 'a'
        let mut hash = FNV_OFFSET_BASIS;
        hash ^= u64::from(b'a');
        hash = hash.wrapping_mul(FNV_PRIME);
        assert_eq!(hash, 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn test_hash_empty() {
        assert_eq!(hash_addresses(std::iter::empty()), None);
    }

    #[test]
    fn test_reduce_masks_to_ten_bits() {
        assert_eq!(reduce(0), 0);
        assert_eq!(reduce(1023), 1023);
        assert_eq!(reduce(1024), 0);
        assert_eq!(reduce(u64::MAX), 1023);
    }
}
