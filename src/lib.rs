//! # flakeid
//!
//! Snowflake IDs: 64-bit unique identifiers minted locally, without
//! coordination, that sort roughly by creation time.
//!
//! Layout, most significant bit first:
//! - 1 bit unused
//! - 41 bits of milliseconds since a custom epoch
//! - 10 bits of node ID
//! - 12 bits of per-millisecond sequence
//!
//! ```no_run
//! use flakeid::Snowflake;
//!
//! let generator = Snowflake::new(7)?;
//! let id = generator.generate()?;
//! let (timestamp, node_id, sequence) = generator.decompose(id);
//! assert_eq!(node_id, 7);
//! # let _ = (timestamp, sequence);
//! # Ok::<(), flakeid::SnowflakeError>(())
//! ```

#![forbid(unsafe_code)]

pub mod clock;
mod config;
mod error;
mod extractor;
mod generator;
pub mod node;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{
    SnowflakeConfig, SnowflakeConfigBuilder, DEFAULT_CUSTOM_EPOCH, NODE_ID_BITS, SEQUENCE_BITS,
    TIMESTAMP_BITS,
};
pub use error::SnowflakeError;
pub use extractor::SnowflakeExtractor;
pub use generator::Snowflake;
pub use node::{MacAddressProvider, NodeIdError, NodeIdProvider, NodeIdSource};
