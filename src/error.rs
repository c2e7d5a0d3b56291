use thiserror::Error;

/// Represents errors that can occur while building or running a generator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// Node ID outside the representable range
    #[error("invalid-node-id: node id {node_id} must be between 0 and {max}")]
    InvalidConfiguration { node_id: i64, max: u16 },
    /// Wall clock reads earlier than the last emitted timestamp
    #[error(
        "invalid-system-clock: clock moved backwards from {last_timestamp} to {current_timestamp} ms past the custom epoch"
    )]
    ClockRegression {
        last_timestamp: u64,
        current_timestamp: i64,
    },
}
