use chrono::{TimeZone, Utc};
use flakeid::{Snowflake, SnowflakeConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Count time from the start of 2025 instead of the default epoch
    let epoch = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let config = SnowflakeConfig::builder().epoch_at(epoch).build();

    let generator = Snowflake::with_config(42, config).unwrap();

    println!("Generator configuration:");
    println!("  Custom epoch: {} ({epoch})", config.epoch());
    println!("  Max node ID: {}", config.max_node_id());
    println!("  Max sequence per ms: {}", config.max_sequence_id());

    let id = generator.generate().unwrap();
    let (ts, node, seq) = generator.decompose(id);

    println!("\nGenerated ID: {}", id);
    println!("Components:");
    println!("  Timestamp: {} ms since Unix epoch", ts);
    println!("  Node ID: {} (of {})", node, config.max_node_id());
    println!("  Sequence: {} (of {})", seq, config.max_sequence_id());

    // A node ID derived from this host's network interfaces
    let auto = Snowflake::auto();
    println!("\nAuto-derived node ID: {}", auto.node_id());

    // Out-of-range node IDs are rejected
    match Snowflake::with_config(1024, config) {
        Ok(_) => unreachable!("1024 is outside the node range"),
        Err(err) => println!("Rejected: {err}"),
    }
}
