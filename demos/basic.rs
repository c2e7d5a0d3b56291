use flakeid::{Snowflake, SnowflakeError};

fn main() -> Result<(), SnowflakeError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Create a generator with node ID 1
    let generator = Snowflake::new(1)?;
    println!("{generator}");

    let id1 = generator.generate()?;
    let id2 = generator.generate()?;
    let id3 = generator.generate()?;

    println!("Generated IDs (ordered by creation time):");
    print_id(id1, &generator);
    print_id(id2, &generator);
    print_id(id3, &generator);

    // Or extract components individually
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Offset: {} ms since custom epoch", generator.extract.offset(id2));
    println!("  Timestamp: {} ms since Unix epoch", generator.extract.timestamp(id2));
    println!("  Node ID: {}", generator.extract.node(id2));
    println!("  Sequence: {}", generator.extract.sequence(id2));

    Ok(())
}

fn print_id(id: u64, generator: &Snowflake) {
    let (timestamp, node, sequence) = generator.decompose(id);
    let datetime = generator
        .extract
        .datetime(id)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default();

    println!("  ID: {id}, Timestamp: {timestamp}, Human date: {datetime}, Node ID: {node}, Sequence: {sequence}");
}
