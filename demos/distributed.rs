use flakeid::Snowflake;
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // One generator per simulated node; threads on the same node share it
    let nodes: Vec<_> = (0..2)
        .map(|node_id| Arc::new(Snowflake::new(node_id).unwrap()))
        .collect();
    let mut handles = vec![];

    for thread_id in 0..4 {
        let generator = Arc::clone(&nodes[thread_id % nodes.len()]);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            let mut rng = rand::rng();

            for i in 0..5 {
                let id = generator.generate().expect("clock moved backwards");
                let (ts, node, seq) = generator.decompose(id);

                println!(
                    "Thread {} generated ID {} (ts={}, node={}, seq={})",
                    thread_id, i, ts, node, seq
                );

                assert!(ids.insert(id), "Duplicate ID generated!");

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        let thread_ids = handle.join().unwrap();
        all_ids.extend(thread_ids);
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 20, "IDs collided across threads or nodes!");
    println!("All IDs are unique!");
}
