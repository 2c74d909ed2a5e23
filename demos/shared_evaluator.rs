use rand::rng;
use rand::{seq::SliceRandom, Rng};
use recurcache::{Evaluator, MemoizingEvaluator};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let max_index = 90;
    let repetitions = 4;
    let num_threads = 8;

    let mut indices: Vec<i64> = vec![];
    for _ in 0..repetitions {
        indices.extend(0..=max_index);
    }
    let mut random = rng();
    indices.shuffle(&mut random);

    let evaluator = Arc::new(MemoizingEvaluator::fibonacci());
    let start = Instant::now();
    let mut handles = Vec::new();

    let chunk_size = indices.len().div_ceil(num_threads);
    for chunk in indices.chunks(chunk_size) {
        let evaluator = Arc::clone(&evaluator);
        let chunk = chunk.to_vec();
        let handle = thread::spawn(move || {
            let mut local_rng = rng();
            for n in chunk {
                thread::sleep(Duration::from_millis(local_rng.random_range(0..=2)));
                match evaluator.evaluate(n) {
                    Ok(value) => println!("fibonacci({}) = {}", n, value),
                    Err(err) => println!("fibonacci({}) failed: {}", n, err),
                }
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("worker thread panicked");
        }
    }

    println!("Elapsed: {:?}", start.elapsed());
    // Every index 2..=max_index was computed exactly once.
    println!("Stats: {:?}", evaluator.stats());
}
