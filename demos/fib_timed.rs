use recurcache::{Evaluator, MemoizingEvaluator, NaiveEvaluator};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> recurcache::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let n = 35;

    // Measure naive Fibonacci time
    let naive = NaiveEvaluator::fibonacci();
    let start = Instant::now();
    let result_naive = naive.evaluate(n)?;
    let duration_naive = start.elapsed();
    println!(
        "Naive Fibonacci({}) = {} (Time: {:?}, calls: {})",
        n,
        result_naive,
        duration_naive,
        naive.stats().misses
    );

    // Measure memoized Fibonacci time
    let memoized = MemoizingEvaluator::fibonacci();
    let start = Instant::now();
    let result_cached = memoized.evaluate(n)?;
    let duration_cached = start.elapsed();
    println!(
        "Memoized Fibonacci({}) = {} (Time: {:?})",
        n, result_cached, duration_cached
    );

    assert_eq!(result_naive, result_cached);
    println!("Results are equal!");

    let speedup = (duration_naive.as_secs_f64() / duration_cached.as_secs_f64()).round();
    println!("Speedup: {:.2}x", speedup);

    println!("Memo Stats: {:?}", memoized.stats());
    Ok(())
}
