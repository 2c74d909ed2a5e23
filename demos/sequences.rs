use recurcache::{
    Evaluator, Factorial, Fibonacci, MemoizingEvaluator, Recurrence, TriangularSum, Tribonacci,
};
use tracing_subscriber::EnvFilter;

fn print_terms<R: Recurrence>(recurrence: R, count: i64) -> recurcache::Result<()> {
    let evaluator = MemoizingEvaluator::new(recurrence);
    let terms = (0..count)
        .map(|n| evaluator.evaluate(n))
        .collect::<recurcache::Result<Vec<u64>>>()?;
    println!("{}: {:?}", evaluator.recurrence().name(), terms);
    println!("{:?}", evaluator.stats());
    Ok(())
}

fn main() -> recurcache::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    print_terms(Fibonacci, 20)?;
    print_terms(Tribonacci, 20)?;
    print_terms(Factorial, 10)?;
    print_terms(TriangularSum, 10)?;

    let fibonacci = MemoizingEvaluator::fibonacci();
    match fibonacci.evaluate(100) {
        Ok(value) => println!("fibonacci(100) = {}", value),
        Err(err) => println!("fibonacci(100) failed: {}", err),
    }
    Ok(())
}
