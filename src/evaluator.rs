use crate::error::Result;
use crate::stats::EvalStats;

/// Evaluator trait defines the methods that a sequence evaluator should implement and provides a shared interface for different evaluation strategies
///
/// The evaluator trait is useful for defining generic functions that can work with any evaluator implementation
/// Example:
/// ```
/// use recurcache::{Evaluator, Fibonacci, MemoizingEvaluator, NaiveEvaluator};
///
/// fn first_terms<E: Evaluator>(evaluator: &E, count: i64) -> Vec<u64> {
///     (0..count).map(|n| evaluator.evaluate(n).unwrap()).collect()
/// }
///
/// let memoized = MemoizingEvaluator::new(Fibonacci);
/// let naive = NaiveEvaluator::new(Fibonacci);
/// assert_eq!(first_terms(&memoized, 8), vec![0, 1, 1, 2, 3, 5, 8, 13]);
/// assert_eq!(first_terms(&memoized, 8), first_terms(&naive, 8));
/// ```
pub trait Evaluator: Send + Sync {
    /// Returns term `n`. Negative indices fail with [`crate::EvalError::InvalidArgument`].
    fn evaluate(&self, n: i64) -> Result<u64>;
    fn stats(&self) -> EvalStats;
}

pub mod memoized;
pub mod naive;
