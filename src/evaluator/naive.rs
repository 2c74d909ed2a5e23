use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::EvaluatorConfig;
use crate::error::{check_index, EvalError, Result};
use crate::evaluator::Evaluator;
use crate::recurrence::{Fibonacci, Recurrence};
use crate::stats::EvalStats;

/// NaiveEvaluator evaluates a recurrence by plain recursion without caching.
///
/// Overlapping subproblems are recomputed every time, so the number of calls grows exponentially for recurrences of order two or more. It exists as a baseline to compare against [`crate::MemoizingEvaluator`].
///
/// The recursion depth equals the requested index, so indices above `max_recursion_depth` are rejected with [`EvalError::DepthLimit`] instead of exhausting the stack.
pub struct NaiveEvaluator<R: Recurrence> {
    recurrence: R,
    config: EvaluatorConfig,
    calls: AtomicU64,
}

impl NaiveEvaluator<Fibonacci> {
    pub fn fibonacci() -> Self {
        Self::new(Fibonacci)
    }
}

impl<R: Recurrence> NaiveEvaluator<R> {
    pub fn new(recurrence: R) -> Self {
        NaiveEvaluator {
            recurrence,
            config: EvaluatorConfig::default(),
            calls: AtomicU64::new(0),
        }
    }

    pub fn with_config(recurrence: R, config: EvaluatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(NaiveEvaluator {
            recurrence,
            config,
            calls: AtomicU64::new(0),
        })
    }

    pub fn recurrence(&self) -> &R {
        &self.recurrence
    }

    fn compute(&self, n: u64) -> Result<u64> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        let base_cases = self.recurrence.base_cases();
        if let Some(&value) = usize::try_from(n).ok().and_then(|i| base_cases.get(i)) {
            return Ok(value);
        }

        let order = base_cases.len() as u64;
        let previous = (1..=order)
            .map(|offset| self.compute(n - offset))
            .collect::<Result<Vec<u64>>>()?;
        self.recurrence
            .step(n, &previous)
            .ok_or(EvalError::Overflow { index: n })
    }
}

impl<R: Recurrence> Evaluator for NaiveEvaluator<R> {
    fn evaluate(&self, n: i64) -> Result<u64> {
        let n = check_index(n)?;
        let limit = self.config.max_recursion_depth;
        if n > limit {
            return Err(EvalError::DepthLimit { requested: n, limit });
        }
        self.compute(n)
    }

    fn stats(&self) -> EvalStats {
        EvalStats {
            hits: 0,
            misses: self.calls.load(Ordering::Relaxed),
            size: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::Factorial;

    #[test]
    fn test_naive_fibonacci() {
        let evaluator = NaiveEvaluator::fibonacci();
        let terms: Vec<u64> = (0..13).map(|n| evaluator.evaluate(n).unwrap()).collect();
        assert_eq!(terms, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144]);
    }

    #[test]
    fn test_naive_call_count() {
        let evaluator = NaiveEvaluator::fibonacci();
        for n in 0..13 {
            evaluator.evaluate(n).unwrap();
        }
        assert_eq!(evaluator.stats().misses, 1205);
        assert_eq!(evaluator.stats().hits, 0);
    }

    #[test]
    fn test_naive_repeats_work() {
        let evaluator = NaiveEvaluator::fibonacci();
        evaluator.evaluate(10).unwrap();
        let first = evaluator.stats().misses;
        evaluator.evaluate(10).unwrap();
        assert_eq!(evaluator.stats().misses, first * 2);
    }

    #[test]
    fn test_naive_depth_limit() {
        let config = EvaluatorConfig {
            max_recursion_depth: 20,
            initial_capacity: 0,
        };
        let evaluator = NaiveEvaluator::with_config(Fibonacci, config).unwrap();
        assert_eq!(evaluator.evaluate(20).unwrap(), 6765);
        assert!(matches!(
            evaluator.evaluate(21),
            Err(EvalError::DepthLimit {
                requested: 21,
                limit: 20
            })
        ));
    }

    #[test]
    fn test_naive_excessive_depth_rejected() {
        let config = EvaluatorConfig {
            max_recursion_depth: 10_000_000,
            initial_capacity: 0,
        };
        assert!(matches!(
            NaiveEvaluator::with_config(Factorial, config),
            Err(EvalError::Config(_))
        ));
    }

    #[test]
    fn test_naive_negative_and_overflow() {
        let evaluator = NaiveEvaluator::new(Factorial);
        assert!(matches!(
            evaluator.evaluate(-1),
            Err(EvalError::InvalidArgument(-1))
        ));
        assert_eq!(evaluator.evaluate(6).unwrap(), 720);
        assert!(matches!(
            evaluator.evaluate(25),
            Err(EvalError::Overflow { index: 21 })
        ));
    }
}
