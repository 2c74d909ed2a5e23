//! Integration tests for sharing evaluators across threads and comparing strategies.

use std::sync::Arc;
use std::thread;

use recurcache::{
    EvalError, EvalStats, Evaluator, EvaluatorConfig, Factorial, Fibonacci, MemoizingEvaluator,
    NaiveEvaluator, TriangularSum, Tribonacci,
};

fn first_terms<E: Evaluator>(evaluator: &E, count: i64) -> Vec<u64> {
    (0..count).map(|n| evaluator.evaluate(n).unwrap()).collect()
}

mod concurrency_tests {
    use super::*;

    #[test]
    fn test_each_term_computed_once_across_threads() {
        let evaluator = Arc::new(MemoizingEvaluator::fibonacci());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let evaluator = Arc::clone(&evaluator);
                thread::spawn(move || {
                    let mut results = Vec::new();
                    for step in 0..=90 {
                        let n = (step * 7 + worker * 13) % 91;
                        results.push((n, evaluator.evaluate(n).unwrap()));
                    }
                    results
                })
            })
            .collect();

        let reference = MemoizingEvaluator::fibonacci();
        for handle in handles {
            for (n, value) in handle.join().unwrap() {
                assert_eq!(value, reference.evaluate(n).unwrap());
            }
        }

        let stats = evaluator.stats();
        assert_eq!(stats.misses, 89);
        assert_eq!(stats.size, 91);
        assert_eq!(evaluator.cached_indices(), (0..=90).collect::<Vec<u64>>());
    }

    #[test]
    fn test_shared_through_trait_object() {
        let evaluator: Arc<dyn Evaluator> = Arc::new(MemoizingEvaluator::new(Tribonacci));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let evaluator = Arc::clone(&evaluator);
                thread::spawn(move || evaluator.evaluate(30).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 15_902_591);
        }
        assert_eq!(evaluator.stats().misses, 28);
    }
}

mod strategy_tests {
    use super::*;

    #[test]
    fn test_naive_and_memoized_agree() {
        assert_eq!(
            first_terms(&NaiveEvaluator::fibonacci(), 25),
            first_terms(&MemoizingEvaluator::fibonacci(), 25)
        );
        assert_eq!(
            first_terms(&NaiveEvaluator::new(Tribonacci), 20),
            first_terms(&MemoizingEvaluator::new(Tribonacci), 20)
        );
        assert_eq!(
            first_terms(&NaiveEvaluator::new(Factorial), 21),
            first_terms(&MemoizingEvaluator::new(Factorial), 21)
        );
        assert_eq!(
            first_terms(&NaiveEvaluator::new(TriangularSum), 50),
            first_terms(&MemoizingEvaluator::new(TriangularSum), 50)
        );
    }

    #[test]
    fn test_memoized_does_far_less_work() {
        let naive = NaiveEvaluator::fibonacci();
        let memoized = MemoizingEvaluator::fibonacci();
        assert_eq!(naive.evaluate(25).unwrap(), memoized.evaluate(25).unwrap());
        assert!(naive.stats().misses > 100 * memoized.stats().misses);
    }

    #[test]
    fn test_independent_instances() {
        let a = MemoizingEvaluator::fibonacci();
        let b = MemoizingEvaluator::fibonacci();
        a.evaluate(20).unwrap();
        assert_eq!(b.stats(), EvalStats { hits: 0, misses: 0, size: 2 });
        assert_eq!(b.cached_len(), 2);
    }

    #[test]
    fn test_config_from_toml() {
        let config = EvaluatorConfig::from_toml_str("max_recursion_depth = 8\n").unwrap();
        let memoized = MemoizingEvaluator::with_config(Fibonacci, config.clone()).unwrap();
        let naive = NaiveEvaluator::with_config(Fibonacci, config).unwrap();

        assert_eq!(memoized.evaluate(80).unwrap(), 23_416_728_348_467_685);
        assert!(matches!(
            naive.evaluate(9),
            Err(EvalError::DepthLimit { requested: 9, limit: 8 })
        ));
    }
}
