use std::sync::{Mutex, MutexGuard};

use crate::config::EvaluatorConfig;
use crate::error::{check_index, EvalError, Result};
use crate::evaluator::Evaluator;
use crate::recurrence::{Fibonacci, Recurrence};
use crate::stats::EvalStats;
use crate::table::MemoTable;

/// MemoizingEvaluator computes each term of a recurrence at most once over its lifetime.
///
/// The memo table starts with the recurrence's base cases and only grows. A lookup checks the table before recursing, and a newly computed term is stored after its recursive computation returns, so overlapping subproblems are solved once and evaluation is linear in `n`.
///
/// All mutability is handled internally with a Mutex held for the whole evaluation, so the evaluator can be shared between threads and concurrent callers never compute the same term twice.
///
/// Example:
/// ```
/// use recurcache::{Evaluator, MemoizingEvaluator};
///
/// let evaluator = MemoizingEvaluator::fibonacci();
/// assert_eq!(evaluator.evaluate(10).unwrap(), 55);
///
/// let computed = evaluator.stats().misses;
/// assert_eq!(evaluator.evaluate(5).unwrap(), 5);
/// assert_eq!(evaluator.stats().misses, computed);
/// ```
pub struct MemoizingEvaluator<R: Recurrence> {
    recurrence: R,
    config: EvaluatorConfig,
    table: Mutex<MemoTable<u64, u64>>,
}

impl MemoizingEvaluator<Fibonacci> {
    pub fn fibonacci() -> Self {
        Self::new(Fibonacci)
    }
}

impl<R: Recurrence> MemoizingEvaluator<R> {
    /// Create an evaluator with the default configuration.
    pub fn new(recurrence: R) -> Self {
        Self::build(recurrence, EvaluatorConfig::default())
    }

    /// Create an evaluator with the given configuration, which is validated first.
    pub fn with_config(recurrence: R, config: EvaluatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(recurrence, config))
    }

    fn build(recurrence: R, config: EvaluatorConfig) -> Self {
        let base_cases = recurrence.base_cases();
        let mut table = MemoTable::new(config.initial_capacity.max(base_cases.len()));
        for (n, value) in base_cases.iter().enumerate() {
            table.insert_if_absent(n as u64, *value);
        }
        MemoizingEvaluator {
            recurrence,
            config,
            table: Mutex::new(table),
        }
    }

    pub fn recurrence(&self) -> &R {
        &self.recurrence
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Number of cached terms, base cases included.
    pub fn cached_len(&self) -> usize {
        self.lock().len()
    }

    /// Cached indices in the order they were computed.
    pub fn cached_indices(&self) -> Vec<u64> {
        self.lock().keys().copied().collect()
    }

    /// Cached value of term `n`, if any. Does not count as a lookup.
    pub fn peek(&self, n: u64) -> Option<u64> {
        self.lock().peek(&n).copied()
    }

    fn lock(&self) -> MutexGuard<'_, MemoTable<u64, u64>> {
        // Entries are only inserted once fully computed, so a poisoned table is still consistent.
        self.table.lock().unwrap_or_else(|poisoned| {
            tracing::warn!(
                recurrence = self.recurrence.name(),
                "recovering memo table from poisoned lock"
            );
            poisoned.into_inner()
        })
    }

    fn compute(&self, table: &mut MemoTable<u64, u64>, n: u64) -> Result<u64> {
        if let Some(&value) = table.get(&n) {
            return Ok(value);
        }

        // Base cases are always cached, so here n >= base_cases().len().
        let order = self.recurrence.base_cases().len() as u64;
        let mut previous = Vec::with_capacity(order as usize);
        for offset in 1..=order {
            previous.push(self.compute(table, n - offset)?);
        }

        let value = match self.recurrence.step(n, &previous) {
            Some(value) => value,
            None => {
                tracing::debug!(recurrence = self.recurrence.name(), index = n, "term overflows u64");
                return Err(EvalError::Overflow { index: n });
            }
        };
        tracing::trace!(recurrence = self.recurrence.name(), index = n, value, "computed term");
        table.insert_if_absent(n, value);
        Ok(value)
    }
}

impl<R: Recurrence> Evaluator for MemoizingEvaluator<R> {
    fn evaluate(&self, n: i64) -> Result<u64> {
        let n = check_index(n)?;
        let mut table = self.lock();

        // Terms are computed bottom-up, so the cached keys are exactly 0..len.
        let frontier = table.len() as u64;
        let limit = self.config.max_recursion_depth;
        if n >= frontier && n - frontier >= limit {
            tracing::debug!(
                recurrence = self.recurrence.name(),
                from = frontier,
                to = n,
                stage = limit,
                "warming memo table in stages"
            );
            let mut stage = frontier + limit - 1;
            while stage < n {
                self.compute(&mut table, stage)?;
                stage += limit;
            }
        }

        self.compute(&mut table, n)
    }

    fn stats(&self) -> EvalStats {
        self.lock().stats()
    }
}
