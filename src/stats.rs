//! Evaluation statistics

/// Snapshot of an evaluator's lookup counters.
///
/// For a memoizing evaluator `misses` is the number of terms that had to be
/// computed, and `size` is the number of cached terms. A naive evaluator
/// reports every call as a miss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalStats {
    pub hits: u64,
    pub misses: u64,
    pub size: u64,
}

impl EvalStats {
    /// Fraction of lookups served from the cache (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
