//! Recursively defined integer sequences.

/// A sequence whose terms are defined from a fixed number of earlier terms.
///
/// Terms `0..k` are given directly by [`Recurrence::base_cases`], where `k` is
/// the number of base cases. Every later term `n` is produced by
/// [`Recurrence::step`] from the `k` terms before it. Implementations must be
/// pure: the same `n` and `previous` always yield the same result.
///
/// Example:
/// ```
/// use recurcache::{Evaluator, MemoizingEvaluator, Recurrence};
///
/// /// Pell numbers: P(n) = 2 P(n-1) + P(n-2)
/// struct Pell;
///
/// impl Recurrence for Pell {
///     fn name(&self) -> &'static str {
///         "pell"
///     }
///
///     fn base_cases(&self) -> &[u64] {
///         &[0, 1]
///     }
///
///     fn step(&self, _n: u64, previous: &[u64]) -> Option<u64> {
///         previous[0].checked_mul(2)?.checked_add(previous[1])
///     }
/// }
///
/// let evaluator = MemoizingEvaluator::new(Pell);
/// assert_eq!(evaluator.evaluate(6).unwrap(), 70);
/// ```
pub trait Recurrence: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Terms `0..k`, in index order. Must not be empty.
    ///
    /// The length also fixes how many earlier terms [`Recurrence::step`] receives.
    fn base_cases(&self) -> &[u64];

    /// Computes term `n` from `previous`, where `previous[i]` is term `n - 1 - i`.
    ///
    /// Returns `None` if the term does not fit in a u64.
    fn step(&self, n: u64, previous: &[u64]) -> Option<u64>;
}

/// F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2)
#[derive(Debug, Clone, Copy, Default)]
pub struct Fibonacci;

impl Recurrence for Fibonacci {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn base_cases(&self) -> &[u64] {
        &[0, 1]
    }

    fn step(&self, _n: u64, previous: &[u64]) -> Option<u64> {
        previous[0].checked_add(previous[1])
    }
}

/// T(0) = 0, T(1) = 0, T(2) = 1, T(n) = T(n-1) + T(n-2) + T(n-3)
#[derive(Debug, Clone, Copy, Default)]
pub struct Tribonacci;

impl Recurrence for Tribonacci {
    fn name(&self) -> &'static str {
        "tribonacci"
    }

    fn base_cases(&self) -> &[u64] {
        &[0, 0, 1]
    }

    fn step(&self, _n: u64, previous: &[u64]) -> Option<u64> {
        previous[0].checked_add(previous[1])?.checked_add(previous[2])
    }
}

/// 0! = 1, n! = n * (n-1)!
#[derive(Debug, Clone, Copy, Default)]
pub struct Factorial;

impl Recurrence for Factorial {
    fn name(&self) -> &'static str {
        "factorial"
    }

    fn base_cases(&self) -> &[u64] {
        &[1]
    }

    fn step(&self, n: u64, previous: &[u64]) -> Option<u64> {
        previous[0].checked_mul(n)
    }
}

/// Sum of the integers `1..=n`: S(0) = 0, S(n) = S(n-1) + n
#[derive(Debug, Clone, Copy, Default)]
pub struct TriangularSum;

impl Recurrence for TriangularSum {
    fn name(&self) -> &'static str {
        "triangular_sum"
    }

    fn base_cases(&self) -> &[u64] {
        &[0]
    }

    fn step(&self, n: u64, previous: &[u64]) -> Option<u64> {
        previous[0].checked_add(n)
    }
}
