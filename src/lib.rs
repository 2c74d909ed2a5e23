//! Memoizing evaluators for recursively defined integer sequences.
//!
//! A [`Recurrence`] describes a sequence by its base cases and a step rule.
//! An [`Evaluator`] computes its terms, either with a grow-only memo table
//! ([`MemoizingEvaluator`]) or by plain recursion ([`NaiveEvaluator`]).

pub mod config;
pub mod error;
pub mod evaluator;
pub mod recurrence;
pub mod stats;
pub mod table;

pub use crate::config::{EvaluatorConfig, MAX_RECURSION_DEPTH};
pub use crate::error::{EvalError, Result};
pub use crate::evaluator::memoized::MemoizingEvaluator;
pub use crate::evaluator::naive::NaiveEvaluator;
pub use crate::evaluator::Evaluator;
pub use crate::recurrence::{Factorial, Fibonacci, Recurrence, TriangularSum, Tribonacci};
pub use crate::stats::EvalStats;
pub use crate::table::MemoTable;
