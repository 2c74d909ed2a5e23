//! Evaluator configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EvalError, Result};

/// Largest accepted `max_recursion_depth`.
///
/// Keeps a single descent within a 2 MiB thread stack, the default for
/// spawned threads, in unoptimized builds.
pub const MAX_RECURSION_DEPTH: u64 = 2048;

/// Settings shared by every evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Deepest chain of nested uncached calls a single descent may make.
    /// Must lie in `1..=MAX_RECURSION_DEPTH`.
    #[serde(default = "default_max_recursion_depth")]
    pub max_recursion_depth: u64,

    /// Number of memo entries to reserve up front.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: default_max_recursion_depth(),
            initial_capacity: default_initial_capacity(),
        }
    }
}

fn default_max_recursion_depth() -> u64 {
    1024
}

fn default_initial_capacity() -> usize {
    128
}

impl EvaluatorConfig {
    /// Parses a configuration from TOML text. Missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EvaluatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_recursion_depth == 0 {
            return Err(EvalError::config("max_recursion_depth must be at least 1"));
        }
        if self.max_recursion_depth > MAX_RECURSION_DEPTH {
            return Err(EvalError::config(format!(
                "max_recursion_depth {} exceeds the maximum of {}",
                self.max_recursion_depth, MAX_RECURSION_DEPTH
            )));
        }
        Ok(())
    }
}
