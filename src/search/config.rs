//! Sweep configuration

/// Configuration for an ensemble search sweep
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Ensemble size k: each candidate combines exactly k models
    pub arity: usize,
    /// Stop after the first N combinations (None = exhaustive)
    pub limit: Option<usize>,
    /// Evaluate combinations across a thread pool
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            arity: 3,
            limit: None,
            parallel: false,
        }
    }
}
