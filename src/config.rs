use std::collections::HashSet;

use crate::error::{Error, Result};

/// Tunables for one summarization run. Constructed fresh by the caller;
/// the core never persists or mutates a config across calls.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub ignore_lemmas: HashSet<String>,
    pub min_lcm_support: f64,
    pub ngram_dim_range: (usize, usize),
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            ignore_lemmas: HashSet::new(),
            min_lcm_support: 0.01,
            ngram_dim_range: (2, 4),
        }
    }
}

impl SummarizerConfig {
    /// Checked before any allocation in [`crate::Summarizer::get_summary`],
    /// mirroring the workspace convention of validating inputs before
    /// dispatching to model code.
    pub fn validate(&self) -> Result<()> {
        let (min, max) = self.ngram_dim_range;
        if min < 1 {
            return Err(Error::InvalidInput(format!(
                "ngram_dim_range minimum must be >= 1, got {min}"
            )));
        }
        if min > max {
            return Err(Error::InvalidInput(format!(
                "ngram_dim_range is inverted: min {min} > max {max}"
            )));
        }
        if !(self.min_lcm_support > 0.0 && self.min_lcm_support <= 1.0) {
            return Err(Error::InvalidInput(format!(
                "min_lcm_support must be in (0, 1], got {}",
                self.min_lcm_support
            )));
        }
        Ok(())
    }
}
