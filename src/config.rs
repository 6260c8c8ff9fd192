//! Search session configuration

use std::time::{Duration, Instant};

use crate::board::MAX_SIZE;
use crate::error::PuzzleError;

/// Grid side used when nothing else is configured.
pub const DEFAULT_SIZE: usize = 3;

/// Which [`VisitedIndex`](crate::visited::VisitedIndex) backend a session uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisitedBackend {
    /// Hash set over the canonical key
    #[default]
    Hash,
    /// Fixed-depth trie with one level per cell
    Trie,
}

/// Optional cutoff, checked once for every popped node that is not the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Budget {
    pub max_expansions: Option<usize>,
    pub time_limit: Option<Duration>,
}

impl Budget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn is_spent(&self, expanded: usize, started: Instant) -> bool {
        if self.max_expansions.is_some_and(|max| expanded >= max) {
            return true;
        }
        self.time_limit
            .is_some_and(|limit| started.elapsed() >= limit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub size: usize,
    pub budget: Budget,
    pub visited: VisitedBackend,
    /// Report unsolvable starts as exhausted without searching.
    pub parity_precheck: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            budget: Budget::unlimited(),
            visited: VisitedBackend::default(),
            parity_precheck: false,
        }
    }
}

impl SearchConfig {
    pub fn with_size(size: usize) -> Result<Self, PuzzleError> {
        let config = Self {
            size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PuzzleError> {
        if (2..=MAX_SIZE).contains(&self.size) {
            Ok(())
        } else {
            Err(PuzzleError::UnsupportedSize(self.size))
        }
    }
}
