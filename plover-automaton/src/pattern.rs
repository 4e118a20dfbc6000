// Pattern identifiers and validation
//
// Patterns are identified by their position in the list the automaton was
// built from. Validation happens once, at the construction boundary.

use crate::{AutomatonConfig, AutomatonError, AutomatonResult};
use serde::Serialize;
use std::fmt;

/// Position of a pattern in the original pattern list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PatternId(usize);

impl PatternId {
    /// Create an identifier for the pattern at `index`
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Index into the original pattern list
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for PatternId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check the whole pattern list against the configured limits.
pub(crate) fn validate_count(count: usize, config: &AutomatonConfig) -> AutomatonResult<()> {
    if config.max_patterns > 0 && count > config.max_patterns {
        return Err(AutomatonError::TooManyPatterns {
            count,
            max: config.max_patterns,
        });
    }
    Ok(())
}

/// Validate a single pattern and return its length in symbols
pub(crate) fn validate(
    index: usize,
    pattern: &str,
    config: &AutomatonConfig,
) -> AutomatonResult<usize> {
    if pattern.is_empty() {
        return Err(AutomatonError::EmptyPattern { index });
    }

    let length = pattern.chars().count();
    if config.max_pattern_length > 0 && length > config.max_pattern_length {
        return Err(AutomatonError::PatternTooLong {
            index,
            length,
            max: config.max_pattern_length,
        });
    }

    Ok(length)
}
