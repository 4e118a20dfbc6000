// Automaton builder
//
// Collects patterns and configuration incrementally, then constructs the
// automaton in one go.

use crate::automaton::Automaton;
use crate::{AutomatonConfig, AutomatonResult, DuplicatePolicy};

/// Builder for constructing an Automaton
#[derive(Debug, Default, Clone)]
pub struct AutomatonBuilder {
    patterns: Vec<String>,
    config: AutomatonConfig,
}

impl AutomatonBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder with custom configuration
    pub fn with_config(config: AutomatonConfig) -> Self {
        Self {
            patterns: Vec::new(),
            config,
        }
    }

    /// Add a pattern; its index is the number of patterns added before it
    pub fn add_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Add multiple patterns
    pub fn add_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Set the configuration
    pub fn config(mut self, config: AutomatonConfig) -> Self {
        self.config = config;
        self
    }

    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = policy;
        self
    }

    /// Get the number of patterns added so far
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Build the automaton
    pub fn build(self) -> AutomatonResult<Automaton> {
        Automaton::with_config(self.patterns, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AutomatonError, PatternId};

    #[test]
    fn test_builder_creation() {
        let builder = AutomatonBuilder::new();
        assert_eq!(builder.pattern_count(), 0);
    }

    #[test]
    fn test_builder() {
        let automaton = Automaton::builder()
            .add_pattern("bash")
            .add_patterns(["ssh", "sh"])
            .build()
            .unwrap();

        assert_eq!(automaton.pattern_count(), 3);
        assert_eq!(automaton.pattern(PatternId::new(2)), Some("sh"));
    }

    #[test]
    fn test_builder_config() {
        let config = AutomatonConfig {
            max_pattern_length: 2,
            ..Default::default()
        };
        let result = AutomatonBuilder::with_config(config)
            .add_pattern("abc")
            .build();
        assert_eq!(
            result.err(),
            Some(AutomatonError::PatternTooLong {
                index: 0,
                length: 3,
                max: 2
            })
        );
    }

    #[test]
    fn test_builder_duplicate_policy() {
        let automaton = AutomatonBuilder::new()
            .add_patterns(["ab", "ab"])
            .duplicate_policy(DuplicatePolicy::KeepLast)
            .build()
            .unwrap();

        let report = automaton.scan("ab");
        assert!(report.get(PatternId::new(0)).unwrap().is_empty());
        assert_eq!(report.get(PatternId::new(1)).unwrap().len(), 1);
    }
}
