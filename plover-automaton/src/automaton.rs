// The linked automaton
//
// Owns the state arena and the pattern list. Construction runs the trie
// builder and the link builder back to back; afterwards nothing mutates the
// structure, so a single automaton can be shared freely between threads.

use crate::builder::AutomatonBuilder;
use crate::links::build_links;
use crate::pattern::PatternId;
use crate::render::render_tree;
use crate::state::{State, StateId};
use crate::trie::build_trie;
use crate::{AutomatonConfig, AutomatonResult};
use serde::Serialize;
use std::fmt;

/// An immutable Aho-Corasick automaton
#[derive(Clone)]
pub struct Automaton {
    /// State arena; index 0 is the root
    pub(crate) states: Vec<State>,

    /// Original pattern list, in input order
    patterns: Vec<String>,

    /// Length in symbols of every pattern
    pub(crate) pattern_lengths: Vec<usize>,

    /// Configuration used during construction
    config: AutomatonConfig,
}

/// Structural summary of an automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AutomatonStats {
    pub pattern_count: usize,
    pub state_count: usize,
    pub edge_count: usize,
    pub terminal_count: usize,
    pub dictionary_link_count: usize,
    pub max_depth: usize,
}

impl Automaton {
    /// Build an automaton with the default configuration
    pub fn new<I, S>(patterns: I) -> AutomatonResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(patterns, AutomatonConfig::default())
    }

    /// Build an automaton with a custom configuration
    pub fn with_config<I, S>(patterns: I, config: AutomatonConfig) -> AutomatonResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();

        let mut trie = build_trie(&patterns, &config)?;
        build_links(&mut trie.states);

        Ok(Self {
            states: trie.states,
            patterns,
            pattern_lengths: trie.pattern_lengths,
            config,
        })
    }

    /// Create a builder for constructing an Automaton
    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder::default()
    }

    /// The root state
    pub fn root(&self) -> &State {
        &self.states[StateId::ROOT.as_usize()]
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id.as_usize())
    }

    /// All states in creation order, the root first
    pub fn states(&self) -> impl ExactSizeIterator<Item = (StateId, &State)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(index, state)| (StateId::new(index), state))
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn pattern(&self, id: PatternId) -> Option<&str> {
        self.patterns.get(id.as_usize()).map(String::as_str)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Length of a pattern in symbols
    pub fn pattern_len(&self, id: PatternId) -> Option<usize> {
        self.pattern_lengths.get(id.as_usize()).copied()
    }

    pub fn config(&self) -> &AutomatonConfig {
        &self.config
    }

    pub fn stats(&self) -> AutomatonStats {
        let mut stats = AutomatonStats {
            pattern_count: self.patterns.len(),
            state_count: self.states.len(),
            edge_count: 0,
            terminal_count: 0,
            dictionary_link_count: 0,
            max_depth: 0,
        };

        for state in &self.states {
            stats.edge_count += state.edge_count();
            stats.terminal_count += usize::from(state.is_terminal());
            stats.dictionary_link_count += usize::from(state.dictionary().is_some());
            stats.max_depth = stats.max_depth.max(state.depth());
        }

        stats
    }
}

impl fmt::Debug for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("pattern_count", &self.patterns.len())
            .field("state_count", &self.states.len())
            .field("config", &self.config)
            .finish()
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in render_tree(self) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AutomatonError, DuplicatePolicy};

    #[test]
    fn test_automaton_creation() {
        let automaton = Automaton::new(["at", "art", "oars", "soar"]).unwrap();
        assert_eq!(automaton.pattern_count(), 4);
        assert_eq!(automaton.state_count(), 13);
        assert_eq!(automaton.pattern(PatternId::new(2)), Some("oars"));
        assert_eq!(automaton.pattern(PatternId::new(4)), None);
        assert_eq!(automaton.pattern_len(PatternId::new(1)), Some(3));
        assert_eq!(automaton.config(), &AutomatonConfig::default());
    }

    #[test]
    fn test_empty_pattern_list() {
        let automaton = Automaton::new(Vec::<String>::new()).unwrap();
        assert_eq!(automaton.state_count(), 1);
        assert!(!automaton.root().is_terminal());
        assert_eq!(automaton.root().edge_count(), 0);
    }

    #[test]
    fn test_empty_pattern_error() {
        let result = Automaton::new(["ok", ""]);
        assert_eq!(result.err(), Some(AutomatonError::EmptyPattern { index: 1 }));
    }

    #[test]
    fn test_reject_duplicates() {
        let config = AutomatonConfig {
            duplicate_policy: DuplicatePolicy::Reject,
            ..Default::default()
        };
        let result = Automaton::with_config(["x", "y", "x"], config);
        assert!(matches!(
            result,
            Err(AutomatonError::DuplicatePattern { index: 2, first: 0 })
        ));
    }

    #[test]
    fn test_stats() {
        let automaton = Automaton::new(["art", "rt"]).unwrap();
        let stats = automaton.stats();
        assert_eq!(stats.pattern_count, 2);
        assert_eq!(stats.state_count, 6);
        assert_eq!(stats.edge_count, 5);
        assert_eq!(stats.terminal_count, 2);
        assert_eq!(stats.dictionary_link_count, 1);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_states_iteration() {
        let automaton = Automaton::new(["ab"]).unwrap();
        let ids: Vec<StateId> = automaton.states().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids[0].is_root());
        assert_eq!(automaton.state(ids[2]).map(State::depth), Some(2));
        assert!(automaton.state(StateId::new(9)).is_none());
    }

    #[test]
    fn test_debug_is_summary() {
        let automaton = Automaton::new(["ab"]).unwrap();
        let debug = format!("{automaton:?}");
        assert!(debug.contains("state_count: 3"));
    }

    #[test]
    fn test_automaton_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Automaton>();
    }
}
