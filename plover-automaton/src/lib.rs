// Plover Automaton - Aho-Corasick Multi-Pattern Matcher
//
// This crate builds an Aho-Corasick automaton over a list of patterns and
// scans texts in a single left-to-right pass, reporting the start offset of
// every occurrence of every pattern, overlapping and nested ones included.
//
// ## Overview
//
// Three structures share one arena of states:
//
// - trie edges, one labeled edge per pattern symbol
// - failure links, pointing at the longest proper suffix present in the trie
// - dictionary links, pointing at the nearest terminal state on the failure chain
//
// ## Architecture
//
// ```text
// ┌─────────────────────────────────────────────────┐
// │           Trie Builder                          │
// │  (one state per distinct pattern prefix)        │
// └──────────────┬──────────────────────────────────┘
//                │
//                v
// ┌─────────────────────────────────────────────────┐
// │           Link Builder                          │
// │  (breadth-first failure + dictionary links)     │
// └──────────────┬──────────────────────────────────┘
//                │
//                v
// ┌─────────────────────────────────────────────────┐
// │           Matcher                               │
// │  - scan: O(n + z) single pass                  │
// │  - scan_naive: O(n * l) restart oracle         │
// │  - scan_batch: parallel independent scans      │
// └─────────────────────────────────────────────────┘
// ```
//
// Offsets are counted in `char`s: every `char` is one opaque alphabet symbol.

mod automaton;
mod builder;
mod links;
mod matcher;
mod pattern;
mod render;
mod report;
mod state;
mod trie;

#[cfg(test)]
mod perf;

pub use automaton::{Automaton, AutomatonStats};
pub use builder::AutomatonBuilder;
pub use pattern::PatternId;
pub use render::render_tree;
pub use report::{MatchReport, Occurrence};
pub use state::{State, StateId};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while constructing an automaton
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    #[error("Empty pattern at index {index}")]
    EmptyPattern { index: usize },

    #[error("Duplicate pattern at index {index} (first seen at index {first})")]
    DuplicatePattern { index: usize, first: usize },

    #[error("Pattern too long: pattern {index} has {length} symbols (max: {max})")]
    PatternTooLong {
        index: usize,
        length: usize,
        max: usize,
    },

    #[error("Too many patterns: {count} (max: {max})")]
    TooManyPatterns { count: usize, max: usize },
}

/// Result type for automaton operations
pub type AutomatonResult<T> = Result<T, AutomatonError>;

/// What to do when the same pattern appears more than once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The first occurrence owns the terminal state; later copies never match
    #[default]
    KeepFirst,

    /// The last occurrence owns the terminal state; earlier copies never match
    KeepLast,

    /// Construction fails with [`AutomatonError::DuplicatePattern`]
    Reject,
}

/// Configuration for automaton construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomatonConfig {
    /// Maximum number of patterns (0 = unlimited)
    pub max_patterns: usize,

    /// Maximum pattern length in symbols (0 = unlimited)
    pub max_pattern_length: usize,

    /// Handling of repeated patterns
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            max_patterns: 0,
            max_pattern_length: 0,
            duplicate_policy: DuplicatePolicy::KeepFirst,
        }
    }
}
