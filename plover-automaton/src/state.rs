// Automaton states
//
// All states live in one flat arena owned by the automaton. Trie edges,
// failure links and dictionary links are stored as `StateId`s into that
// arena, so the structure has no reference cycles and no lifetimes.

use crate::pattern::PatternId;
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// Index of a state in the automaton's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StateId(usize);

impl StateId {
    /// The root state, representing the empty prefix
    pub const ROOT: StateId = StateId(0);

    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn as_usize(self) -> usize {
        self.0
    }

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// A single trie node plus its links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Outgoing edges, sorted by label
    edges: SmallVec<[(char, StateId); 4]>,

    /// Pattern spelled by the path to this state, if any
    output: Option<PatternId>,

    /// Number of edges between the root and this state
    depth: usize,

    /// Longest proper suffix present in the trie (None only for the root)
    pub(crate) failure: Option<StateId>,

    /// Nearest terminal state on the failure chain, excluding this one
    pub(crate) dictionary: Option<StateId>,
}

impl State {
    pub(crate) fn new(depth: usize) -> Self {
        Self {
            edges: SmallVec::new(),
            output: None,
            depth,
            failure: None,
            dictionary: None,
        }
    }

    /// Follow the edge labeled `symbol`
    pub fn transition(&self, symbol: char) -> Option<StateId> {
        self.edges
            .binary_search_by_key(&symbol, |&(label, _)| label)
            .ok()
            .map(|pos| self.edges[pos].1)
    }

    /// Outgoing edges in ascending label order
    pub fn edges(
        &self,
    ) -> impl DoubleEndedIterator<Item = (char, StateId)> + ExactSizeIterator + '_ {
        self.edges.iter().copied()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn edge_at(&self, pos: usize) -> (char, StateId) {
        self.edges[pos]
    }

    pub fn output(&self) -> Option<PatternId> {
        self.output
    }

    pub fn is_terminal(&self) -> bool {
        self.output.is_some()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn failure(&self) -> Option<StateId> {
        self.failure
    }

    pub fn dictionary(&self) -> Option<StateId> {
        self.dictionary
    }

    pub(crate) fn set_output(&mut self, pattern: PatternId) {
        self.output = Some(pattern);
    }

    /// Insert a new edge, keeping labels sorted.
    ///
    /// Callers check `transition` first; a repeated label is a builder bug.
    pub(crate) fn insert_edge(&mut self, symbol: char, target: StateId) {
        match self.edges.binary_search_by_key(&symbol, |&(label, _)| label) {
            Ok(_) => debug_assert!(false, "state already has an edge labeled {symbol:?}"),
            Err(pos) => self.edges.insert(pos, (symbol, target)),
        }
    }
}
