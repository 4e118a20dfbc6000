// Failure and dictionary link construction
//
// Runs once over a finished trie, breadth-first. A state's failure link is
// derived from its parent's failure link, so every state at depth d must be
// linked before any state at depth d + 1.

use crate::state::{State, StateId};
use std::collections::VecDeque;
use tracing::debug;

/// Attach failure and dictionary links to every state of the trie.
pub(crate) fn build_links(states: &mut [State]) {
    let mut queue: VecDeque<StateId> = VecDeque::with_capacity(states.len());
    queue.push_back(StateId::ROOT);

    let mut dictionary_links = 0usize;

    while let Some(parent) = queue.pop_front() {
        for pos in 0..states[parent.as_usize()].edge_count() {
            let (symbol, child) = states[parent.as_usize()].edge_at(pos);

            let failure = resolve_failure(states, parent, symbol);
            let target = &states[failure.as_usize()];
            let dictionary = if target.is_terminal() {
                Some(failure)
            } else {
                target.dictionary()
            };

            let state = &mut states[child.as_usize()];
            debug_assert!(state.failure.is_none(), "{child} linked twice");
            state.failure = Some(failure);
            state.dictionary = dictionary;

            dictionary_links += usize::from(dictionary.is_some());
            queue.push_back(child);
        }
    }

    debug!(
        states = states.len(),
        dictionary_links, "Built failure and dictionary links"
    );
}

/// Find the failure target for the child of `parent` reached via `symbol`.
///
/// Walks the parent's failure chain until some state has an edge for
/// `symbol`, falling back to the root when none does.
fn resolve_failure(states: &[State], parent: StateId, symbol: char) -> StateId {
    // Children of the root only have the empty suffix
    let Some(mut linked) = states[parent.as_usize()].failure() else {
        return StateId::ROOT;
    };

    loop {
        let state = &states[linked.as_usize()];
        if let Some(next) = state.transition(symbol) {
            return next;
        }
        match state.failure() {
            Some(shorter) => linked = shorter,
            None => return StateId::ROOT,
        }
    }
}
