// Trie construction
//
// Builds the goto structure of the automaton: one state per distinct
// pattern prefix, connected by symbol-labeled edges. Failure and dictionary
// links are left unset here; `links::build_links` fills them in afterwards.

use crate::pattern::{self, PatternId};
use crate::state::{State, StateId};
use crate::{AutomatonConfig, AutomatonError, AutomatonResult, DuplicatePolicy};
use tracing::{debug, warn};

/// Output of the trie construction phase
pub(crate) struct Trie {
    /// State arena; index 0 is the root
    pub(crate) states: Vec<State>,

    /// Length in symbols of every pattern, by pattern index
    pub(crate) pattern_lengths: Vec<usize>,
}

/// Build the trie for `patterns`, in input order.
pub(crate) fn build_trie(patterns: &[String], config: &AutomatonConfig) -> AutomatonResult<Trie> {
    pattern::validate_count(patterns.len(), config)?;

    let mut states = vec![State::new(0)];
    let mut pattern_lengths = Vec::with_capacity(patterns.len());

    for (index, value) in patterns.iter().enumerate() {
        let length = pattern::validate(index, value, config)?;
        pattern_lengths.push(length);

        // Walk the shared prefix, then extend the trie for the rest
        let mut current = StateId::ROOT;
        for symbol in value.chars() {
            current = match states[current.as_usize()].transition(symbol) {
                Some(next) => next,
                None => {
                    let depth = states[current.as_usize()].depth() + 1;
                    let next = StateId::new(states.len());
                    states.push(State::new(depth));
                    states[current.as_usize()].insert_edge(symbol, next);
                    next
                }
            };
        }

        mark_terminal(&mut states[current.as_usize()], index, config.duplicate_policy)?;
    }

    debug!(
        patterns = patterns.len(),
        states = states.len(),
        "Built pattern trie"
    );

    Ok(Trie {
        states,
        pattern_lengths,
    })
}

fn mark_terminal(state: &mut State, index: usize, policy: DuplicatePolicy) -> AutomatonResult<()> {
    let pattern = PatternId::new(index);
    let Some(first) = state.output() else {
        state.set_output(pattern);
        return Ok(());
    };

    match policy {
        DuplicatePolicy::KeepFirst => {
            warn!(index, first = first.as_usize(), "Ignoring duplicate pattern");
        }
        DuplicatePolicy::KeepLast => {
            warn!(index, previous = first.as_usize(), "Duplicate pattern replaces earlier copy");
            state.set_output(pattern);
        }
        DuplicatePolicy::Reject => {
            return Err(AutomatonError::DuplicatePattern {
                index,
                first: first.as_usize(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn walk(trie: &Trie, path: &str) -> Option<StateId> {
        path.chars().try_fold(StateId::ROOT, |current, symbol| {
            trie.states[current.as_usize()].transition(symbol)
        })
    }

    #[test]
    fn test_shared_prefixes() {
        let trie = build_trie(&patterns(&["at", "art", "oars", "soar"]), &AutomatonConfig::default())
            .unwrap();

        // root + a, at, ar, art + o, oa, oar, oars + s, so, soa, soar
        assert_eq!(trie.states.len(), 13);
        assert_eq!(trie.pattern_lengths, vec![2, 3, 4, 4]);

        let at = walk(&trie, "at").unwrap();
        assert_eq!(trie.states[at.as_usize()].output(), Some(PatternId::new(0)));
        assert_eq!(trie.states[at.as_usize()].depth(), 2);

        let ar = walk(&trie, "ar").unwrap();
        assert!(!trie.states[ar.as_usize()].is_terminal());

        let root = &trie.states[StateId::ROOT.as_usize()];
        assert_eq!(root.edge_count(), 3);
        assert!(!root.is_terminal());
    }

    #[test]
    fn test_prefix_pattern_is_terminal() {
        let trie = build_trie(&patterns(&["abc", "ab"]), &AutomatonConfig::default()).unwrap();
        assert_eq!(trie.states.len(), 4);

        let ab = walk(&trie, "ab").unwrap();
        assert_eq!(trie.states[ab.as_usize()].output(), Some(PatternId::new(1)));
    }

    #[test]
    fn test_empty_pattern_list() {
        let trie = build_trie(&[], &AutomatonConfig::default()).unwrap();
        assert_eq!(trie.states.len(), 1);
        assert_eq!(trie.states[0].edge_count(), 0);
        assert!(!trie.states[0].is_terminal());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let result = build_trie(&patterns(&["a", ""]), &AutomatonConfig::default());
        assert_eq!(result.err(), Some(AutomatonError::EmptyPattern { index: 1 }));
    }

    #[test]
    fn test_duplicate_policies() {
        let input = patterns(&["ab", "cd", "ab"]);

        let trie = build_trie(&input, &AutomatonConfig::default()).unwrap();
        let ab = walk(&trie, "ab").unwrap();
        assert_eq!(trie.states[ab.as_usize()].output(), Some(PatternId::new(0)));

        let config = AutomatonConfig {
            duplicate_policy: DuplicatePolicy::KeepLast,
            ..Default::default()
        };
        let trie = build_trie(&input, &config).unwrap();
        assert_eq!(trie.states[ab.as_usize()].output(), Some(PatternId::new(2)));

        let config = AutomatonConfig {
            duplicate_policy: DuplicatePolicy::Reject,
            ..Default::default()
        };
        let result = build_trie(&input, &config);
        assert_eq!(
            result.err(),
            Some(AutomatonError::DuplicatePattern { index: 2, first: 0 })
        );
    }

    #[test]
    fn test_too_many_patterns() {
        let config = AutomatonConfig {
            max_patterns: 1,
            ..Default::default()
        };
        let result = build_trie(&patterns(&["a", "b"]), &config);
        assert_eq!(
            result.err(),
            Some(AutomatonError::TooManyPatterns { count: 2, max: 1 })
        );
    }
}
