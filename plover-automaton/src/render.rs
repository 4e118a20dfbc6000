// Tree rendering for diagnostics
//
// Draws the trie edges of an automaton as an indented tree, one line per
// state. Failure and dictionary links are not drawn.

use crate::automaton::Automaton;
use crate::state::StateId;

const TERMINAL: &str = "(█)";
const NON_TERMINAL: &str = "()";
const BRANCH: &str = "├──";
const LAST_BRANCH: &str = "└──";

struct Frame {
    state: StateId,
    padding: String,
    pointer: String,
    has_next_sibling: bool,
}

/// Render the trie as lines of text, children in ascending label order.
///
/// ```text
/// ()
/// └──<a>──()
///          ├──<r>──()
///          |        └──<t>──(█)
///          └──<t>──(█)
/// ```
pub fn render_tree(automaton: &Automaton) -> Vec<String> {
    let mut lines = Vec::with_capacity(automaton.state_count());
    let mut stack = vec![Frame {
        state: StateId::ROOT,
        padding: String::new(),
        pointer: String::new(),
        has_next_sibling: false,
    }];

    while let Some(frame) = stack.pop() {
        let Some(state) = automaton.state(frame.state) else {
            continue;
        };

        let marker = if state.is_terminal() { TERMINAL } else { NON_TERMINAL };
        lines.push(format!("{}{}{}", frame.padding, frame.pointer, marker));

        // Children of the root start flush left
        let child_padding = if frame.state.is_root() {
            String::new()
        } else {
            let mut padding = frame.padding;
            padding.push(if frame.has_next_sibling { '|' } else { ' ' });
            padding.extend(std::iter::repeat(' ').take(frame.pointer.chars().count()));
            padding
        };

        let last = state.edge_count().saturating_sub(1);
        for (position, (symbol, child)) in state.edges().enumerate().rev() {
            let has_next_sibling = position != last;
            let branch = if has_next_sibling { BRANCH } else { LAST_BRANCH };
            stack.push(Frame {
                state: child,
                padding: child_padding.clone(),
                pointer: format!("{branch}<{symbol}>──"),
                has_next_sibling,
            });
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        let automaton = Automaton::new(Vec::<String>::new()).unwrap();
        assert_eq!(render_tree(&automaton), vec!["()".to_string()]);
    }

    #[test]
    fn test_render_branches() {
        let automaton = Automaton::new(["at", "art"]).unwrap();
        let lines = render_tree(&automaton);
        assert_eq!(
            lines,
            vec![
                "()",
                "└──<a>──()",
                "         ├──<r>──()",
                "         |        └──<t>──(█)",
                "         └──<t>──(█)",
            ]
        );
    }

    #[test]
    fn test_render_siblings_at_root() {
        let automaton = Automaton::new(["b", "a"]).unwrap();
        let lines = render_tree(&automaton);
        assert_eq!(lines, vec!["()", "├──<a>──(█)", "└──<b>──(█)"]);
    }

    #[test]
    fn test_render_one_line_per_state() {
        let automaton = Automaton::new(["at", "art", "oars", "soar"]).unwrap();
        assert_eq!(render_tree(&automaton).len(), automaton.state_count());
    }

    #[test]
    fn test_display_matches_render() {
        let automaton = Automaton::new(["ab"]).unwrap();
        let expected = render_tree(&automaton).join("\n") + "\n";
        assert_eq!(automaton.to_string(), expected);
    }
}
