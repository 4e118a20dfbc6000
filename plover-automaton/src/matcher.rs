// Matcher - scans texts against a built automaton
//
// The production path keeps a single cursor state and moves it once per
// input symbol, falling back along failure links on mismatch. Every scan
// owns its cursor and report, so scans never interact.

use crate::automaton::Automaton;
use crate::report::{MatchReport, Occurrence};
use crate::state::StateId;
use rayon::prelude::*;

impl Automaton {
    /// Report every occurrence of every pattern in `text`.
    ///
    /// Runs in O(n + z) for a text of n symbols with z occurrences.
    pub fn scan(&self, text: &str) -> MatchReport {
        let mut report = MatchReport::new(self.pattern_count());
        let mut cursor = StateId::ROOT;

        for (position, symbol) in text.chars().enumerate() {
            cursor = self.next_state(cursor, symbol);
            self.record_matches(cursor, position, &mut report);
        }

        report
    }

    /// Baseline matcher: restart from the root at every text position.
    ///
    /// Ignores failure and dictionary links entirely and costs O(n * l) for
    /// a longest pattern of l symbols. Produces the same report as `scan`.
    pub fn scan_naive(&self, text: &str) -> MatchReport {
        let mut report = MatchReport::new(self.pattern_count());
        let symbols: Vec<char> = text.chars().collect();

        for start in 0..symbols.len() {
            let mut current = StateId::ROOT;
            for &symbol in &symbols[start..] {
                let Some(next) = self.states[current.as_usize()].transition(symbol) else {
                    break;
                };
                current = next;
                if let Some(pattern) = self.states[current.as_usize()].output() {
                    report.insert(pattern, start);
                }
            }
        }

        report
    }

    /// Scan many independent texts in parallel
    pub fn scan_batch<T>(&self, texts: &[T]) -> Vec<MatchReport>
    where
        T: AsRef<str> + Sync,
    {
        texts.par_iter().map(|text| self.scan(text.as_ref())).collect()
    }

    /// Occurrences in `text`, ordered by start, end, then pattern
    pub fn find_all(&self, text: &str) -> Vec<Occurrence> {
        self.occurrences(&self.scan(text))
    }

    /// Flatten a report produced by this automaton into occurrences
    pub fn occurrences(&self, report: &MatchReport) -> Vec<Occurrence> {
        report.occurrences(&self.pattern_lengths)
    }

    /// True if any pattern occurs in `text`
    pub fn is_match(&self, text: &str) -> bool {
        let mut cursor = StateId::ROOT;
        for symbol in text.chars() {
            cursor = self.next_state(cursor, symbol);
            let state = &self.states[cursor.as_usize()];
            if state.is_terminal() || state.dictionary().is_some() {
                return true;
            }
        }
        false
    }

    /// Advance the cursor by one symbol.
    ///
    /// Depth strictly decreases along failure links, so the fallback loop
    /// ends at the latest on the root.
    fn next_state(&self, mut cursor: StateId, symbol: char) -> StateId {
        loop {
            let state = &self.states[cursor.as_usize()];
            if let Some(next) = state.transition(symbol) {
                return next;
            }
            match state.failure() {
                Some(shorter) => cursor = shorter,
                None => return cursor,
            }
        }
    }

    /// Record the cursor's own pattern and every pattern on its dictionary chain.
    fn record_matches(&self, cursor: StateId, position: usize, report: &mut MatchReport) {
        let state = &self.states[cursor.as_usize()];
        if let Some(pattern) = state.output() {
            report.insert(pattern, position + 1 - state.depth());
        }

        let mut link = state.dictionary();
        while let Some(id) = link {
            let suffix = &self.states[id.as_usize()];
            if let Some(pattern) = suffix.output() {
                report.insert(pattern, position + 1 - suffix.depth());
            }
            link = suffix.dictionary();
        }
    }
}
