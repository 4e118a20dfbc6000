// Match reports
//
// A report maps every pattern index to the set of start offsets where that
// pattern occurs in one scanned text. Offsets are `char` positions.

use crate::pattern::PatternId;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

/// Result of scanning one text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchReport {
    /// Start offsets, indexed by pattern
    offsets: Vec<BTreeSet<usize>>,
}

/// A single pattern occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Occurrence {
    /// First symbol of the occurrence
    pub start: usize,

    /// One past the last symbol of the occurrence
    pub end: usize,

    /// The pattern that occurred
    pub pattern: PatternId,
}

impl MatchReport {
    /// An all-empty report for `pattern_count` patterns
    pub fn new(pattern_count: usize) -> Self {
        Self {
            offsets: vec![BTreeSet::new(); pattern_count],
        }
    }

    pub(crate) fn insert(&mut self, pattern: PatternId, start: usize) {
        self.offsets[pattern.as_usize()].insert(start);
    }

    /// Start offsets for one pattern, or None if the index is out of range
    pub fn get(&self, pattern: PatternId) -> Option<&BTreeSet<usize>> {
        self.offsets.get(pattern.as_usize())
    }

    pub fn contains(&self, pattern: PatternId, start: usize) -> bool {
        self.get(pattern).is_some_and(|starts| starts.contains(&start))
    }

    /// Number of patterns covered by this report
    pub fn pattern_count(&self) -> usize {
        self.offsets.len()
    }

    /// Iterate over every pattern and its start offsets
    pub fn iter(&self) -> impl Iterator<Item = (PatternId, &BTreeSet<usize>)> + '_ {
        self.offsets
            .iter()
            .enumerate()
            .map(|(index, starts)| (PatternId::new(index), starts))
    }

    /// Patterns with at least one occurrence
    pub fn matched_patterns(&self) -> impl Iterator<Item = PatternId> + '_ {
        self.iter()
            .filter(|(_, starts)| !starts.is_empty())
            .map(|(pattern, _)| pattern)
    }

    pub fn total_matches(&self) -> usize {
        self.offsets.iter().map(BTreeSet::len).sum()
    }

    /// True when no pattern occurred
    pub fn is_empty(&self) -> bool {
        self.offsets.iter().all(BTreeSet::is_empty)
    }

    /// Flatten into occurrences ordered by start, end, then pattern.
    ///
    /// `pattern_lengths` gives the length in symbols of every pattern.
    pub fn occurrences(&self, pattern_lengths: &[usize]) -> Vec<Occurrence> {
        let mut occurrences: Vec<Occurrence> = self
            .iter()
            .flat_map(|(pattern, starts)| {
                let length = pattern_lengths
                    .get(pattern.as_usize())
                    .copied()
                    .unwrap_or_default();
                starts.iter().map(move |&start| Occurrence {
                    start,
                    end: start + length,
                    pattern,
                })
            })
            .collect();
        occurrences.sort_unstable();
        occurrences
    }
}

impl Occurrence {
    /// Byte range of this occurrence within the scanned `text`
    pub fn byte_range(&self, text: &str) -> Range<usize> {
        let mut boundaries = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()));
        let start = boundaries.nth(self.start).unwrap_or(text.len());
        let end = if self.end > self.start {
            boundaries
                .nth(self.end - self.start - 1)
                .unwrap_or(text.len())
        } else {
            start
        };
        start..end
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, starts) in self.offsets.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{{")?;
            for (position, start) in starts.iter().enumerate() {
                if position > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{start}")?;
            }
            write!(f, "}}")?;
        }
        write!(f, "]")
    }
}
