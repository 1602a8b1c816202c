//! Core data types for evenfreq.
//!
//! - [`FrequencyEntry`] - One character and its occurrence count
//! - [`FrequencyTable`] - Character to count mapping for one input
//! - [`MatchTarget`] - The cheapest anchor found by the analyzer
//! - [`Verdict`] - The yes/no answer
//! - [`Evaluation`] - Complete report for one input

use std::collections::BTreeMap;

use serde::Serialize;

/// A character paired with the number of times it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    /// The character.
    #[serde(rename = "char")]
    pub ch: char,
    /// Occurrence count, always at least 1.
    pub count: usize,
}

/// Occurrence count per distinct character of an input.
///
/// Built by [`crate::tabulate::tabulate`]. Iteration is alphabetical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, usize>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `ch`.
    pub fn record(&mut self, ch: char) {
        *self.counts.entry(ch).or_insert(0) += 1;
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for `ch`, or `None` when it never occurs.
    pub fn get(&self, ch: char) -> Option<usize> {
        self.counts.get(&ch).copied()
    }

    /// Iterate over entries in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = FrequencyEntry> + '_ {
        self.counts
            .iter()
            .map(|(&ch, &count)| FrequencyEntry { ch, count })
    }

    /// All entries in alphabetical order.
    pub fn entries(&self) -> Vec<FrequencyEntry> {
        self.iter().collect()
    }

    /// Entries ordered by count, most frequent first. Ties stay alphabetical.
    pub fn by_count_desc(&self) -> Vec<FrequencyEntry> {
        let mut entries = self.entries();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }

    /// Sum of all counts. Equals the length of the tabulated input.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// The anchor character whose count all retained characters converge to,
/// together with the number of removals that takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchTarget {
    /// The anchor character.
    #[serde(rename = "char")]
    pub ch: char,
    /// The anchor's count, i.e. the common frequency after removals.
    pub count: usize,
    /// Removals needed to reach that frequency.
    pub removals: usize,
}

/// Answer to "can the input be balanced with at most one removal?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Yes,
    No,
}

impl Verdict {
    /// `Yes` when `condition` holds.
    pub fn from_bool(condition: bool) -> Self {
        if condition { Verdict::Yes } else { Verdict::No }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Yes => write!(f, "YES"),
            Verdict::No => write!(f, "NO"),
        }
    }
}

/// Full report produced by [`crate::decide::evaluate`].
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// Input length in characters.
    pub input_len: usize,
    /// Frequency table, alphabetical.
    pub frequencies: Vec<FrequencyEntry>,
    /// Cheapest match target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<MatchTarget>,
    /// Minimal number of removals.
    pub removals: usize,
    /// Final answer.
    pub verdict: Verdict,
}
