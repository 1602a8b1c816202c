//! Removal-cost analysis.
//!
//! Every character in the table is tried as the match target. For a target
//! with count `t`, each other character with count `c` costs `c - t` when
//! `c >= t` (trim it down) and `c` otherwise (remove it entirely, since counts
//! can only go down). The cheapest target wins.
//!
//! Characters sharing a count produce identical totals, so searching distinct
//! count values would be equivalent. With at most 26 characters the
//! character-level search is kept for clarity.

use tracing::debug;

use crate::models::{FrequencyTable, MatchTarget};

/// Removals needed so every retained character occurs exactly as often as
/// `target`. The target never contributes to its own total.
///
/// Returns `None` when `target` does not occur in the table.
pub fn removals_for_target(table: &FrequencyTable, target: char) -> Option<usize> {
    let goal = table.get(target)?;

    let total = table
        .iter()
        .filter(|other| other.ch != target)
        .map(|other| {
            if other.count >= goal {
                other.count - goal
            } else {
                other.count
            }
        })
        .sum();

    Some(total)
}

/// Find the cheapest match target.
///
/// Ties go to the alphabetically first character. Returns `None` only for an
/// empty table.
///
/// # Examples
///
/// ```
/// use evenfreq_core::analyze::best_target;
/// use evenfreq_core::tabulate::tabulate;
///
/// let target = best_target(&tabulate("hhhhhhiiiii")).unwrap();
/// assert_eq!(target.ch, 'i');
/// assert_eq!(target.count, 5);
/// assert_eq!(target.removals, 1);
/// ```
#[tracing::instrument(skip(table), fields(distinct = table.len()))]
pub fn best_target(table: &FrequencyTable) -> Option<MatchTarget> {
    let best = table
        .iter()
        .filter_map(|entry| {
            removals_for_target(table, entry.ch).map(|removals| MatchTarget {
                ch: entry.ch,
                count: entry.count,
                removals,
            })
        })
        .min_by_key(|candidate| candidate.removals);

    debug!(?best, "Selected match target");
    best
}

/// Minimal number of single-character removals that leave every remaining
/// character with the same count. Zero for an empty table.
pub fn minimal_removals(table: &FrequencyTable) -> usize {
    best_target(table).map_or(0, |target| target.removals)
}

/// Whether every character already occurs the same number of times.
pub fn is_balanced(table: &FrequencyTable) -> bool {
    let mut counts = table.iter().map(|entry| entry.count);
    match counts.next() {
        Some(first) => counts.all(|count| count == first),
        None => true,
    }
}
