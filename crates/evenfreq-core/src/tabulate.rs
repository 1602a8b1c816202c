//! Frequency tabulation.

use crate::models::FrequencyTable;

/// Count the occurrences of every distinct character in `input`.
///
/// Scans the input once. Assumes the input has already been validated, but
/// is defined for any string.
///
/// # Examples
///
/// ```
/// use evenfreq_core::tabulate::tabulate;
///
/// let table = tabulate("aabbc");
/// assert_eq!(table.get('a'), Some(2));
/// assert_eq!(table.get('c'), Some(1));
/// assert_eq!(table.total(), 5);
/// ```
pub fn tabulate(input: &str) -> FrequencyTable {
    input.chars().fold(FrequencyTable::new(), |mut table, ch| {
        table.record(ch);
        table
    })
}
