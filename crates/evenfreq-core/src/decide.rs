//! Decision wrapper.
//!
//! Composes the pipeline: validate, short-circuit single characters,
//! tabulate, search for the cheapest match target, compare against
//! [`MAX_REMOVALS`].

use tracing::debug;

use crate::analyze::{best_target, minimal_removals};
use crate::error::Result;
use crate::models::{Evaluation, Verdict};
use crate::tabulate::tabulate;
use crate::validate::ensure_solvable;

/// Largest removal count that still yields [`Verdict::Yes`].
pub const MAX_REMOVALS: usize = 1;

/// Decide whether `input` can be balanced with at most [`MAX_REMOVALS`]
/// removals.
///
/// # Errors
///
/// Returns [`crate::EvenFreqError::InvalidInput`] when the input is empty,
/// longer than [`crate::validate::MAX_LEN`], or contains anything outside
/// `a`..=`z`.
///
/// # Examples
///
/// ```
/// use evenfreq_core::decide::is_almost_valid;
/// use evenfreq_core::Verdict;
///
/// assert_eq!(is_almost_valid("aabbc").unwrap(), Verdict::Yes);
/// assert_eq!(is_almost_valid("aabbcd").unwrap(), Verdict::No);
/// assert!(is_almost_valid("").is_err());
/// ```
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn is_almost_valid(input: &str) -> Result<Verdict> {
    ensure_solvable(input)?;

    // One character is balanced by definition.
    if input.len() == 1 {
        debug!("Single character input");
        return Ok(Verdict::Yes);
    }

    let table = tabulate(input);
    let removals = minimal_removals(&table);
    debug!(distinct = table.len(), removals, "Computed minimal removals");

    Ok(Verdict::from_bool(removals <= MAX_REMOVALS))
}

/// Validate and analyze `input`, reporting every intermediate result.
///
/// The verdict always agrees with [`is_almost_valid`].
///
/// # Errors
///
/// Same as [`is_almost_valid`].
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn evaluate(input: &str) -> Result<Evaluation> {
    ensure_solvable(input)?;

    let table = tabulate(input);
    let target = best_target(&table);
    let removals = target.map_or(0, |t| t.removals);

    Ok(Evaluation {
        input_len: table.total(),
        frequencies: table.entries(),
        target,
        removals,
        verdict: Verdict::from_bool(removals <= MAX_REMOVALS),
    })
}
