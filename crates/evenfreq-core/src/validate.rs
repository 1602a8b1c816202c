//! Input validation.
//!
//! A candidate string is accepted when it holds between [`MIN_LEN`] and
//! [`MAX_LEN`] characters (inclusive) and every character is in `a`..=`z`.
//! Validation never transforms the input.

use crate::error::{EvenFreqError, InvalidReason, Result};

/// Minimum accepted input length, in characters.
pub const MIN_LEN: usize = 1;

/// Maximum accepted input length, in characters.
pub const MAX_LEN: usize = 100_000;

/// Check that `input` satisfies the preconditions of the analysis.
///
/// The checks run in order: too short, too long, bad alphabet. The first
/// failing one is reported.
///
/// # Examples
///
/// ```
/// use evenfreq_core::validate::ensure_solvable;
/// use evenfreq_core::InvalidReason;
///
/// assert!(ensure_solvable("aabbc").is_ok());
/// assert_eq!(
///     ensure_solvable("").unwrap_err().reason(),
///     InvalidReason::TooShort
/// );
/// ```
pub fn ensure_solvable(input: &str) -> Result<()> {
    let len = input.chars().count();

    if len < MIN_LEN {
        return Err(EvenFreqError::InvalidInput(InvalidReason::TooShort));
    }

    if len > MAX_LEN {
        return Err(EvenFreqError::InvalidInput(InvalidReason::TooLong { len }));
    }

    if let Some((position, ch)) = input
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_lowercase())
    {
        return Err(EvenFreqError::InvalidInput(InvalidReason::BadAlphabet {
            ch,
            position,
        }));
    }

    Ok(())
}
