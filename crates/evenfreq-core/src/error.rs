//! Error types for evenfreq-core.
//!
//! There is a single error kind, [`EvenFreqError::InvalidInput`], raised by
//! the validator. The attached [`InvalidReason`] tells the three rejection
//! conditions apart for diagnostics.

use thiserror::Error;

use crate::validate::{MAX_LEN, MIN_LEN};

/// Why an input string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The input is shorter than [`MIN_LEN`].
    TooShort,
    /// The input is longer than [`MAX_LEN`].
    TooLong {
        /// Length of the rejected input, in characters.
        len: usize,
    },
    /// The input contains a character outside `a`..=`z`.
    BadAlphabet {
        /// The first offending character.
        ch: char,
        /// Character index of the offending character.
        position: usize,
    },
}

impl InvalidReason {
    /// Stable machine-readable tag: `too_short`, `too_long` or `bad_alphabet`.
    pub fn tag(&self) -> &'static str {
        match self {
            InvalidReason::TooShort => "too_short",
            InvalidReason::TooLong { .. } => "too_long",
            InvalidReason::BadAlphabet { .. } => "bad_alphabet",
        }
    }
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::TooShort => {
                write!(f, "input must contain at least {} character", MIN_LEN)
            }
            InvalidReason::TooLong { len } => {
                write!(f, "input has {} characters, maximum is {}", len, MAX_LEN)
            }
            InvalidReason::BadAlphabet { ch, position } => write!(
                f,
                "unexpected character {:?} at position {}, expected a-z",
                ch, position
            ),
        }
    }
}

/// The main error type for evenfreq operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvenFreqError {
    /// The input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(InvalidReason),
}

impl EvenFreqError {
    /// The reason attached to this error.
    pub fn reason(&self) -> InvalidReason {
        match self {
            EvenFreqError::InvalidInput(reason) => *reason,
        }
    }
}

/// Result type alias for evenfreq operations.
pub type Result<T> = std::result::Result<T, EvenFreqError>;
