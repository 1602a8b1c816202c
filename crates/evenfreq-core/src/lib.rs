//! # evenfreq-core
//!
//! Decides whether a lowercase string can be made "balanced", with every
//! distinct character occurring equally often, by removing at most one
//! character.
//!
//! ## Pipeline
//!
//! - **Validation**: 1 to 100,000 characters, all in `a`..=`z`.
//! - **Tabulation**: one pass building a character to count table.
//! - **Analysis**: every character is tried as the match target and the
//!   cheapest total of removals wins.
//! - **Decision**: `YES` when that total is at most one.
//!
//! ## Example
//!
//! ```rust
//! use evenfreq_core::prelude::*;
//!
//! assert_eq!(is_almost_valid("aabbc").unwrap(), Verdict::Yes);
//!
//! let table = tabulate("aabbcd");
//! assert_eq!(minimal_removals(&table), 2);
//!
//! let err = is_almost_valid("").unwrap_err();
//! assert_eq!(err.reason(), InvalidReason::TooShort);
//! ```

pub mod analyze;
pub mod decide;
pub mod error;
pub mod models;
pub mod tabulate;
pub mod validate;

// Re-export commonly used types at the crate root
pub use analyze::{best_target, is_balanced, minimal_removals, removals_for_target};
pub use decide::{MAX_REMOVALS, evaluate, is_almost_valid};
pub use error::{EvenFreqError, InvalidReason, Result};
pub use models::{Evaluation, FrequencyEntry, FrequencyTable, MatchTarget, Verdict};
pub use tabulate::tabulate;
pub use validate::{MAX_LEN, MIN_LEN, ensure_solvable};

/// Prelude module for convenient imports.
///
/// ```
/// use evenfreq_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analyze::{best_target, is_balanced, minimal_removals};
    pub use crate::decide::{evaluate, is_almost_valid};
    pub use crate::error::{EvenFreqError, InvalidReason, Result};
    pub use crate::models::*;
    pub use crate::tabulate::tabulate;
    pub use crate::validate::ensure_solvable;
}
