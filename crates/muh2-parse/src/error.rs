//! Error and diagnostic types.
//!
//! Classification itself never fails: anything wrong with a line is reported
//! as a [`Notice`] and processing moves on to the next line. [`ParseError`]
//! covers the few places where callers hand us structured values, such as the
//! date context.

use std::fmt;

use thiserror::Error;

/// Convenience type alias for Results using [`ParseError`].
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Errors raised while building the classification context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The date string is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date '{input}': {reason}")]
    InvalidDate {
        /// The offending input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// A diagnostic raised while classifying a single line.
///
/// Notices never abort processing. They are handed to
/// [`EventSink::notice`](crate::sink::EventSink::notice), which logs them by
/// default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A non-empty line matched none of the grammars.
    Unrecognized {
        /// 1-based line number.
        line: usize,
        /// The normalized line text.
        text: String,
    },
    /// A mode line whose mode letters and target nicks don't pair up.
    ///
    /// Mode events are emitted for the pairs that exist; the rest of the line
    /// is dropped.
    ModeArity {
        /// 1-based line number.
        line: usize,
        /// Number of `o`/`v` letters in the mode string.
        letters: usize,
        /// Number of target nicks.
        targets: usize,
    },
}

impl Notice {
    /// Line number the notice refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::Unrecognized { line, .. } | Self::ModeArity { line, .. } => *line,
        }
    }

    /// Static label for tallies and log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unrecognized { .. } => "unrecognized",
            Self::ModeArity { .. } => "mode_arity",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized { line, text } => {
                write!(f, "unrecognized line #{}: '{}'", line, text)
            }
            Self::ModeArity {
                line,
                letters,
                targets,
            } => write!(
                f,
                "line #{}: mode string has {} letters but {} targets",
                line, letters, targets
            ),
        }
    }
}
