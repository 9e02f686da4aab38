//! Error type for search execution.

use std::fmt;

/// Errors raised by a search run.
///
/// Unlike [`gridpath_core::GridError`], these are not user-input
/// errors: they indicate the engine's own state-machine contract was
/// broken and the run must be aborted rather than return a partial
/// answer. A frontier that empties without reaching the goal is *not*
/// an error — that is the normal `Exhausted` outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The predecessor chain was broken or cyclic during path
    /// reconstruction.
    InvariantViolation {
        /// What was observed.
        detail: String,
    },
}

impl SearchError {
    pub(crate) fn invariant(detail: impl Into<String>) -> Self {
        Self::InvariantViolation {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvariantViolation { detail } => {
                write!(f, "search invariant violated: {detail}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
