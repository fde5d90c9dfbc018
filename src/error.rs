use thiserror::Error;

/// Failures a comparison can surface to its caller.
///
/// Only resource-bound conditions are errors. Malformed or empty input is
/// not: it collapses to the unchanged empty-pair fragment. Violated internal
/// preconditions (an engine bug, not bad input) panic instead of returning
/// a variant, and must not be caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiffError {
    /// The matching phase would exceed its size cutoff. Never retried and
    /// never silently truncated; callers re-invoke with smaller scope.
    #[error("inputs too large to match: {actual} tokens exceed the limit of {limit}")]
    TooLarge { actual: usize, limit: usize },

    /// The cooperative cancellation hook asked the matching phase to stop.
    /// No partial results are kept.
    #[error("comparison cancelled")]
    Cancelled,
}
