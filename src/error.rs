//! Structured errors returned by detection and extrapolation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    /// No state repeated: either the iteration cap was spent or a finite sequence ran out first.
    /// `consumed == max_iterations` in the former case.
    #[error(
        "no cycle found in input sequence after checking {consumed} states \
         (max_iterations={max_iterations})"
    )]
    NoCycleFound { max_iterations: u64, consumed: u64 },
    /// A caller-supplied argument is outside its domain (e.g. a negative target index).
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    /// A `try_reserve` allocation failed while growing the history.
    #[error("allocation failed for {structure} after {consumed} states")]
    AllocationFailed {
        structure: &'static str,
        consumed: u64,
    },
}

impl CycleError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        CycleError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
