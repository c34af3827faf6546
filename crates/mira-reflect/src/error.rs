use thiserror::Error;

use mira_graph::ResolutionFault;

/// Why a lookup could not run to completion.
///
/// An exhausted search is not an error: lookups return `Ok(None)` once every
/// candidate class has been visited without a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    /// A parameter-type slot in the query was absent. Detected before any
    /// class is visited.
    #[error("parameter type at index {index} is null")]
    NullParameterType { index: usize },

    /// A raw type reference failed to resolve while a signature was being
    /// matched. Propagated as-is; the search is abandoned with no partial
    /// result.
    #[error(transparent)]
    Resolution(#[from] ResolutionFault),
}
