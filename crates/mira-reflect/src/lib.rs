//! Reflection-style member lookup over a loaded-class graph.
//!
//! Given a class, a member name, and (for methods) the exact parameter types,
//! [`Resolver`] finds the declaration the `getDeclaredMethod` / `getMethod`
//! family of a runtime's reflection surface would hand back: the superclass
//! chain is searched before the flattened interface table, synthetic and
//! miranda entries lose to genuine declarations, and the public-recursive mode
//! skips non-public matches without ending the search.
//!
//! The graph itself, raw type resolution, and the host's pending-fault flag
//! are injected through the `mira-graph` traits; lookup is a pure read.

mod error;
mod field;
mod method;
pub mod walk;

pub use error::LookupError;

use mira_graph::{ClassGraph, ClassId, ErrorState, Field, Method, TypeResolver};

/// How far a lookup reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Only members the queried class declares itself, public or not.
    Declared,
    /// Public members anywhere along the superclass chain or the transitive
    /// interface table.
    PublicRecursive,
}

/// Member lookup over a class graph.
///
/// A resolver borrows its collaborators and keeps no state of its own, so
/// hosts create one per query or share one across threads as they prefer.
pub struct Resolver<'a> {
    graph: &'a dyn ClassGraph,
    types: &'a dyn TypeResolver,
    errors: Option<&'a dyn ErrorState>,
}

impl<'a> Resolver<'a> {
    pub fn new(graph: &'a dyn ClassGraph, types: &'a dyn TypeResolver) -> Self {
        Self {
            graph,
            types,
            errors: None,
        }
    }

    /// Wire up the host's pending-fault flag so debug builds can assert that
    /// every resolution fault was recorded before it surfaced.
    #[must_use]
    pub fn with_error_state(mut self, errors: &'a dyn ErrorState) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Find the method named `name` whose parameter types equal `params`, slot
    /// for slot.
    ///
    /// Every slot must be present: a `None` (the caller held a null class
    /// reference) fails with [`LookupError::NullParameterType`] before any
    /// class is visited. Constructors are never candidates. `Ok(None)` is a
    /// completed search with no match.
    pub fn resolve_method(
        &self,
        class: ClassId,
        name: &str,
        params: &[Option<ClassId>],
        mode: SearchMode,
    ) -> Result<Option<&'a Method>, LookupError> {
        let query = checked_query(params)?;
        let result = match mode {
            SearchMode::Declared => {
                method::find_declared(self.graph, class, name, &query, self.types, self.errors)
            }
            SearchMode::PublicRecursive => method::find_public_recursive(
                self.graph,
                class,
                name,
                &query,
                self.types,
                self.errors,
            ),
        };
        let found = match result {
            Ok(found) => found,
            Err(err) => {
                tracing::debug!(
                    target: "mira.reflect",
                    class = class.0,
                    name,
                    error = %err,
                    "method lookup aborted"
                );
                return Err(err);
            }
        };
        tracing::trace!(
            target: "mira.reflect",
            class = class.0,
            name,
            ?mode,
            found = found.is_some(),
            "method lookup"
        );
        Ok(found)
    }

    /// Find the field named `name`. Within a class, instance fields shadow
    /// statics; otherwise the same search shapes as methods apply.
    pub fn resolve_field(
        &self,
        class: ClassId,
        name: &str,
        mode: SearchMode,
    ) -> Result<Option<&'a Field>, LookupError> {
        let found = match mode {
            SearchMode::Declared => field::find_declared(self.graph, class, name),
            SearchMode::PublicRecursive => field::find_public_recursive(self.graph, class, name)?,
        };
        tracing::trace!(
            target: "mira.reflect",
            class = class.0,
            name,
            ?mode,
            found = found.is_some(),
            "field lookup"
        );
        Ok(found)
    }
}

/// Validate the query's parameter slots, in order, before any search starts.
fn checked_query(params: &[Option<ClassId>]) -> Result<Vec<ClassId>, LookupError> {
    params
        .iter()
        .copied()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(LookupError::NullParameterType { index }))
        .collect()
}
