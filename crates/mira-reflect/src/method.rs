use mira_graph::{Class, ClassGraph, ClassId, ErrorState, Method, TypeResolver};

use crate::{walk, LookupError};

/// Exact positional signature match against `query`.
///
/// Each raw reference resolves lazily, in the declaring method's context. A
/// fault aborts the lookup rather than counting as a mismatch; the resolver
/// must have recorded the failure by then, which debug builds check against the
/// wired [`ErrorState`].
fn signature_matches(
    method: &Method,
    query: &[ClassId],
    types: &dyn TypeResolver,
    errors: Option<&dyn ErrorState>,
) -> Result<bool, LookupError> {
    if method.params.len() != query.len() {
        return Ok(false);
    }
    for (&index, &expected) in method.params.iter().zip(query) {
        let resolved = match types.resolve_type(index, method.id) {
            Ok(resolved) => resolved,
            Err(fault) => {
                debug_assert!(
                    errors.map_or(true, |state| state.has_pending_fault()),
                    "type resolver reported a fault without recording it"
                );
                return Err(fault.into());
            }
        };
        if resolved != expected {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Scan one class's declared methods for a `name` + `query` match.
///
/// Virtual methods first, in declaration order: a genuine match (neither
/// synthetic nor miranda) returns immediately, a synthetic match is held as
/// the fallback while the scan continues, and a miranda match can only ever be
/// the fallback. Direct methods next, skipping constructors, under the same
/// rule. The last fallback candidate seen keeps the slot.
pub(crate) fn match_in_class<'g>(
    class: &'g Class,
    name: &str,
    query: &[ClassId],
    types: &dyn TypeResolver,
    errors: Option<&dyn ErrorState>,
) -> Result<Option<&'g Method>, LookupError> {
    let mut fallback: Option<&'g Method> = None;

    for method in &class.virtual_methods {
        if method.name != name || !signature_matches(method, query, types, errors)? {
            continue;
        }
        if method.access.is_miranda() {
            // Stand-in for an interface method the class never declared a body
            // for; reported only when nothing declared wins.
            fallback = Some(method);
            continue;
        }
        if !method.access.is_synthetic() {
            return Ok(Some(method));
        }
        fallback = Some(method);
    }

    for method in &class.direct_methods {
        if method.is_constructor() {
            continue;
        }
        if method.name != name || !signature_matches(method, query, types, errors)? {
            continue;
        }
        if !method.access.is_miranda() && !method.access.is_synthetic() {
            return Ok(Some(method));
        }
        fallback = Some(method);
    }

    Ok(fallback)
}

pub(crate) fn find_declared<'g>(
    graph: &'g dyn ClassGraph,
    class: ClassId,
    name: &str,
    query: &[ClassId],
    types: &dyn TypeResolver,
    errors: Option<&dyn ErrorState>,
) -> Result<Option<&'g Method>, LookupError> {
    let Some(class) = graph.class(class) else {
        return Ok(None);
    };
    match_in_class(class, name, query, types, errors)
}

pub(crate) fn find_public_recursive<'g>(
    graph: &'g dyn ClassGraph,
    start: ClassId,
    name: &str,
    query: &[ClassId],
    types: &dyn TypeResolver,
    errors: Option<&dyn ErrorState>,
) -> Result<Option<&'g Method>, LookupError> {
    walk::find_first(graph, start, true, &|class: &'g Class| {
        match_in_class(class, name, query, types, errors)
    })
}
