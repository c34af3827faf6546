//! The hierarchy walk shared by method and field lookup.

use mira_graph::{Class, ClassGraph, ClassId, Member};

use crate::LookupError;

/// Apply `predicate` across the hierarchy of `start` and return the first
/// qualifying match.
///
/// The superclass chain is visited first, from `start` itself upward. If no
/// chain match qualifies, the flattened interface table of `start` (not of the
/// class the chain ended on) is visited in stored order, recursing into each
/// entry so that entry's own hierarchy is covered the same way.
///
/// `require_public` gates matches, not the walk: a non-public match is passed
/// over and the search continues. A predicate error aborts the whole walk. An
/// id the graph does not know ends its branch quietly.
pub fn find_first<'g, M, P>(
    graph: &'g dyn ClassGraph,
    start: ClassId,
    require_public: bool,
    predicate: &P,
) -> Result<Option<&'g M>, LookupError>
where
    M: Member,
    P: Fn(&'g Class) -> Result<Option<&'g M>, LookupError>,
{
    let mut current = Some(start);
    while let Some(id) = current {
        let Some(class) = graph.class(id) else {
            break;
        };
        if let Some(found) = predicate(class)? {
            if !require_public || found.is_public() {
                return Ok(Some(found));
            }
        }
        current = class.super_class;
    }

    let Some(class) = graph.class(start) else {
        return Ok(None);
    };
    for &iface in &class.interfaces {
        if let Some(found) = find_first(graph, iface, require_public, predicate)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}
