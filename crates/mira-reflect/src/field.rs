use mira_graph::{Class, ClassGraph, ClassId, Field};

use crate::{walk, LookupError};

/// First field named `name` declared by `class`: instance fields before
/// statics, each in declaration order. Fields carry no signature, so there is
/// no fallback policy to apply.
pub(crate) fn match_in_class<'g>(class: &'g Class, name: &str) -> Option<&'g Field> {
    class
        .instance_fields
        .iter()
        .chain(&class.static_fields)
        .find(|field| field.name == name)
}

pub(crate) fn find_declared<'g>(
    graph: &'g dyn ClassGraph,
    class: ClassId,
    name: &str,
) -> Option<&'g Field> {
    match_in_class(graph.class(class)?, name)
}

pub(crate) fn find_public_recursive<'g>(
    graph: &'g dyn ClassGraph,
    start: ClassId,
    name: &str,
) -> Result<Option<&'g Field>, LookupError> {
    walk::find_first(graph, start, true, &|class: &'g Class| {
        Ok(match_in_class(class, name))
    })
}
