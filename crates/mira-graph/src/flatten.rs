use crate::{ClassGraph, ClassId};

/// Build the flattened, de-duplicated transitive interface table for a class
/// being linked.
///
/// The order is fixed: the superclass's table first, then each directly declared
/// interface followed by that interface's own table, in declaration order,
/// skipping entries already present. Lookup iterates the result as-is, so this
/// order is the interface search order.
///
/// The superclass and every direct interface must already be linked; an
/// undefined id contributes nothing.
pub fn flatten_interfaces(
    graph: &dyn ClassGraph,
    super_class: Option<ClassId>,
    direct: &[ClassId],
) -> Vec<ClassId> {
    let mut table = Vec::new();

    if let Some(super_id) = super_class {
        if let Some(super_def) = graph.class(super_id) {
            table.extend(super_def.interfaces.iter().copied());
        }
    }

    for &iface in direct {
        push_unique(&mut table, iface);
        let Some(iface_def) = graph.class(iface) else {
            continue;
        };
        for &inherited in &iface_def.interfaces {
            push_unique(&mut table, inherited);
        }
    }

    table
}

// Tables stay small enough that a linear scan beats a side set.
fn push_unique(table: &mut Vec<ClassId>, id: ClassId) {
    if !table.contains(&id) {
        table.push(id);
    }
}
