use crate::{Class, ClassId};

/// Read access to the host's loaded-class table.
///
/// Lookup requires the graph to be fully linked before the first call:
/// superclass edges acyclic and interface tables flattened. An id the provider
/// does not know ends that branch of a traversal; it is not an error.
pub trait ClassGraph {
    fn class(&self, id: ClassId) -> Option<&Class>;
}
