use serde::{Deserialize, Serialize};

use crate::{ClassId, Field, Method};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassKind {
    Class,
    Interface,
}

/// A loaded, linked class or interface.
///
/// Instances are owned by the host's class table and handed out by reference
/// through [`ClassGraph`](crate::ClassGraph). All member lists preserve
/// declaration order; lookup tie-breaks depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Binary name, e.g. `java.lang.String`.
    pub name: String,
    pub kind: ClassKind,
    /// `None` only at a hierarchy root.
    pub super_class: Option<ClassId>,
    /// Transitive interface table: flattened, de-duplicated, in fixed order.
    /// Built once during linking (see
    /// [`flatten_interfaces`](crate::flatten_interfaces)); traversal iterates it
    /// as-is and never re-derives transitivity.
    pub interfaces: Vec<ClassId>,
    pub instance_fields: Vec<Field>,
    pub static_fields: Vec<Field>,
    /// Overridable instance methods, including runtime-synthesized interface
    /// entries.
    pub virtual_methods: Vec<Method>,
    /// Static methods, private methods, and constructors.
    pub direct_methods: Vec<Method>,
}
