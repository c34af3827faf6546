use serde::{Deserialize, Serialize};

use crate::{AccessFlags, ClassId, MethodId, TypeIndex};

/// How a method is dispatched, and with it which member table it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodKind {
    /// Overridable instance method, dispatched through the vtable.
    Virtual,
    /// Static or private method, dispatched without a vtable.
    Direct,
    /// Instance initializer. Lives in the direct table but is never a candidate
    /// for name-based lookup.
    Constructor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Instance,
    Static,
}

/// A declared method, as recorded in its declaring class's member tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub id: MethodId,
    pub name: String,
    pub declaring_class: ClassId,
    pub kind: MethodKind,
    pub access: AccessFlags,
    /// Raw parameter type references, resolved lazily during signature matching.
    pub params: Vec<TypeIndex>,
    pub return_type: TypeIndex,
}

impl Method {
    pub fn is_constructor(&self) -> bool {
        self.kind == MethodKind::Constructor
    }
}

/// A declared field.
///
/// Fields are matched by name alone; the declared type is carried as a raw
/// reference for callers that need it, and lookup never resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub declaring_class: ClassId,
    pub kind: FieldKind,
    pub access: AccessFlags,
    pub type_index: TypeIndex,
}

/// Name and visibility surface shared by methods and fields, so a single
/// hierarchy walk serves both lookups.
pub trait Member {
    fn name(&self) -> &str;

    fn access(&self) -> AccessFlags;

    fn is_public(&self) -> bool {
        self.access().is_public()
    }
}

impl Member for Method {
    fn name(&self) -> &str {
        &self.name
    }

    fn access(&self) -> AccessFlags {
        self.access
    }
}

impl Member for Field {
    fn name(&self) -> &str {
        &self.name
    }

    fn access(&self) -> AccessFlags {
        self.access
    }
}
