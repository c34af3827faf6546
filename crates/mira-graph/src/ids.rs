use serde::{Deserialize, Serialize};

/// Identity handle for a loaded class or interface.
///
/// A `ClassId` indexes the host's class table. Resolved-type equality is id
/// equality: two parameter types match exactly when their ids are equal, with no
/// name comparison involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassId(pub u32);

/// Graph-unique handle for a declared method.
///
/// Raw type references mean nothing on their own; the declaring method is the
/// context a [`TypeResolver`](crate::TypeResolver) resolves them in, and the key
/// the resolution cache is scoped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodId(pub u32);

/// Raw type reference as it appears in a class's constant tables, before
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeIndex(pub u16);
