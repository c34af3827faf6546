use serde::{Deserialize, Serialize};

/// Access and runtime flags attached to a class member.
///
/// The low 16 bits mirror the classfile-visible access flags. Higher bits are
/// assigned by the runtime during linking and never appear in a classfile. Only
/// the bits member lookup consults are named here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessFlags(pub u32);

impl AccessFlags {
    /// Declared `public`.
    pub const PUBLIC: AccessFlags = AccessFlags(0x0001);
    /// Compiler-generated member with no counterpart in source (e.g. a bridge
    /// or a lambda body).
    pub const SYNTHETIC: AccessFlags = AccessFlags(0x1000);
    /// Runtime-synthesized entry standing in for an interface method the class
    /// never declared a body for.
    pub const MIRANDA: AccessFlags = AccessFlags(0x0020_0000);

    pub const fn empty() -> AccessFlags {
        AccessFlags(0)
    }

    pub const fn contains(self, other: AccessFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_public(self) -> bool {
        self.contains(AccessFlags::PUBLIC)
    }

    pub const fn is_synthetic(self) -> bool {
        self.contains(AccessFlags::SYNTHETIC)
    }

    pub const fn is_miranda(self) -> bool {
        self.contains(AccessFlags::MIRANDA)
    }
}

impl std::ops::BitOr for AccessFlags {
    type Output = AccessFlags;

    fn bitor(self, rhs: AccessFlags) -> AccessFlags {
        AccessFlags(self.0 | rhs.0)
    }
}
