#![forbid(unsafe_code)]

//! Loaded-class metadata for reflective member lookup.
//!
//! The model mirrors what a runtime keeps for a linked class: kind-tagged member
//! tables in declaration order, a superclass edge, and a pre-flattened transitive
//! interface table. Hosts hand the graph to the lookup crate through [`ClassGraph`]
//! and resolve raw parameter type references through [`TypeResolver`]; the
//! in-memory [`ClassStore`] covers hosts without a class table of their own.

mod class;
mod flags;
mod flatten;
mod graph;
mod ids;
mod member;
mod store;
mod types;

pub use class::{Class, ClassKind};
pub use flags::AccessFlags;
pub use flatten::flatten_interfaces;
pub use graph::ClassGraph;
pub use ids::{ClassId, MethodId, TypeIndex};
pub use member::{Field, FieldKind, Member, Method, MethodKind};
pub use store::ClassStore;
pub use types::{CachedTypeResolver, ErrorState, ResolutionFault, TypeResolver};
