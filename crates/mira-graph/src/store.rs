use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Class, ClassGraph, ClassId, MethodId};

/// In-memory class table.
///
/// Interning a name is idempotent and allocates the id eagerly so classes can
/// reference each other before their metadata exists; defining attaches the
/// metadata. Hosts with a class table of their own implement
/// [`ClassGraph`] directly instead.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ClassStore {
    names: HashMap<String, ClassId>,
    classes: Vec<Option<Class>>,
    next_method: u32,
}

impl ClassStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate (or look up) the id for `name` without defining the class.
    pub fn intern_class_id(&mut self, name: &str) -> ClassId {
        if let Some(&id) = self.names.get(name) {
            return id;
        }
        let id = ClassId(self.classes.len() as u32);
        self.names.insert(name.to_string(), id);
        self.classes.push(None);
        id
    }

    /// Attach metadata to a previously interned id, replacing any earlier
    /// definition.
    pub fn define_class(&mut self, id: ClassId, class: Class) {
        debug_assert!(
            (id.0 as usize) < self.classes.len(),
            "define_class with an id this store never interned"
        );
        if let Some(slot) = self.classes.get_mut(id.0 as usize) {
            *slot = Some(class);
        }
    }

    pub fn class_id(&self, name: &str) -> Option<ClassId> {
        self.names.get(name).copied()
    }

    /// Allocate a fresh graph-unique method id.
    pub fn alloc_method_id(&mut self) -> MethodId {
        let id = MethodId(self.next_method);
        self.next_method += 1;
        id
    }
}

impl ClassGraph for ClassStore {
    fn class(&self, id: ClassId) -> Option<&Class> {
        self.classes.get(id.0 as usize)?.as_ref()
    }
}
