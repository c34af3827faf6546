//! Shared graph fixtures and stub collaborators for the lookup test suites.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use mira_graph::{
    flatten_interfaces, AccessFlags, Class, ClassGraph, ClassId, ClassKind, ClassStore, ErrorState,
    Field, FieldKind, Method, MethodId, MethodKind, ResolutionFault, TypeIndex, TypeResolver,
};

/// Builds linked class graphs without hand-maintaining interface tables, method
/// ids, or declaring-class back references.
///
/// Definition order matters the way linking order does: a superclass and every
/// direct interface must be defined before the classes that use them, so their
/// interface tables can be flattened into the new class.
#[derive(Default)]
pub struct GraphFixture {
    store: ClassStore,
}

impl GraphFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `name` ahead of definition so classes can reference it early.
    pub fn declare(&mut self, name: &str) -> ClassId {
        self.store.intern_class_id(name)
    }

    pub fn define(&mut self, spec: ClassSpec) -> ClassId {
        let id = self.store.intern_class_id(&spec.name);
        let interfaces = flatten_interfaces(&self.store, spec.super_class, &spec.direct_interfaces);

        let mut virtual_methods = Vec::new();
        let mut direct_methods = Vec::new();
        for method in spec.methods {
            let method = Method {
                id: self.store.alloc_method_id(),
                name: method.name,
                declaring_class: id,
                kind: method.kind,
                access: method.access,
                params: method.params,
                // Return types are raw references too; the fixture leaves them
                // at index zero because lookup never reads them.
                return_type: TypeIndex(0),
            };
            match method.kind {
                MethodKind::Virtual => virtual_methods.push(method),
                MethodKind::Direct | MethodKind::Constructor => direct_methods.push(method),
            }
        }

        let field = |spec: FieldSpec, kind: FieldKind| Field {
            name: spec.name,
            declaring_class: id,
            kind,
            access: spec.access,
            type_index: spec.type_index,
        };
        let instance_fields = spec
            .instance_fields
            .into_iter()
            .map(|spec| field(spec, FieldKind::Instance))
            .collect();
        let static_fields = spec
            .static_fields
            .into_iter()
            .map(|spec| field(spec, FieldKind::Static))
            .collect();

        self.store.define_class(
            id,
            Class {
                name: spec.name,
                kind: spec.kind,
                super_class: spec.super_class,
                interfaces,
                instance_fields,
                static_fields,
                virtual_methods,
                direct_methods,
            },
        );
        id
    }

    pub fn store(&self) -> &ClassStore {
        &self.store
    }

    pub fn graph(&self) -> &dyn ClassGraph {
        &self.store
    }
}

/// One class definition, built up fluently and handed to
/// [`GraphFixture::define`].
pub struct ClassSpec {
    name: String,
    kind: ClassKind,
    super_class: Option<ClassId>,
    direct_interfaces: Vec<ClassId>,
    instance_fields: Vec<FieldSpec>,
    static_fields: Vec<FieldSpec>,
    methods: Vec<MethodSpec>,
}

struct FieldSpec {
    name: String,
    access: AccessFlags,
    type_index: TypeIndex,
}

struct MethodSpec {
    name: String,
    kind: MethodKind,
    access: AccessFlags,
    params: Vec<TypeIndex>,
}

impl ClassSpec {
    pub fn class(name: &str) -> Self {
        Self::new(name, ClassKind::Class)
    }

    pub fn interface(name: &str) -> Self {
        Self::new(name, ClassKind::Interface)
    }

    fn new(name: &str, kind: ClassKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            super_class: None,
            direct_interfaces: Vec::new(),
            instance_fields: Vec::new(),
            static_fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn extends(mut self, super_class: ClassId) -> Self {
        self.super_class = Some(super_class);
        self
    }

    #[must_use]
    pub fn implements(mut self, interfaces: impl IntoIterator<Item = ClassId>) -> Self {
        self.direct_interfaces.extend(interfaces);
        self
    }

    #[must_use]
    pub fn instance_field(mut self, name: &str, access: AccessFlags, type_index: TypeIndex) -> Self {
        self.instance_fields.push(FieldSpec {
            name: name.to_string(),
            access,
            type_index,
        });
        self
    }

    #[must_use]
    pub fn static_field(mut self, name: &str, access: AccessFlags, type_index: TypeIndex) -> Self {
        self.static_fields.push(FieldSpec {
            name: name.to_string(),
            access,
            type_index,
        });
        self
    }

    #[must_use]
    pub fn virtual_method(
        self,
        name: &str,
        access: AccessFlags,
        params: impl IntoIterator<Item = TypeIndex>,
    ) -> Self {
        self.push_method(name, MethodKind::Virtual, access, params)
    }

    #[must_use]
    pub fn direct_method(
        self,
        name: &str,
        access: AccessFlags,
        params: impl IntoIterator<Item = TypeIndex>,
    ) -> Self {
        self.push_method(name, MethodKind::Direct, access, params)
    }

    #[must_use]
    pub fn constructor(
        self,
        access: AccessFlags,
        params: impl IntoIterator<Item = TypeIndex>,
    ) -> Self {
        self.push_method("<init>", MethodKind::Constructor, access, params)
    }

    fn push_method(
        mut self,
        name: &str,
        kind: MethodKind,
        access: AccessFlags,
        params: impl IntoIterator<Item = TypeIndex>,
    ) -> Self {
        self.methods.push(MethodSpec {
            name: name.to_string(),
            kind,
            access,
            params: params.into_iter().collect(),
        });
        self
    }
}

/// Map-backed type resolver: an index resolves to the same class in every
/// method context, and an unmapped index faults.
#[derive(Default)]
pub struct TableTypes {
    entries: HashMap<TypeIndex, ClassId>,
}

impl TableTypes {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, index: TypeIndex, class: ClassId) -> Self {
        self.entries.insert(index, class);
        self
    }
}

impl TypeResolver for TableTypes {
    fn resolve_type(
        &self,
        index: TypeIndex,
        context: MethodId,
    ) -> Result<ClassId, ResolutionFault> {
        self.entries
            .get(&index)
            .copied()
            .ok_or(ResolutionFault { index, context })
    }
}

/// Resolver that faults for configured indices, recording the failure on a
/// shared [`PendingFlag`] the way a runtime records a pending exception before
/// unwinding.
pub struct FaultyTypes<'a> {
    inner: TableTypes,
    failing: Vec<TypeIndex>,
    pending: &'a PendingFlag,
}

impl<'a> FaultyTypes<'a> {
    pub fn new(
        inner: TableTypes,
        failing: impl IntoIterator<Item = TypeIndex>,
        pending: &'a PendingFlag,
    ) -> Self {
        Self {
            inner,
            failing: failing.into_iter().collect(),
            pending,
        }
    }
}

impl TypeResolver for FaultyTypes<'_> {
    fn resolve_type(
        &self,
        index: TypeIndex,
        context: MethodId,
    ) -> Result<ClassId, ResolutionFault> {
        if self.failing.contains(&index) {
            self.pending.raise();
            return Err(ResolutionFault { index, context });
        }
        self.inner.resolve_type(index, context)
    }
}

/// [`ErrorState`] backed by an atomic flag.
#[derive(Default)]
pub struct PendingFlag(AtomicBool);

impl PendingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl ErrorState for PendingFlag {
    fn has_pending_fault(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Counts how many resolutions reach the wrapped resolver, for cache and
/// laziness assertions.
pub struct CountingTypes<'a> {
    inner: &'a dyn TypeResolver,
    calls: AtomicUsize,
}

impl<'a> CountingTypes<'a> {
    pub fn new(inner: &'a dyn TypeResolver) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TypeResolver for CountingTypes<'_> {
    fn resolve_type(
        &self,
        index: TypeIndex,
        context: MethodId,
    ) -> Result<ClassId, ResolutionFault> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve_type(index, context)
    }
}
