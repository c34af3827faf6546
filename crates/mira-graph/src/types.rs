use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

use crate::{ClassId, MethodId, TypeIndex};

/// Failure to resolve a raw type reference.
///
/// A fault is a real error: lookup never treats it as "no match" and never
/// retries the index. A resolver must have recorded the failure with its host
/// before returning one (see [`ErrorState`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to resolve {index:?} in the context of {context:?}")]
pub struct ResolutionFault {
    pub index: TypeIndex,
    pub context: MethodId,
}

/// Resolves raw type references on demand.
///
/// Resolution is idempotent: the same `(index, context)` pair always yields the
/// same class. [`CachedTypeResolver`] relies on that.
pub trait TypeResolver {
    fn resolve_type(&self, index: TypeIndex, context: MethodId)
        -> Result<ClassId, ResolutionFault>;
}

/// Host-side record of whether a resolution failure is already pending.
///
/// Consulted only by debug assertions on fault paths; lookup never reads it to
/// make decisions.
pub trait ErrorState {
    fn has_pending_fault(&self) -> bool;
}

/// Memoizing wrapper around a [`TypeResolver`].
///
/// Successful resolutions are cached per `(method, index)`. Faults are not, so
/// a failed index is re-attempted on the next lookup.
pub struct CachedTypeResolver<'a> {
    inner: &'a dyn TypeResolver,
    cache: Mutex<HashMap<(MethodId, TypeIndex), ClassId>>,
}

impl<'a> CachedTypeResolver<'a> {
    pub fn new(inner: &'a dyn TypeResolver) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }
}

impl TypeResolver for CachedTypeResolver<'_> {
    fn resolve_type(
        &self,
        index: TypeIndex,
        context: MethodId,
    ) -> Result<ClassId, ResolutionFault> {
        {
            let cache = self.cache.lock().unwrap_or_else(|err| err.into_inner());
            if let Some(&id) = cache.get(&(context, index)) {
                return Ok(id);
            }
        }

        // Resolve without holding the lock; idempotence makes a racing double
        // resolve harmless.
        let id = self.inner.resolve_type(index, context)?;

        let mut cache = self.cache.lock().unwrap_or_else(|err| err.into_inner());
        cache.insert((context, index), id);
        Ok(id)
    }
}
