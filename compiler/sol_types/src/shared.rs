//! Thread-safe handle to a type registry.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::TypeRegistry;

/// A type registry shared between analysis threads.
///
/// Clones share one registry, so every clone observes the same canonical
/// instances. Construction takes the write lock; the registry's
/// deduplication therefore holds across threads.
#[derive(Clone, Default)]
pub struct SharedTypeRegistry(Arc<RwLock<TypeRegistry>>);

impl SharedTypeRegistry {
    /// Create a new shared registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing registry.
    pub fn from_registry(registry: TypeRegistry) -> Self {
        SharedTypeRegistry(Arc::new(RwLock::new(registry)))
    }

    /// Acquire shared access.
    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.0.read()
    }

    /// Acquire exclusive access for construction.
    pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.0.write()
    }

    /// Run `f` with shared access.
    pub fn with<R>(&self, f: impl FnOnce(&TypeRegistry) -> R) -> R {
        f(&self.0.read())
    }

    /// Run `f` with exclusive access.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut TypeRegistry) -> R) -> R {
        f(&mut self.0.write())
    }
}

impl fmt::Debug for SharedTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.0.read().len();
        f.debug_struct("SharedTypeRegistry").field("len", &len).finish()
    }
}
