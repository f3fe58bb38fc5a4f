//! Dependency registry and tools

use crate::{Inject, error::Error};
use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    fmt::Debug,
    hash::{BuildHasherDefault, Hasher},
    sync::Arc
};

pub use from_registry::FromRegistry;

pub mod from_registry;

/// Type-erased `Arc<T>` as it is kept by the registry
type ErasedArc = Box<
    dyn Any
    + Send
    + Sync
>;

/// A registered instance together with the name of the type it was registered for
struct Entry {
    type_name: &'static str,
    instance: ErasedArc,
}

impl Debug for Entry {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entry({})", self.type_name)
    }
}

impl Entry {
    #[inline]
    fn new<T: ?Sized + Send + Sync + 'static>(instance: Arc<T>) -> Self {
        Self {
            type_name: type_name::<T>(),
            instance: Box::new(instance),
        }
    }

    #[inline]
    fn downcast<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>, Error> {
        self.instance
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or(Error::ResolveFailed(type_name::<T>()))
    }
}

/// Inner HashMap of registered instances
type EntryMap = HashMap<
    TypeId,
    Entry,
    BuildHasherDefault<TypeIdHasher>
>;

#[derive(Default)]
struct TypeIdHasher(u64);

impl Hasher for TypeIdHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    #[cold]
    fn write(&mut self, _: &[u8]) {
        unreachable!("TypeId calls write_u64");
    }

    #[inline]
    fn write_u64(&mut self, id: u64) {
        self.0 = id;
    }
}

/// Collects registrations while the application bootstraps.
///
/// Once every abstract type is bound, call [`RegistryBuilder::build`] to get a
/// read-only [`Registry`] that the rest of the application resolves from.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: EntryMap
}

impl RegistryBuilder {
    /// Creates an empty registry builder
    #[inline]
    pub fn new() -> Self {
        Self { entries: EntryMap::default() }
    }

    /// Freezes the registrations into a [`Registry`]
    #[inline]
    pub fn build(self) -> Registry {
        #[cfg(feature = "tracing")]
        tracing::debug!(count = self.entries.len(), "dependency registry built");

        Registry {
            entries: Arc::new(self.entries),
        }
    }

    /// Binds `T` to a shared instance.
    ///
    /// `T` is usually a trait object, so consumers depend on the capability
    /// rather than on the concrete type behind it. Registering the same `T`
    /// again replaces the previous instance.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use pindora_di::RegistryBuilder;
    ///
    /// trait AuthService: Send + Sync {
    ///     fn is_signed_in(&self) -> bool;
    /// }
    ///
    /// struct KakaoAuth;
    ///
    /// impl AuthService for KakaoAuth {
    ///     fn is_signed_in(&self) -> bool { false }
    /// }
    ///
    /// let mut registry = RegistryBuilder::new();
    /// registry.register::<dyn AuthService>(Arc::new(KakaoAuth));
    ///
    /// let registry = registry.build();
    /// let auth = registry.resolve::<dyn AuthService>();
    ///
    /// assert!(!auth.is_signed_in());
    /// ```
    pub fn register<T: ?Sized + Send + Sync + 'static>(&mut self, instance: Arc<T>) {
        let _replaced = self.entries.insert(TypeId::of::<T>(), Entry::new(instance));

        #[cfg(feature = "tracing")]
        {
            if _replaced.is_some() {
                tracing::debug!(type_name = type_name::<T>(), "dependency re-registered, previous instance replaced");
            } else {
                tracing::debug!(type_name = type_name::<T>(), "dependency registered");
            }
        }
    }

    /// Binds a concrete type `T` to `instance`
    #[inline]
    pub fn register_instance<T: Send + Sync + 'static>(&mut self, instance: T) {
        self.register(Arc::new(instance));
    }

    /// Returns `true` if something is bound to `T`
    #[inline]
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Returns the number of bound types
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is bound yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A read-only registry that resolves shared instances by type.
///
/// Cloning is cheap, all clones share the same instances.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Read-only HashMap of registered instances
    entries: Arc<EntryMap>
}

impl Registry {
    /// Resolves the instance bound to `T`.
    ///
    /// The returned [`Arc`] points to the very instance that was registered,
    /// the registry keeps its own reference.
    ///
    /// # Panics
    /// If nothing is bound to `T`. A missing binding means the composition root
    /// is incomplete, so the process stops right here with the name of the type.
    /// Use [`Registry::try_resolve`] to handle it instead.
    #[inline]
    #[track_caller]
    pub fn resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Arc<T> {
        match self.try_resolve::<T>() {
            Ok(instance) => instance,
            Err(err) => fail_fast(err),
        }
    }

    /// Resolves the instance bound to `T` or returns an error if there is none
    #[inline]
    pub fn try_resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>, Error> {
        self.entries
            .get(&TypeId::of::<T>())
            .ok_or(Error::NotRegistered(type_name::<T>()))
            .and_then(Entry::downcast::<T>)
    }

    /// Constructs `T` from the registered collaborators.
    ///
    /// # Panics
    /// If any collaborator `T` asks for is not registered.
    #[inline]
    #[track_caller]
    pub fn inject<T: Inject>(&self) -> T {
        match T::inject(self) {
            Ok(value) => value,
            Err(err) => fail_fast(err),
        }
    }

    /// Constructs `T` from the registered collaborators or returns an error
    #[inline]
    pub fn try_inject<T: Inject>(&self) -> Result<T, Error> {
        T::inject(self)
    }

    /// Returns `true` if something is bound to `T`
    #[inline]
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Returns the number of bound types
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is bound
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the names of the bound types
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().map(|entry| entry.type_name)
    }
}

#[cold]
#[track_caller]
fn fail_fast(err: Error) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(%err, "unable to resolve a dependency");

    panic!("{err}")
}
