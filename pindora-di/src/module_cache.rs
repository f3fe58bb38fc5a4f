//! Lazily constructed, per-module object cache

use crate::ModuleKey;
use std::{
    any::Any,
    collections::HashMap,
    convert::Infallible,
    fmt::{self, Debug},
    hash::Hash,
    sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, TryLockError}
};

type SharedObject = Arc<
    dyn Any
    + Send
    + Sync
>;

/// Holds the object of one key; write-locked while the object is constructed
type Slot = Arc<RwLock<Option<SharedObject>>>;

/// Caches one object (usually a view-model) per module.
///
/// The first request for a key runs the supplied factory, every following
/// request returns the very same instance until the key is invalidated.
///
/// Every key has its own lock that is held while its object is constructed,
/// so two concurrent requests for the same key never construct twice, while a
/// factory is free to request the objects of other modules. A factory must not
/// request its own key.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use pindora_di::{ModuleCache, ModuleKey};
///
/// struct LoginViewModel { attempts: u32 }
///
/// let cache = ModuleCache::new();
///
/// let first = cache.get_or_create(ModuleKey::Login, || LoginViewModel { attempts: 0 });
/// let second = cache.get_or_create(ModuleKey::Login, || LoginViewModel { attempts: 1 });
///
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(second.attempts, 0);
///
/// cache.invalidate(ModuleKey::Login);
///
/// let third = cache.get_or_create(ModuleKey::Login, || LoginViewModel { attempts: 2 });
/// assert_eq!(third.attempts, 2);
/// ```
pub struct ModuleCache<K = ModuleKey> {
    slots: Mutex<HashMap<K, Slot>>
}

impl<K> Default for ModuleCache<K> {
    #[inline]
    fn default() -> Self {
        Self { slots: Mutex::new(HashMap::new()) }
    }
}

impl<K> Debug for ModuleCache<K>
where
    K: Eq + Hash + Copy + Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleCache")
            .field("keys", &self.keys())
            .finish()
    }
}

impl<K> ModuleCache<K>
where
    K: Eq + Hash + Copy + Debug
{
    /// Creates an empty cache
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the object cached under `key`, or constructs it with `factory`,
    /// caches it and returns it.
    ///
    /// If the object cached under `key` is not a `T`, it's treated as a miss and
    /// replaced by the one `factory` constructs.
    #[inline]
    pub fn get_or_create<T, F>(&self, key: K, factory: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T
    {
        match self.try_get_or_create(key, || Ok::<_, Infallible>(factory())) {
            Ok(object) => object,
            Err(never) => match never {},
        }
    }

    /// Same as [`ModuleCache::get_or_create`] but with a fallible factory.
    ///
    /// If `factory` fails, the error is returned as is and nothing is cached
    /// under `key`.
    pub fn try_get_or_create<T, E, F>(&self, key: K, factory: F) -> Result<Arc<T>, E>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>
    {
        let slot = self.slot_or_insert(key);

        if let Some(object) = downcast::<T>(&slot.read().unwrap_or_else(PoisonError::into_inner)) {
            #[cfg(feature = "tracing")]
            tracing::trace!(?key, "module object cache hit");
            return Ok(object);
        }

        let mut value = slot.write().unwrap_or_else(PoisonError::into_inner);

        // another request may have constructed it while we were waiting
        if let Some(object) = downcast::<T>(&value) {
            #[cfg(feature = "tracing")]
            tracing::trace!(?key, "module object cache hit");
            return Ok(object);
        }

        if value.take().is_some() {
            #[cfg(feature = "tracing")]
            tracing::warn!(?key, expected = std::any::type_name::<T>(), "cached module object has another type, replacing");
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(?key, type_name = std::any::type_name::<T>(), "module object cache miss, constructing");

        match factory() {
            Ok(object) => {
                let object = Arc::new(object);
                let shared: SharedObject = object.clone();
                *value = Some(shared);
                Ok(object)
            },
            Err(err) => {
                drop(value);
                self.discard_empty(key, &slot);
                Err(err)
            }
        }
    }

    /// Returns the object cached under `key` without constructing anything
    pub fn get<T: Send + Sync + 'static>(&self, key: K) -> Option<Arc<T>> {
        let slot = self.slot(key)?;
        match slot.try_read() {
            Ok(value) => downcast::<T>(&value),
            Err(TryLockError::Poisoned(poisoned)) => downcast::<T>(&poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => None,
        }
    }

    /// Returns `true` if an object is cached under `key`
    #[inline]
    pub fn contains(&self, key: K) -> bool {
        self.slot(key).is_some_and(|slot| is_filled(&slot))
    }

    /// Returns the number of cached objects
    #[inline]
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    /// Returns `true` if nothing is cached
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the keys that currently have a cached object
    pub fn keys(&self) -> Vec<K> {
        let slots = self.lock()
            .iter()
            .map(|(key, slot)| (*key, slot.clone()))
            .collect::<Vec<_>>();
        slots
            .into_iter()
            .filter(|(_, slot)| is_filled(slot))
            .map(|(key, _)| key)
            .collect()
    }

    /// Drops the object cached under `key`.
    ///
    /// Returns `false` if there was nothing to drop.
    pub fn invalidate(&self, key: K) -> bool {
        let slot = self.lock().remove(&key);
        let removed = slot.is_some_and(|slot| is_filled(&slot));

        #[cfg(feature = "tracing")]
        {
            if removed {
                tracing::debug!(?key, "module object invalidated");
            }
        }

        removed
    }

    /// Drops every cached object whose key matches `predicate`.
    ///
    /// Returns the number of dropped objects.
    pub fn invalidate_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(K) -> bool
    {
        let slots = {
            let mut slots = self.lock();
            let keys = slots.keys()
                .copied()
                .filter(|key| predicate(*key))
                .collect::<Vec<_>>();
            keys.into_iter()
                .filter_map(|key| slots.remove(&key))
                .collect::<Vec<_>>()
        };
        let removed = slots.iter().filter(|slot| is_filled(slot)).count();

        #[cfg(feature = "tracing")]
        {
            if removed > 0 {
                tracing::debug!(removed, "module objects invalidated");
            }
        }

        removed
    }

    /// Drops every cached object
    pub fn invalidate_all(&self) {
        let slots = std::mem::take(&mut *self.lock());

        #[cfg(feature = "tracing")]
        tracing::debug!(removed = slots.values().filter(|slot| is_filled(slot)).count(), "module object cache cleared");

        drop(slots);
    }

    #[inline]
    fn slot(&self, key: K) -> Option<Slot> {
        self.lock().get(&key).cloned()
    }

    #[inline]
    fn slot_or_insert(&self, key: K) -> Slot {
        self.lock()
            .entry(key)
            .or_default()
            .clone()
    }

    /// Removes the slot of a failed construction, unless the key has been
    /// invalidated or another request is constructing it already.
    fn discard_empty(&self, key: K, slot: &Slot) {
        let mut slots = self.lock();
        if slots.get(&key).is_some_and(|current| Arc::ptr_eq(current, slot)) && is_empty_slot(slot) {
            slots.remove(&key);
        }
    }

    /// The map lock is never held while waiting for a slot lock,
    /// only `try_` locks are taken on slots under it.
    #[inline]
    fn lock(&self) -> MutexGuard<'_, HashMap<K, Slot>> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[inline]
fn downcast<T: Send + Sync + 'static>(value: &Option<SharedObject>) -> Option<Arc<T>> {
    value
        .as_ref()
        .and_then(|cached| cached.clone().downcast::<T>().ok())
}

/// A slot under construction counts as empty
fn is_filled(slot: &Slot) -> bool {
    match slot.try_read() {
        Ok(value) => value.is_some(),
        Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().is_some(),
        Err(TryLockError::WouldBlock) => false,
    }
}

/// A slot under construction doesn't count as empty
fn is_empty_slot(slot: &Slot) -> bool {
    match slot.try_read() {
        Ok(value) => value.is_none(),
        Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().is_none(),
        Err(TryLockError::WouldBlock) => false,
    }
}
