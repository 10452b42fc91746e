//! Single-slot memo cells
//!
//! A [`Memo`] keeps the last computed value behind an `Arc` together with
//! the key it was computed from. Asking again with an equal key returns a
//! clone of the same `Arc`; a different key recomputes. Components hold one
//! cell per sub-style so that changing one input only recomputes the layers
//! that depend on it.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use tracing::trace;

/// Compares an `Arc` by address, for use inside memo keys
pub struct ByPtr<T: ?Sized>(pub Arc<T>);

impl<T: ?Sized> ByPtr<T> {
    pub fn new(value: &Arc<T>) -> Self {
        Self(Arc::clone(value))
    }
}

impl<T: ?Sized> Clone for ByPtr<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for ByPtr<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Eq for ByPtr<T> {}

impl<T: ?Sized> Deref for ByPtr<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> fmt::Debug for ByPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByPtr({:p})", Arc::as_ptr(&self.0))
    }
}

/// Memoized value keyed on its own inputs
pub struct Memo<K, V> {
    name: &'static str,
    slot: Option<(K, Arc<V>)>,
}

impl<K: PartialEq, V> Memo<K, V> {
    /// Create an empty cell; `name` only shows up in trace logs
    pub fn new(name: &'static str) -> Self {
        Self { name, slot: None }
    }

    /// Return the cached value for `key`, computing it if the key changed
    pub fn get_or_init(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> Arc<V> {
        match self.get_or_try_init(key, |key| Ok::<V, std::convert::Infallible>(compute(key))) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Fallible variant of [`Memo::get_or_init`]
    ///
    /// On error the previous value is dropped, so a later call with the same
    /// key retries the computation instead of serving a stale result.
    pub fn get_or_try_init<E>(
        &mut self,
        key: K,
        compute: impl FnOnce(&K) -> Result<V, E>,
    ) -> Result<Arc<V>, E> {
        if let Some((cached_key, value)) = &self.slot {
            if *cached_key == key {
                return Ok(Arc::clone(value));
            }
        }

        trace!("Memo `{}` recomputing", self.name);
        self.slot = None;
        let value = Arc::new(compute(&key)?);
        self.slot = Some((key, Arc::clone(&value)));
        Ok(value)
    }

    /// Last computed value, if any
    pub fn get(&self) -> Option<&Arc<V>> {
        self.slot.as_ref().map(|(_, value)| value)
    }
}

impl<K, V> fmt::Debug for Memo<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("name", &self.name)
            .field("cached", &self.slot.is_some())
            .finish()
    }
}
