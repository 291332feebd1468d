//! The process-wide registry of injectable values.
//!
//! There is exactly one store per process. It starts empty, grows through
//! [`Registry::set`], and is emptied as a whole through [`Registry::clear`];
//! single entries are never removed. A single reader-writer lock guards the
//! whole map, so every operation is atomic to all observers and the last
//! writer under the lock's order wins.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::types::{downcast, Value};

lazy_static! {
    static ref STORE: RwLock<HashMap<String, Value>> = RwLock::new(HashMap::new());
}

/// Handle to the global store.
///
/// `Registry` has no values; it only namespaces the associated functions.
/// Asking for an instance through [`Registry::new`] always fails.
#[derive(Debug)]
pub enum Registry {}

impl Registry {
    /// Always fails with [`Error::Instantiation`].
    pub fn new() -> Result<Registry> {
        warn!("attempted to instantiate the global registry");
        Err(Error::Instantiation)
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(key: impl Into<String>, value: Value) {
        let key = key.into();
        debug!(key = %key, "registry set");
        // the replaced value drops after the guard; its Drop may use the registry
        let replaced = STORE.write().insert(key, value);
        drop(replaced);
    }

    /// Store a concrete value under `key`.
    pub fn register<T: Any + Send + Sync>(key: impl Into<String>, value: T) {
        Self::set(key, Arc::new(value));
    }

    /// The value currently stored under `key`, if any.
    pub fn get(key: &str) -> Option<Value> {
        let found = STORE.read().get(key).cloned();
        trace!(key, found = found.is_some(), "registry get");
        found
    }

    /// Typed read. `None` if `key` is absent or holds another type.
    pub fn get_as<T: Any + Send + Sync>(key: &str) -> Option<Arc<T>> {
        Self::get(key).and_then(downcast::<T>)
    }

    pub fn has(key: &str) -> bool {
        STORE.read().contains_key(key)
    }

    /// Remove every entry.
    ///
    /// Removed values are dropped once the lock is released.
    pub fn clear() {
        let removed = std::mem::take(&mut *STORE.write());
        debug!(entries = removed.len(), "registry clear");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::value;
    use serial_test::serial;

    #[test]
    fn test_cannot_instantiate() {
        assert_eq!(Registry::new().unwrap_err(), Error::Instantiation);
        assert_eq!(
            Registry::new().unwrap_err().to_string(),
            "cannot instantiate Registry"
        );
    }

    #[test]
    #[serial]
    fn test_set_overwrites() {
        Registry::clear();
        Registry::register("thing", 1u32);
        Registry::register("thing", 2u32);
        assert_eq!(Registry::get_as::<u32>("thing").as_deref(), Some(&2));
    }

    #[test]
    #[serial]
    fn test_get_as_wrong_type() {
        Registry::clear();
        Registry::register("thing", "text");
        assert!(Registry::get_as::<u32>("thing").is_none());
        assert!(Registry::get("thing").is_some());
    }

    #[test]
    #[serial]
    fn test_get_returns_same_handle() {
        Registry::clear();
        let shared = value(vec![1, 2, 3]);
        Registry::set("list", shared.clone());
        let fetched = Registry::get("list").unwrap();
        assert!(Arc::ptr_eq(&shared, &fetched));
    }

    #[test]
    #[serial]
    fn test_clear_is_idempotent() {
        Registry::clear();
        Registry::clear();
        assert!(!Registry::has("thing"));
        assert!(Registry::get("thing").is_none());
    }
}
