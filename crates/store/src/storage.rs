//! The key-value storage abstraction.
//!
//! [`Storage`] mirrors the browser local storage surface: string keys,
//! string values, synchronous reads and writes. Everything above this layer
//! encodes its state into strings.

use std::collections::BTreeMap;

use crate::error::Result;

/// A synchronous string key-value store.
///
/// Reads take `&self`; writes take `&mut self` and are durable once they
/// return `Ok`.
pub trait Storage {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// An in-memory [`Storage`], lost when dropped.
///
/// Counts write operations so callers can check that a no-op really did
/// not touch storage.
///
/// # Examples
///
/// ```
/// use taskboard_store::{MemoryStorage, Storage};
///
/// # fn main() -> taskboard_store::Result<()> {
/// let mut storage = MemoryStorage::new();
/// storage.set_item("greeting", "hello")?;
/// assert_eq!(storage.get_item("greeting")?.as_deref(), Some("hello"));
/// assert_eq!(storage.write_count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with `items`.
    ///
    /// Pre-populated items do not count as writes.
    #[must_use]
    pub fn with_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: items
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            writes: 0,
        }
    }

    /// Returns the number of `set_item`/`remove_item` calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.writes += 1;
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.writes += 1;
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_key_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("nope").unwrap(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut storage = MemoryStorage::new();
        storage.set_item("k", "one").unwrap();
        storage.set_item("k", "two").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn remove_absent_key_is_ok() {
        let mut storage = MemoryStorage::with_items([("a", "1")]);
        storage.remove_item("b").unwrap();
        storage.remove_item("a").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn boxed_storage_delegates() {
        let mut storage: Box<dyn Storage> = Box::new(MemoryStorage::new());
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
    }
}
