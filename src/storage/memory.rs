//! In-memory storage, shared between clones like a browser's local storage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{KeyValueStore, Result};

/// Key-value storage held in memory.
///
/// Clones share the same underlying map, so one handle can be given to the
/// persistence layer while another inspects or seeds the contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-seeded with one value.
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_contents() {
        let reader = MemoryStorage::new();
        let mut writer = reader.clone();

        writer.set_item("k", "v").unwrap();

        assert_eq!(reader.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn seeded_value_is_readable() {
        let storage = MemoryStorage::with_item("k", "v");

        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
        assert_eq!(storage.get_item("other").unwrap(), None);
    }
}
