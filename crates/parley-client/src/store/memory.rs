use std::cell::RefCell;
use std::collections::HashMap;

use super::{SessionStore, StoreError};

/// Process-local store. Lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear() {
        let store = MemoryStore::new();
        assert_eq!(store.get("thread_id").unwrap(), None);

        store.set("thread_id", "abc").unwrap();
        assert_eq!(store.get("thread_id").unwrap().as_deref(), Some("abc"));

        store.clear("thread_id").unwrap();
        assert_eq!(store.get("thread_id").unwrap(), None);
    }

    #[test]
    fn clearing_missing_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.clear("nothing").is_ok());
    }
}
