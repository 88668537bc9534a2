use super::backend::{Document, DocumentBackend};
use crate::error::Result;
use serde_json::Value;

/// A persistent string-keyed mapping backed by one JSON document.
///
/// The whole document lives in memory; every mutation that changes it is
/// written through to the backend before the call returns. Calls that change
/// nothing (adding an existing key, removing a missing one) do not write.
pub struct KeyValueStore<B: DocumentBackend> {
    backend: B,
    data: Document,
}

impl<B: DocumentBackend> KeyValueStore<B> {
    /// Binds a store to `backend` and loads its current document.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self {
            backend,
            data: Document::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Replaces the in-memory mapping with the stored document (empty if none).
    pub fn load(&mut self) -> Result<()> {
        self.data = self.backend.load_document()?.unwrap_or_default();
        Ok(())
    }

    /// Writes the entire mapping to the backend.
    pub fn save(&self) -> Result<()> {
        self.backend.save_document(&self.data)
    }

    /// Inserts only if `key` is absent. Returns whether the insert happened.
    pub fn add_entry(&mut self, key: &str, value: Value) -> Result<bool> {
        if self.data.contains_key(key) {
            return Ok(false);
        }
        let previous = self.data.clone();
        self.data.insert(key.to_string(), value);
        self.persist(previous)?;
        Ok(true)
    }

    /// Removes `key` if present. Returns whether anything was removed.
    pub fn remove_entry(&mut self, key: &str) -> Result<bool> {
        if !self.data.contains_key(key) {
            return Ok(false);
        }
        let previous = self.data.clone();
        self.data.shift_remove(key);
        self.persist(previous)?;
        Ok(true)
    }

    /// Replaces the value under `key`, or adds it when absent (upsert).
    pub fn update_entry(&mut self, key: &str, value: Value) -> Result<bool> {
        if !self.data.contains_key(key) {
            return self.add_entry(key, value);
        }
        let previous = self.data.clone();
        self.data.insert(key.to_string(), value);
        self.persist(previous)?;
        Ok(true)
    }

    pub fn get_entry(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    pub fn entries(&self) -> &Document {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Saves, or restores `previous` if the save fails so memory never runs
    /// ahead of what is stored.
    fn persist(&mut self, previous: Document) -> Result<()> {
        if let Err(e) = self.save() {
            self.data = previous;
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorklaunchError;
    use crate::store::mem_backend::MemBackend;
    use serde_json::json;

    fn empty_store() -> KeyValueStore<MemBackend> {
        KeyValueStore::open(MemBackend::new()).unwrap()
    }

    #[test]
    fn missing_document_loads_empty() {
        let store = empty_store();
        assert!(store.is_empty());
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn corrupt_document_fails_to_open() {
        let result = KeyValueStore::open(MemBackend::with_raw("{\"a\": "));
        assert!(matches!(
            result,
            Err(WorklaunchError::StorageCorrupt { .. })
        ));
    }

    #[test]
    fn add_entry_inserts_once() {
        let mut store = empty_store();
        assert!(store.add_entry("Setting 1", json!(true)).unwrap());
        assert_eq!(store.get_entry("Setting 1"), Some(&json!(true)));

        // Adding the same key again is a no-op, regardless of value
        assert!(!store.add_entry("Setting 1", json!("value2")).unwrap());
        assert!(!store.add_entry("Setting 1", json!(true)).unwrap());
        assert_eq!(store.get_entry("Setting 1"), Some(&json!(true)));
        assert_eq!(store.backend().save_count(), 1);
    }

    #[test]
    fn remove_entry_reports_whether_removed() {
        let mut store = empty_store();
        assert!(!store.remove_entry("Setting 1").unwrap());

        store.add_entry("Setting 1", json!("value1")).unwrap();
        assert!(store.remove_entry("Setting 1").unwrap());
        assert!(!store.contains_key("Setting 1"));
        assert_eq!(store.backend().save_count(), 2);
    }

    #[test]
    fn update_entry_on_absent_key_behaves_like_add() {
        let mut store = empty_store();
        assert!(store.update_entry("k", json!({"nested": [1, 2]})).unwrap());
        assert_eq!(store.get_entry("k"), Some(&json!({"nested": [1, 2]})));
    }

    #[test]
    fn update_entry_replaces_existing_value() {
        let mut store = empty_store();
        store.update_entry("Setting 1", json!("value1")).unwrap();
        assert!(store.update_entry("Setting 1", json!("value2")).unwrap());
        assert_eq!(store.get_entry("Setting 1"), Some(&json!("value2")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_missing_entry_is_none() {
        let store = empty_store();
        assert!(store.get_entry("NonexistentKey").is_none());
    }

    #[test]
    fn removal_keeps_remaining_order() {
        let mut store = empty_store();
        for key in ["a", "b", "c", "d"] {
            store.add_entry(key, json!(key)).unwrap();
        }
        store.remove_entry("b").unwrap();
        let keys: Vec<&String> = store.keys().collect();
        assert_eq!(keys, vec!["a", "c", "d"]);
    }

    #[test]
    fn reload_yields_saved_mapping() {
        let mut store = empty_store();
        store.add_entry("x", json!([1, "two", null])).unwrap();
        store.add_entry("y", json!({"deep": {"er": true}})).unwrap();
        let before = store.entries().clone();

        let raw = store.backend().raw().unwrap();
        let reopened = KeyValueStore::open(MemBackend::with_raw(raw)).unwrap();
        assert_eq!(reopened.entries(), &before);
    }

    #[test]
    fn write_failure_surfaces_as_error() {
        let mut store = empty_store();
        store.backend().set_simulate_write_error(true);
        let result = store.add_entry("k", json!(1));
        assert!(matches!(result, Err(WorklaunchError::Store(_))));
    }

    #[test]
    fn failed_add_leaves_key_absent() {
        let mut store = empty_store();
        store.add_entry("a", json!(1)).unwrap();
        store.backend().set_simulate_write_error(true);
        assert!(store.add_entry("k", json!(2)).is_err());
        assert!(!store.contains_key("k"));

        store.backend().set_simulate_write_error(false);
        store.add_entry("b", json!(3)).unwrap();
        let raw = store.backend().raw().unwrap();
        let saved = KeyValueStore::open(MemBackend::with_raw(raw)).unwrap();
        let keys: Vec<&String> = saved.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn failed_remove_keeps_entry_in_place() {
        let mut store = empty_store();
        for key in ["a", "b", "c"] {
            store.add_entry(key, json!(key)).unwrap();
        }
        store.backend().set_simulate_write_error(true);
        assert!(store.remove_entry("b").is_err());

        let keys: Vec<&String> = store.keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(store.get_entry("b"), Some(&json!("b")));
    }

    #[test]
    fn failed_update_keeps_old_value() {
        let mut store = empty_store();
        store.update_entry("k", json!("old")).unwrap();
        store.backend().set_simulate_write_error(true);
        assert!(store.update_entry("k", json!("new")).is_err());
        assert_eq!(store.get_entry("k"), Some(&json!("old")));
    }
}
