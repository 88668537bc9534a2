use super::backend::{Document, DocumentBackend};
use super::kv_store::KeyValueStore;
use crate::error::{Result, WorklaunchError};
use serde::Serialize;
use serde_json::Value;

/// Flat named settings. Which names mean something is up to the service layer.
pub struct SettingsStore<B: DocumentBackend> {
    kv: KeyValueStore<B>,
}

impl<B: DocumentBackend> SettingsStore<B> {
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self {
            kv: KeyValueStore::open(backend)?,
        })
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.kv.get_entry(name)
    }

    /// Upserts `value` under `name`.
    pub fn set<T: Serialize>(&mut self, name: &str, value: T) -> Result<()> {
        let value = serde_json::to_value(value).map_err(WorklaunchError::Serialization)?;
        self.kv.update_entry(name, value)?;
        Ok(())
    }

    pub fn entries(&self) -> &Document {
        self.kv.entries()
    }

    pub fn kv(&self) -> &KeyValueStore<B> {
        &self.kv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use serde_json::json;

    #[test]
    fn set_then_get() {
        let mut store = SettingsStore::open(MemBackend::new()).unwrap();
        assert!(store.get("appearance_mode").is_none());

        store.set("appearance_mode", "Light").unwrap();
        assert_eq!(store.get("appearance_mode"), Some(&json!("Light")));

        store.set("appearance_mode", "System").unwrap();
        assert_eq!(store.get("appearance_mode"), Some(&json!("System")));
        assert_eq!(store.entries().len(), 1);
    }

    #[test]
    fn none_is_stored_as_null() {
        let mut store = SettingsStore::open(MemBackend::new()).unwrap();
        store.set("current_profile_id", None::<String>).unwrap();
        assert_eq!(store.get("current_profile_id"), Some(&Value::Null));
    }

    #[test]
    fn unknown_settings_survive() {
        let backend = MemBackend::with_raw(r#"{"window_width": 800}"#);
        let mut store = SettingsStore::open(backend).unwrap();
        store.set("appearance_mode", "Dark").unwrap();
        assert_eq!(store.get("window_width"), Some(&json!(800)));
    }
}
