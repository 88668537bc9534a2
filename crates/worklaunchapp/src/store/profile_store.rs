use super::backend::DocumentBackend;
use super::kv_store::KeyValueStore;
use crate::error::{Result, WorklaunchError};
use crate::model::{Profile, ProfileRecord};
use serde::Deserialize;
use serde_json::Value;

/// Profiles keyed by id, each stored as `{"name": ..., "paths": [...]}`.
///
/// No name-uniqueness rules live here; the service layer owns those.
pub struct ProfileStore<B: DocumentBackend> {
    kv: KeyValueStore<B>,
}

impl<B: DocumentBackend> ProfileStore<B> {
    /// Loads the document and checks every entry has the profile shape.
    pub fn open(backend: B) -> Result<Self> {
        let kv = KeyValueStore::open(backend)?;
        let store = Self { kv };
        for id in store.kv.keys() {
            store.record(id)?;
        }
        Ok(store)
    }

    pub fn add_profile(&mut self, id: &str, name: &str) -> Result<bool> {
        let added = self.kv.add_entry(id, to_value(&ProfileRecord::new(name))?)?;
        if added {
            log::info!("Added profile '{}' ({})", name, id);
        }
        Ok(added)
    }

    pub fn remove_profile(&mut self, id: &str) -> Result<bool> {
        let removed = self.kv.remove_entry(id)?;
        if removed {
            log::info!("Removed profile {}", id);
        }
        Ok(removed)
    }

    /// Appends `path` unless it is already present. False for an unknown id.
    pub fn add_path_to_profile(&mut self, id: &str, path: &str) -> Result<bool> {
        let Some(mut record) = self.record(id)? else {
            return Ok(false);
        };
        if record.paths.iter().any(|p| p == path) {
            return Ok(false);
        }
        record.paths.push(path.to_string());
        self.put(id, &record)?;
        log::info!("Added path {} to profile '{}'", path, record.name);
        Ok(true)
    }

    /// Removes `path` if present. False for an unknown id or absent path.
    pub fn remove_path_from_profile(&mut self, id: &str, path: &str) -> Result<bool> {
        let Some(mut record) = self.record(id)? else {
            return Ok(false);
        };
        let before = record.paths.len();
        record.paths.retain(|p| p != path);
        if record.paths.len() == before {
            return Ok(false);
        }
        self.put(id, &record)?;
        log::info!("Removed path {} from profile '{}'", path, record.name);
        Ok(true)
    }

    pub fn rename_profile(&mut self, id: &str, new_name: &str) -> Result<bool> {
        let Some(mut record) = self.record(id)? else {
            return Ok(false);
        };
        let old_name = std::mem::replace(&mut record.name, new_name.to_string());
        self.put(id, &record)?;
        log::info!("Renamed profile '{}' to '{}'", old_name, new_name);
        Ok(true)
    }

    pub fn get_profile(&self, id: &str) -> Result<Option<Profile>> {
        Ok(self
            .record(id)?
            .map(|record| Profile::from_record(id, record)))
    }

    /// All profiles in document order.
    pub fn profiles(&self) -> Result<Vec<Profile>> {
        self.kv
            .entries()
            .iter()
            .map(|(id, value)| {
                self.decode(id, value)
                    .map(|record| Profile::from_record(id.as_str(), record))
            })
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.kv.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.kv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kv.is_empty()
    }

    pub fn kv(&self) -> &KeyValueStore<B> {
        &self.kv
    }

    fn record(&self, id: &str) -> Result<Option<ProfileRecord>> {
        self.kv
            .get_entry(id)
            .map(|value| self.decode(id, value))
            .transpose()
    }

    fn decode(&self, id: &str, value: &Value) -> Result<ProfileRecord> {
        ProfileRecord::deserialize(value).map_err(|e| WorklaunchError::StorageCorrupt {
            location: self.kv.backend().location(),
            reason: format!("profile {}: {}", id, e),
        })
    }

    fn put(&mut self, id: &str, record: &ProfileRecord) -> Result<()> {
        self.kv.update_entry(id, to_value(record)?)?;
        Ok(())
    }
}

fn to_value(record: &ProfileRecord) -> Result<Value> {
    serde_json::to_value(record).map_err(WorklaunchError::Serialization)
}
