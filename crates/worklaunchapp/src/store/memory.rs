use super::mem_backend::MemBackend;
use super::profile_store::ProfileStore;
use super::settings_store::SettingsStore;
use crate::error::Result;

pub type InMemoryProfileStore = ProfileStore<MemBackend>;
pub type InMemorySettingsStore = SettingsStore<MemBackend>;

impl InMemoryProfileStore {
    pub fn in_memory() -> Result<Self> {
        ProfileStore::open(MemBackend::new())
    }
}

impl InMemorySettingsStore {
    pub fn in_memory() -> Result<Self> {
        SettingsStore::open(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct ProfileFixture {
        pub store: InMemoryProfileStore,
    }

    impl Default for ProfileFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ProfileFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryProfileStore::in_memory().unwrap(),
            }
        }

        pub fn with_profile(mut self, id: &str, name: &str, paths: &[&str]) -> Self {
            self.store.add_profile(id, name).unwrap();
            for path in paths {
                self.store.add_path_to_profile(id, path).unwrap();
            }
            self
        }

        /// `count` profiles named "Profile 1".. with ids "p1"..
        pub fn with_profiles(mut self, count: usize) -> Self {
            for i in 1..=count {
                self.store
                    .add_profile(&format!("p{}", i), &format!("Profile {}", i))
                    .unwrap();
            }
            self
        }

        pub fn build(self) -> InMemoryProfileStore {
            self.store
        }
    }
}
