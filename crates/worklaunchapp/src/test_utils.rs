use crate::api::WorklaunchApi;
use crate::commands::Services;
use crate::launch::mock::MockSpawner;
use crate::launch::{LaunchPolicy, Launcher};
use crate::service::{ProfileService, SettingsService};
use crate::store::memory::{InMemoryProfileStore, InMemorySettingsStore};
use crate::store::MemBackend;

pub type MemServices = Services<MemBackend, MockSpawner>;
pub type MemApi = WorklaunchApi<MemBackend, MockSpawner>;

pub fn mem_services() -> MemServices {
    mem_services_with(MockSpawner::new())
}

pub fn mem_services_with(spawner: MockSpawner) -> MemServices {
    Services::new(
        ProfileService::new(
            InMemoryProfileStore::in_memory().expect("in-memory profile store"),
            Launcher::new(LaunchPolicy::default(), spawner),
        ),
        SettingsService::new(InMemorySettingsStore::in_memory().expect("in-memory settings store")),
    )
}
