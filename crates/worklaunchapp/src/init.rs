//! # Initialization
//!
//! Finds the data directory and wires stores, services and the API together.
//!
//! ## Data Directory Resolution
//!
//! 1. An explicit override (the CLI's `--data-dir`) is used as-is.
//! 2. Otherwise the `WORKLAUNCH_DATA` environment variable, if set and non-empty.
//!    This is primarily used for testing to isolate state.
//! 3. Otherwise the OS-appropriate data directory via the `directories` crate.
//!
//! This module is the only place that reads the environment.
//!
//! ## Layout
//!
//! ```text
//! <data dir>/
//! ├── profiles.json
//! ├── settings.json
//! └── config.json
//! ```
//!
//! Nothing is created until the first write.

use crate::api::WorklaunchApi;
use crate::commands::Services;
use crate::config::WorklaunchConfig;
use crate::error::{Result, WorklaunchError};
use crate::launch::{Launcher, ProcessSpawner, SystemSpawner};
use crate::service::{ProfileService, SettingsService};
use crate::store::{FsBackend, ProfileStore, SettingsStore};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DATA_ENV_VAR: &str = "WORKLAUNCH_DATA";
pub const PROFILES_FILENAME: &str = "profiles.json";
pub const SETTINGS_FILENAME: &str = "settings.json";

pub struct WorklaunchContext {
    pub api: WorklaunchApi<FsBackend, SystemSpawner>,
}

/// Resolves the data directory from the override, the environment, or the OS.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    resolve_data_dir_from(data_override, std::env::var(DATA_ENV_VAR).ok())
}

fn resolve_data_dir_from(
    data_override: Option<PathBuf>,
    env_value: Option<String>,
) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return Ok(PathBuf::from(value));
    }
    ProjectDirs::from("com", "worklaunch", "worklaunch")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| WorklaunchError::Api("Could not determine a data directory".to_string()))
}

/// Opens both stores in `data_dir` and builds the services over them.
pub fn open_services<P: ProcessSpawner>(
    data_dir: &Path,
    config: &WorklaunchConfig,
    spawner: P,
) -> Result<Services<FsBackend, P>> {
    let profiles = ProfileStore::open(FsBackend::new(data_dir.join(PROFILES_FILENAME)))?;
    let settings = SettingsStore::open(FsBackend::new(data_dir.join(SETTINGS_FILENAME)))?;
    Ok(Services::new(
        ProfileService::new(profiles, Launcher::new(config.launch_policy(), spawner)),
        SettingsService::new(settings),
    ))
}

/// Builds an API over `data_dir` with the given spawner.
pub fn open_api<P: ProcessSpawner>(
    data_dir: &Path,
    spawner: P,
) -> Result<WorklaunchApi<FsBackend, P>> {
    let config = WorklaunchConfig::load(data_dir)?;
    let services = open_services(data_dir, &config, spawner)?;
    WorklaunchApi::new(services, data_dir.to_path_buf(), &config)
}

/// Initialize the worklaunch context.
///
/// Fails if any stored document is corrupt; nothing is reset.
pub fn initialize(data_override: Option<PathBuf>) -> Result<WorklaunchContext> {
    let data_dir = resolve_data_dir(data_override)?;
    log::debug!("Using data directory {}", data_dir.display());
    let api = open_api(&data_dir, SystemSpawner)?;
    Ok(WorklaunchContext { api })
}
