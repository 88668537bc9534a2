//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients. It owns the services, the current-profile
//! [`Selection`] and the settings read from the config file, and dispatches
//! each call to the matching command.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr, or file formatting
//!
//! ## Profile Selectors
//!
//! Methods that act on one profile take a selector: a profile id or an exact
//! profile name. Where the selector is optional, `None` means the current
//! profile.
//!
//! ## Generic Over Storage and Spawning
//!
//! `WorklaunchApi<B, P>` is generic over the document backend and the process
//! spawner:
//! - Production: `WorklaunchApi<FsBackend, SystemSpawner>`
//! - Testing: `WorklaunchApi<MemBackend, MockSpawner>`

use crate::commands::{self, config::ConfigAction, CmdResult, Selection, Services};
use crate::config::WorklaunchConfig;
use crate::error::Result;
use crate::launch::ProcessSpawner;
use crate::model::AppearanceMode;
use crate::store::DocumentBackend;
use std::path::PathBuf;

pub struct WorklaunchApi<B: DocumentBackend, P: ProcessSpawner> {
    services: Services<B, P>,
    selection: Selection,
    config_dir: PathBuf,
    default_appearance: AppearanceMode,
}

impl<B: DocumentBackend, P: ProcessSpawner> WorklaunchApi<B, P> {
    /// Wires the API and restores the persisted selection.
    pub fn new(
        mut services: Services<B, P>,
        config_dir: PathBuf,
        config: &WorklaunchConfig,
    ) -> Result<Self> {
        services
            .profiles
            .launcher_mut()
            .set_policy(config.launch_policy());
        let selection = commands::select::restore(&mut services)?;
        Ok(Self {
            services,
            selection,
            config_dir,
            default_appearance: config.default_appearance,
        })
    }

    pub fn create_profile(&mut self, name: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.services, &mut self.selection, name)
    }

    pub fn delete_profile(&mut self, selector: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.services, &mut self.selection, selector)
    }

    pub fn rename_profile(&mut self, selector: &str, new_name: &str) -> Result<CmdResult> {
        commands::rename::run(&mut self.services, &self.selection, selector, new_name)
    }

    pub fn list_profiles(&self) -> Result<CmdResult> {
        commands::list::run(&self.services, &self.selection)
    }

    pub fn select_profile(&mut self, selector: &str) -> Result<CmdResult> {
        commands::select::run(&mut self.services, &mut self.selection, selector)
    }

    pub fn add_path(&mut self, selector: Option<&str>, path: &str) -> Result<CmdResult> {
        commands::paths::add(&mut self.services, &self.selection, selector, path)
    }

    pub fn remove_path(&mut self, selector: Option<&str>, path: &str) -> Result<CmdResult> {
        commands::paths::remove(&mut self.services, &self.selection, selector, path)
    }

    pub fn profile_paths(&self, selector: Option<&str>) -> Result<CmdResult> {
        commands::paths::list(&self.services, &self.selection, selector)
    }

    pub fn launch(&self, selector: Option<&str>) -> Result<CmdResult> {
        commands::launch::run(&self.services, &self.selection, selector)
    }

    pub fn appearance(&mut self, mode: Option<&str>) -> Result<CmdResult> {
        commands::appearance::run(&mut self.services.settings, self.default_appearance, mode)
    }

    /// Runs a config action. A successful set takes effect immediately.
    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let is_set = matches!(action, ConfigAction::Set(..));
        let result = commands::config::run(&self.config_dir, action)?;
        if let (true, Some(config)) = (is_set, &result.config) {
            self.apply_config(config);
        }
        Ok(result)
    }

    pub fn current_profile_id(&self) -> Option<&str> {
        self.selection.current()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn services(&self) -> &Services<B, P> {
        &self.services
    }

    fn apply_config(&mut self, config: &WorklaunchConfig) {
        self.services
            .profiles
            .launcher_mut()
            .set_policy(config.launch_policy());
        self.default_appearance = config.default_appearance;
    }
}
