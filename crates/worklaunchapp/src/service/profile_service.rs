use crate::error::{Result, WorklaunchError};
use crate::launch::{LaunchReport, Launcher, ProcessSpawner};
use crate::model::Profile;
use crate::store::{DocumentBackend, ProfileStore};
use uuid::Uuid;

/// Outcome of checking a candidate profile name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCheck {
    Available,
    Empty,
    Taken,
}

impl NameCheck {
    pub fn is_available(&self) -> bool {
        *self == NameCheck::Available
    }
}

/// Profile operations with name uniqueness enforced across all profiles.
///
/// Mutations report rule violations (taken name, duplicate path) as `false`.
/// Reads of a specific id that does not exist fail with `ProfileNotFound`.
pub struct ProfileService<B: DocumentBackend, P: ProcessSpawner> {
    store: ProfileStore<B>,
    launcher: Launcher<P>,
}

impl<B: DocumentBackend, P: ProcessSpawner> ProfileService<B, P> {
    pub fn new(store: ProfileStore<B>, launcher: Launcher<P>) -> Self {
        Self { store, launcher }
    }

    /// Whether `name` could be given to a profile. `exclude_id` skips that
    /// profile, so a profile may keep its own name.
    pub fn name_check(&self, name: &str, exclude_id: Option<&str>) -> Result<NameCheck> {
        if name.trim().is_empty() {
            return Ok(NameCheck::Empty);
        }
        let taken = self
            .store
            .profiles()?
            .iter()
            .any(|p| p.name == name && Some(p.id.as_str()) != exclude_id);
        Ok(if taken {
            NameCheck::Taken
        } else {
            NameCheck::Available
        })
    }

    pub fn create_profile(&mut self, id: &str, name: &str) -> Result<bool> {
        if !self.name_check(name, None)?.is_available() {
            return Ok(false);
        }
        self.store.add_profile(id, name)
    }

    /// Creates a profile under a fresh id, returning the id on success.
    pub fn create_new_profile(&mut self, name: &str) -> Result<Option<String>> {
        let id = Uuid::new_v4().to_string();
        Ok(self.create_profile(&id, name)?.then_some(id))
    }

    pub fn delete_profile(&mut self, id: &str) -> Result<()> {
        if !self.store.remove_profile(id)? {
            return Err(WorklaunchError::ProfileNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Renames unless another profile already uses `new_name`.
    pub fn change_profile_name(&mut self, id: &str, new_name: &str) -> Result<bool> {
        if !self.store.contains(id) || !self.name_check(new_name, Some(id))?.is_available() {
            return Ok(false);
        }
        self.store.rename_profile(id, new_name)
    }

    pub fn add_path_to_profile(&mut self, id: &str, path: &str) -> Result<bool> {
        if path.trim().is_empty() {
            return Ok(false);
        }
        self.store.add_path_to_profile(id, path)
    }

    pub fn remove_path_from_profile(&mut self, id: &str, path: &str) -> Result<bool> {
        self.store.remove_path_from_profile(id, path)
    }

    pub fn launch_all_paths(&self, paths: &[String]) -> LaunchReport {
        self.launcher.launch_all(paths)
    }

    pub fn launch_profile(&self, id: &str) -> Result<LaunchReport> {
        let profile = self.require(id)?;
        log::info!("Launching profile '{}'", profile.name);
        Ok(self.launch_all_paths(&profile.paths))
    }

    pub fn get_all_profiles(&self) -> Result<Vec<Profile>> {
        self.store.profiles()
    }

    pub fn get_all_profile_names(&self) -> Result<Vec<String>> {
        Ok(self.store.profiles()?.into_iter().map(|p| p.name).collect())
    }

    pub fn get_paths_for_profile(&self, id: &str) -> Result<Vec<String>> {
        Ok(self.require(id)?.paths)
    }

    pub fn get_profile_name_by_id(&self, id: &str) -> Result<String> {
        Ok(self.require(id)?.name)
    }

    pub fn get_profile(&self, id: &str) -> Result<Option<Profile>> {
        self.store.get_profile(id)
    }

    pub fn find_profile_id_by_name(&self, name: &str) -> Result<Option<String>> {
        Ok(self
            .store
            .profiles()?
            .into_iter()
            .find(|p| p.name == name)
            .map(|p| p.id))
    }

    pub fn store(&self) -> &ProfileStore<B> {
        &self.store
    }

    pub fn launcher(&self) -> &Launcher<P> {
        &self.launcher
    }

    pub fn launcher_mut(&mut self) -> &mut Launcher<P> {
        &mut self.launcher
    }

    fn require(&self, id: &str) -> Result<Profile> {
        self.store
            .get_profile(id)?
            .ok_or_else(|| WorklaunchError::ProfileNotFound(id.to_string()))
    }
}
