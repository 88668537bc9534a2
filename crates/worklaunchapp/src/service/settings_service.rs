use crate::error::Result;
use crate::model::{Settings, APPEARANCE_SETTING, CURRENT_PROFILE_SETTING};
use crate::store::{DocumentBackend, SettingsStore};

/// Typed access to the two settings worklaunch knows about.
///
/// The appearance string is stored as given; validating it is the caller's job.
pub struct SettingsService<B: DocumentBackend> {
    store: SettingsStore<B>,
}

impl<B: DocumentBackend> SettingsService<B> {
    pub fn new(store: SettingsStore<B>) -> Self {
        Self { store }
    }

    pub fn get_appearance_mode(&self) -> Option<String> {
        self.string_setting(APPEARANCE_SETTING)
    }

    pub fn set_appearance_mode(&mut self, mode: &str) -> Result<()> {
        self.store.set(APPEARANCE_SETTING, mode)
    }

    pub fn get_current_profile_id(&self) -> Option<String> {
        self.string_setting(CURRENT_PROFILE_SETTING)
    }

    /// `None` clears the selection (stored as `null`).
    pub fn set_current_profile_id(&mut self, id: Option<&str>) -> Result<()> {
        self.store.set(CURRENT_PROFILE_SETTING, id)
    }

    pub fn settings(&self) -> Settings {
        Settings {
            appearance_mode: self.get_appearance_mode(),
            current_profile_id: self.get_current_profile_id(),
        }
    }

    pub fn store(&self) -> &SettingsStore<B> {
        &self.store
    }

    // null, missing and "" all mean unset
    fn string_setting(&self, name: &str) -> Option<String> {
        self.store
            .get(name)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemBackend;

    fn service() -> SettingsService<MemBackend> {
        SettingsService::new(SettingsStore::open(MemBackend::new()).unwrap())
    }

    #[test]
    fn unset_settings_are_none() {
        let svc = service();
        assert_eq!(svc.settings(), Settings::default());
    }

    #[test]
    fn appearance_mode_is_not_validated() {
        let mut svc = service();
        svc.set_appearance_mode("Sepia").unwrap();
        assert_eq!(svc.get_appearance_mode().as_deref(), Some("Sepia"));
    }

    #[test]
    fn current_profile_set_and_clear() {
        let mut svc = service();
        svc.set_current_profile_id(Some("p1")).unwrap();
        assert_eq!(svc.get_current_profile_id().as_deref(), Some("p1"));

        svc.set_current_profile_id(None).unwrap();
        assert_eq!(svc.get_current_profile_id(), None);
        assert_eq!(
            svc.store().get(CURRENT_PROFILE_SETTING),
            Some(&serde_json::Value::Null)
        );
    }

    #[test]
    fn empty_string_reads_as_absent() {
        let backend = MemBackend::with_raw(r#"{"current_profile_id": ""}"#);
        let svc = SettingsService::new(SettingsStore::open(backend).unwrap());
        assert_eq!(svc.get_current_profile_id(), None);
    }

    #[test]
    fn settings_snapshot() {
        let mut svc = service();
        svc.set_appearance_mode("Light").unwrap();
        svc.set_current_profile_id(Some("p9")).unwrap();
        assert_eq!(
            svc.settings(),
            Settings {
                appearance_mode: Some("Light".to_string()),
                current_profile_id: Some("p9".to_string()),
            }
        );
    }
}
