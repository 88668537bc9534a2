use crate::commands::{Selection, Services};
use crate::error::{Result, WorklaunchError};
use crate::launch::ProcessSpawner;
use crate::model::Profile;
use crate::store::DocumentBackend;

/// Resolves what the user typed into a stored profile.
///
/// An exact id wins over a name, so a profile cannot be shadowed by another
/// one named after its id. `None` means the current profile.
pub fn resolve_profile<B: DocumentBackend, P: ProcessSpawner>(
    services: &Services<B, P>,
    selection: &Selection,
    selector: Option<&str>,
) -> Result<Profile> {
    let profiles = &services.profiles;
    match selector {
        Some(selector) => {
            if let Some(profile) = profiles.get_profile(selector)? {
                return Ok(profile);
            }
            let id = profiles
                .find_profile_id_by_name(selector)?
                .ok_or_else(|| WorklaunchError::ProfileNotFound(selector.to_string()))?;
            profiles
                .get_profile(&id)?
                .ok_or(WorklaunchError::ProfileNotFound(id))
        }
        None => {
            let id = selection.current().ok_or_else(|| {
                WorklaunchError::Api(
                    "No profile selected. Pass a profile or select one first".to_string(),
                )
            })?;
            profiles
                .get_profile(id)?
                .ok_or_else(|| WorklaunchError::ProfileNotFound(id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mem_services;

    #[test]
    fn resolves_by_id_then_name() {
        let mut services = mem_services();
        services.profiles.create_profile("p1", "Work").unwrap();
        services.profiles.create_profile("p2", "p1").unwrap();
        let selection = Selection::default();

        let by_id = resolve_profile(&services, &selection, Some("p1")).unwrap();
        assert_eq!(by_id.name, "Work");

        let by_name = resolve_profile(&services, &selection, Some("Work")).unwrap();
        assert_eq!(by_name.id, "p1");
    }

    #[test]
    fn unknown_selector_is_not_found() {
        let services = mem_services();
        let result = resolve_profile(&services, &Selection::default(), Some("Nope"));
        assert!(matches!(result, Err(WorklaunchError::ProfileNotFound(s)) if s == "Nope"));
    }

    #[test]
    fn missing_selector_uses_current() {
        let mut services = mem_services();
        services.profiles.create_profile("p1", "Work").unwrap();
        let selection = Selection {
            current_profile_id: Some("p1".to_string()),
        };
        assert_eq!(resolve_profile(&services, &selection, None).unwrap().id, "p1");
    }

    #[test]
    fn no_current_profile_is_api_error() {
        let services = mem_services();
        let result = resolve_profile(&services, &Selection::default(), None);
        assert!(matches!(result, Err(WorklaunchError::Api(_))));
    }
}
