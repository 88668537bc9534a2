use crate::commands::{CmdMessage, CmdResult, ProfileView, Selection, Services};
use crate::error::Result;
use crate::launch::ProcessSpawner;
use crate::store::DocumentBackend;

pub fn run<B: DocumentBackend, P: ProcessSpawner>(
    services: &Services<B, P>,
    selection: &Selection,
) -> Result<CmdResult> {
    let views: Vec<ProfileView> = services
        .profiles
        .get_all_profiles()?
        .into_iter()
        .map(|profile| ProfileView::new(profile, selection))
        .collect();

    let mut result = CmdResult::default();
    if views.is_empty() {
        result.add_message(CmdMessage::info("No profiles yet"));
    }
    Ok(result.with_profiles(views))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mem_services;

    #[test]
    fn marks_current_profile() {
        let mut services = mem_services();
        services.profiles.create_profile("p1", "Work").unwrap();
        services.profiles.create_profile("p2", "Home").unwrap();
        let selection = Selection {
            current_profile_id: Some("p2".to_string()),
        };

        let result = run(&services, &selection).unwrap();
        let flags: Vec<(&str, bool)> = result
            .profiles
            .iter()
            .map(|v| (v.profile.name.as_str(), v.is_current))
            .collect();
        assert_eq!(flags, vec![("Work", false), ("Home", true)]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_list_has_hint() {
        let services = mem_services();
        let result = run(&services, &Selection::default()).unwrap();
        assert!(result.profiles.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
