use crate::commands::create::name_rejection;
use crate::commands::helpers::resolve_profile;
use crate::commands::{CmdMessage, CmdResult, ProfileView, Selection, Services};
use crate::error::{Result, WorklaunchError};
use crate::launch::ProcessSpawner;
use crate::store::DocumentBackend;

pub fn run<B: DocumentBackend, P: ProcessSpawner>(
    services: &mut Services<B, P>,
    selection: &Selection,
    selector: &str,
    new_name: &str,
) -> Result<CmdResult> {
    let profile = resolve_profile(services, selection, Some(selector))?;
    let new_name = new_name.trim();

    let check = services.profiles.name_check(new_name, Some(&profile.id))?;
    if let Some(message) = name_rejection(check) {
        return Ok(CmdResult::default().with_message(message));
    }
    if profile.name == new_name {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Profile is already named {}",
            new_name
        ))));
    }

    services.profiles.change_profile_name(&profile.id, new_name)?;
    let renamed = services
        .profiles
        .get_profile(&profile.id)?
        .ok_or_else(|| WorklaunchError::ProfileNotFound(profile.id.clone()))?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Profile renamed: {} -> {}",
            profile.name, new_name
        )))
        .with_profiles(vec![ProfileView::new(renamed, selection)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create::NAME_IN_USE_MESSAGE;
    use crate::commands::MessageLevel;
    use crate::test_utils::mem_services;

    #[test]
    fn renames_by_name() {
        let mut services = mem_services();
        services.profiles.create_profile("p1", "Work").unwrap();

        let result = run(&mut services, &Selection::default(), "Work", "Office").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(services.profiles.get_profile_name_by_id("p1").unwrap(), "Office");
    }

    #[test]
    fn collision_is_an_error_message() {
        let mut services = mem_services();
        services.profiles.create_profile("p1", "Work").unwrap();
        services.profiles.create_profile("p2", "Home").unwrap();

        let result = run(&mut services, &Selection::default(), "p2", "Work").unwrap();
        assert_eq!(result.messages[0].content, NAME_IN_USE_MESSAGE);
        assert_eq!(services.profiles.get_profile_name_by_id("p2").unwrap(), "Home");
    }

    #[test]
    fn same_name_is_info() {
        let mut services = mem_services();
        services.profiles.create_profile("p1", "Work").unwrap();
        let result = run(&mut services, &Selection::default(), "p1", "Work").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn unknown_profile_is_err() {
        let mut services = mem_services();
        let result = run(&mut services, &Selection::default(), "ghost", "X");
        assert!(matches!(result, Err(WorklaunchError::ProfileNotFound(_))));
    }
}
