use crate::commands::helpers::resolve_profile;
use crate::commands::{CmdMessage, CmdResult, Selection, Services};
use crate::error::Result;
use crate::launch::ProcessSpawner;
use crate::store::DocumentBackend;

pub fn add<B: DocumentBackend, P: ProcessSpawner>(
    services: &mut Services<B, P>,
    selection: &Selection,
    selector: Option<&str>,
    path: &str,
) -> Result<CmdResult> {
    let profile = resolve_profile(services, selection, selector)?;
    if path.trim().is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::error("Path cannot be empty")));
    }

    let message = if services.profiles.add_path_to_profile(&profile.id, path)? {
        CmdMessage::success(format!("Added {} to {}", path, profile.name))
    } else {
        CmdMessage::warning(format!("{} is already in {}", path, profile.name))
    };
    Ok(CmdResult::default()
        .with_message(message)
        .with_paths(services.profiles.get_paths_for_profile(&profile.id)?))
}

pub fn remove<B: DocumentBackend, P: ProcessSpawner>(
    services: &mut Services<B, P>,
    selection: &Selection,
    selector: Option<&str>,
    path: &str,
) -> Result<CmdResult> {
    let profile = resolve_profile(services, selection, selector)?;

    let message = if services.profiles.remove_path_from_profile(&profile.id, path)? {
        CmdMessage::success(format!("Removed {} from {}", path, profile.name))
    } else {
        CmdMessage::warning(format!("{} is not in {}", path, profile.name))
    };
    Ok(CmdResult::default()
        .with_message(message)
        .with_paths(services.profiles.get_paths_for_profile(&profile.id)?))
}

pub fn list<B: DocumentBackend, P: ProcessSpawner>(
    services: &Services<B, P>,
    selection: &Selection,
    selector: Option<&str>,
) -> Result<CmdResult> {
    let profile = resolve_profile(services, selection, selector)?;
    let mut result = CmdResult::default();
    if profile.paths.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Profile {} has no paths",
            profile.name
        )));
    }
    Ok(result.with_paths(profile.paths))
}
