use crate::commands::helpers::resolve_profile;
use crate::commands::select::fall_back;
use crate::commands::{CmdMessage, CmdResult, Selection, Services};
use crate::error::Result;
use crate::launch::ProcessSpawner;
use crate::store::DocumentBackend;

/// Deletes a profile. Deleting the current one moves the selection.
pub fn run<B: DocumentBackend, P: ProcessSpawner>(
    services: &mut Services<B, P>,
    selection: &mut Selection,
    selector: &str,
) -> Result<CmdResult> {
    let profile = resolve_profile(services, selection, Some(selector))?;
    services.profiles.delete_profile(&profile.id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Profile deleted: {}",
        profile.name
    )));

    if selection.is_current(&profile.id) {
        match fall_back(services, selection)? {
            Some(next) => result.add_message(CmdMessage::info(format!(
                "Current profile is now {}",
                next.name
            ))),
            None => result.add_message(CmdMessage::info("No profiles left")),
        }
    }
    Ok(result)
}
