use crate::commands::{CmdMessage, CmdResult, ProfileView, Selection, Services};
use crate::error::{Result, WorklaunchError};
use crate::launch::ProcessSpawner;
use crate::service::NameCheck;
use crate::store::DocumentBackend;

pub const EMPTY_NAME_MESSAGE: &str = "Profile names cannot be empty";
pub const NAME_IN_USE_MESSAGE: &str = "Profile name in use, enter a new one";

/// Creates a profile under a fresh id and makes it current.
pub fn run<B: DocumentBackend, P: ProcessSpawner>(
    services: &mut Services<B, P>,
    selection: &mut Selection,
    name: &str,
) -> Result<CmdResult> {
    let name = name.trim();
    if let Some(message) = name_rejection(services.profiles.name_check(name, None)?) {
        return Ok(CmdResult::default().with_message(message));
    }

    let Some(id) = services.profiles.create_new_profile(name)? else {
        return Ok(CmdResult::default().with_message(CmdMessage::error(NAME_IN_USE_MESSAGE)));
    };
    selection.set(&mut services.settings, Some(id.clone()))?;

    let profile = services
        .profiles
        .get_profile(&id)?
        .ok_or_else(|| WorklaunchError::ProfileNotFound(id.clone()))?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Profile created: {}", name)))
        .with_profiles(vec![ProfileView::new(profile, selection)]))
}

/// The message to show for a name that cannot be used, if any.
pub(crate) fn name_rejection(check: NameCheck) -> Option<CmdMessage> {
    match check {
        NameCheck::Available => None,
        NameCheck::Empty => Some(CmdMessage::error(EMPTY_NAME_MESSAGE)),
        NameCheck::Taken => Some(CmdMessage::error(NAME_IN_USE_MESSAGE)),
    }
}
