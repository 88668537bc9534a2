use crate::commands::helpers::resolve_profile;
use crate::commands::{CmdMessage, CmdResult, ProfileView, Selection, Services};
use crate::error::Result;
use crate::launch::ProcessSpawner;
use crate::model::Profile;
use crate::store::DocumentBackend;

pub fn run<B: DocumentBackend, P: ProcessSpawner>(
    services: &mut Services<B, P>,
    selection: &mut Selection,
    selector: &str,
) -> Result<CmdResult> {
    let profile = resolve_profile(services, selection, Some(selector))?;

    if selection.is_current(&profile.id) {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info("No need for update, same profile selected")));
    }

    selection.set(&mut services.settings, Some(profile.id.clone()))?;
    let message = CmdMessage::success(format!("Current profile: {}", profile.name));
    Ok(CmdResult::default()
        .with_message(message)
        .with_profiles(vec![ProfileView::new(profile, selection)]))
}

/// Rebuilds the selection from settings at startup.
///
/// A stored id that still names a profile is kept. Anything else falls back to
/// the first profile (or no selection), and the fallback is persisted.
pub fn restore<B: DocumentBackend, P: ProcessSpawner>(
    services: &mut Services<B, P>,
) -> Result<Selection> {
    let mut selection = Selection::default();
    match services.settings.get_current_profile_id() {
        Some(id) if services.profiles.get_profile(&id)?.is_some() => {
            selection.current_profile_id = Some(id);
        }
        stored => {
            if let Some(id) = stored {
                log::warn!("Selected profile {} no longer exists", id);
            }
            fall_back(services, &mut selection)?;
        }
    }
    Ok(selection)
}

/// Selects the first profile in document order, or nothing if there are none.
pub(crate) fn fall_back<B: DocumentBackend, P: ProcessSpawner>(
    services: &mut Services<B, P>,
    selection: &mut Selection,
) -> Result<Option<Profile>> {
    let first = services.profiles.get_all_profiles()?.into_iter().next();
    selection.set(&mut services.settings, first.as_ref().map(|p| p.id.clone()))?;
    Ok(first)
}
