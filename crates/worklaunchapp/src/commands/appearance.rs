use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AppearanceMode;
use crate::service::SettingsService;
use crate::store::DocumentBackend;

/// Shows the stored appearance mode, or sets it when `mode` is given.
///
/// The stored value is shown as-is; `default` only applies when nothing is stored.
pub fn run<B: DocumentBackend>(
    settings: &mut SettingsService<B>,
    default: AppearanceMode,
    mode: Option<&str>,
) -> Result<CmdResult> {
    let Some(requested) = mode else {
        let current = settings
            .get_appearance_mode()
            .unwrap_or_else(|| default.to_string());
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("Appearance mode: {}", current))));
    };

    match requested.parse::<AppearanceMode>() {
        Ok(parsed) => {
            settings.set_appearance_mode(parsed.as_str())?;
            Ok(CmdResult::default().with_message(CmdMessage::success(format!(
                "Appearance mode set to {}",
                parsed
            ))))
        }
        Err(e) => Ok(CmdResult::default().with_message(CmdMessage::error(e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemBackend, SettingsStore};

    fn settings() -> SettingsService<MemBackend> {
        SettingsService::new(SettingsStore::open(MemBackend::new()).unwrap())
    }

    #[test]
    fn shows_default_when_unset() {
        let mut svc = settings();
        let result = run(&mut svc, AppearanceMode::Dark, None).unwrap();
        assert_eq!(result.messages[0].content, "Appearance mode: Dark");
    }

    #[test]
    fn stores_canonical_spelling() {
        let mut svc = settings();
        run(&mut svc, AppearanceMode::Dark, Some("light")).unwrap();
        assert_eq!(svc.get_appearance_mode().as_deref(), Some("Light"));

        let result = run(&mut svc, AppearanceMode::Dark, None).unwrap();
        assert_eq!(result.messages[0].content, "Appearance mode: Light");
    }

    #[test]
    fn rejects_unknown_mode() {
        let mut svc = settings();
        let result = run(&mut svc, AppearanceMode::Dark, Some("neon")).unwrap();
        assert!(result.has_errors());
        assert_eq!(svc.get_appearance_mode(), None);
    }
}
