use crate::commands::helpers::resolve_profile;
use crate::commands::{CmdMessage, CmdResult, Selection, Services};
use crate::error::Result;
use crate::launch::{LaunchOutcome, ProcessSpawner};
use crate::store::DocumentBackend;

/// Launches every path of a profile in order and reports how each went.
pub fn run<B: DocumentBackend, P: ProcessSpawner>(
    services: &Services<B, P>,
    selection: &Selection,
    selector: Option<&str>,
) -> Result<CmdResult> {
    let profile = resolve_profile(services, selection, selector)?;
    let mut result = CmdResult::default();

    if profile.paths.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Profile {} has no paths to launch",
            profile.name
        )));
        return Ok(result);
    }

    let report = services.profiles.launch_profile(&profile.id)?;
    for launched in &report.results {
        match &launched.outcome {
            LaunchOutcome::Failed(reason) => result.add_message(CmdMessage::error(reason)),
            LaunchOutcome::Exited(exit) if !exit.success => {
                let status = exit
                    .code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                result.add_message(CmdMessage::warning(format!(
                    "{} exited with status {}",
                    launched.path, status
                )))
            }
            LaunchOutcome::Exited(_) => {}
        }
    }
    result.add_message(CmdMessage::success(format!(
        "Launched {} of {} paths from {}",
        report.launched_count(),
        report.results.len(),
        profile.name
    )));
    Ok(result.with_launch_report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::launch::mock::MockSpawner;
    use crate::launch::LaunchMode;
    use crate::test_utils::{mem_services, mem_services_with};

    #[test]
    fn launches_current_profile() {
        let mut services = mem_services();
        services.profiles.create_profile("p1", "Work").unwrap();
        services.profiles.add_path_to_profile("p1", "x.bat").unwrap();
        services.profiles.add_path_to_profile("p1", "y.exe").unwrap();
        let selection = Selection {
            current_profile_id: Some("p1".to_string()),
        };

        let result = run(&services, &selection, None).unwrap();
        assert_eq!(
            services.profiles.launcher().spawner().calls(),
            vec![
                ("x.bat".to_string(), LaunchMode::Shell),
                ("y.exe".to_string(), LaunchMode::Direct),
            ]
        );
        assert_eq!(result.launch_report.unwrap().launched_count(), 2);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn failures_and_bad_exits_are_reported() {
        let mut services = mem_services_with(
            MockSpawner::new()
                .failing_on("bad.exe")
                .exiting_with("flaky.exe", 2),
        );
        services.profiles.create_profile("p1", "Work").unwrap();
        for path in ["bad.exe", "flaky.exe", "good.exe"] {
            services.profiles.add_path_to_profile("p1", path).unwrap();
        }

        let result = run(&services, &Selection::default(), Some("Work")).unwrap();
        let levels: Vec<MessageLevel> = result.messages.iter().map(|m| m.level.clone()).collect();
        assert_eq!(
            levels,
            vec![MessageLevel::Error, MessageLevel::Warning, MessageLevel::Success]
        );
        assert_eq!(services.profiles.launcher().spawner().calls().len(), 3);
        assert_eq!(result.messages[2].content, "Launched 2 of 3 paths from Work");
    }

    #[test]
    fn empty_profile_launches_nothing() {
        let mut services = mem_services();
        services.profiles.create_profile("p1", "Work").unwrap();
        let result = run(&services, &Selection::default(), Some("p1")).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.launch_report.is_none());
        assert!(services.profiles.launcher().spawner().calls().is_empty());
    }
}
