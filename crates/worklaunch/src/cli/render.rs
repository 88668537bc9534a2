//! # Rendering
//!
//! Turns command results into terminal text. Every `render_*` function returns a
//! `String` so layout can be tested; the `print_*` wrappers write it to stdout.
//! Colors come from `colored`, which disables itself when stdout is not a
//! terminal or `NO_COLOR` is set.

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;
use worklaunchapp::commands::{CmdMessage, MessageLevel, ProfileView};
use worklaunchapp::launch::{LaunchOutcome, LaunchReport, LaunchResult};

const CURRENT_MARKER: &str = "*";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let content = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", content)
        })
        .collect()
}

/// One line per profile: current marker, name, path count, id.
///
/// Names are padded by display width so wide characters keep columns aligned.
pub fn render_profile_list(profiles: &[ProfileView]) -> String {
    let name_width = profiles
        .iter()
        .map(|v| v.profile.name.width())
        .max()
        .unwrap_or(0);

    profiles
        .iter()
        .map(|view| {
            let profile = &view.profile;
            let marker = if view.is_current {
                CURRENT_MARKER.green().bold()
            } else {
                " ".normal()
            };
            let name = if view.is_current {
                profile.name.bold()
            } else {
                profile.name.normal()
            };
            let padding = " ".repeat(name_width - profile.name.width());
            let count = match profile.paths.len() {
                1 => "1 path".to_string(),
                n => format!("{} paths", n),
            };
            format!(
                "{} {}{}  {:>8}  {}\n",
                marker,
                name,
                padding,
                count,
                profile.id.dimmed()
            )
        })
        .collect()
}

pub fn render_paths(paths: &[String]) -> String {
    let index_width = paths.len().to_string().len();
    paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let index = format!("{:>width$}.", i + 1, width = index_width);
            format!("  {} {}\n", index.dimmed(), path)
        })
        .collect()
}

pub fn render_launch_report(report: &LaunchReport) -> String {
    report.results.iter().map(render_launch_line).collect()
}

fn render_launch_line(result: &LaunchResult) -> String {
    let elapsed = result.finished_at - result.started_at;
    format!(
        "  {:<7} {} {}\n",
        outcome_label(&result.outcome),
        result.path,
        format!(
            "({}, {:.1}s)",
            result.mode.as_str(),
            elapsed.num_milliseconds() as f64 / 1000.0
        )
        .dimmed()
    )
}

fn outcome_label(outcome: &LaunchOutcome) -> ColoredString {
    match outcome {
        LaunchOutcome::Exited(exit) if exit.success => "ok".green(),
        LaunchOutcome::Exited(exit) => match exit.code {
            Some(code) => format!("exit {}", code).yellow(),
            None => "killed".yellow(),
        },
        LaunchOutcome::Failed(_) => "failed".red(),
    }
}

pub fn render_config(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

pub fn print_profile_list(profiles: &[ProfileView]) {
    print!("{}", render_profile_list(profiles));
}

pub fn print_paths(paths: &[String]) {
    print!("{}", render_paths(paths));
}

pub fn print_launch_report(report: &LaunchReport) {
    print!("{}", render_launch_report(report));
}

pub fn print_config(entries: &[(String, String)]) {
    print!("{}", render_config(entries));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use worklaunchapp::launch::{ExitInfo, LaunchMode};
    use worklaunchapp::model::Profile;

    fn plain() {
        colored::control::set_override(false);
    }

    fn view(id: &str, name: &str, paths: &[&str], is_current: bool) -> ProfileView {
        ProfileView {
            profile: Profile {
                id: id.to_string(),
                name: name.to_string(),
                paths: paths.iter().map(|p| p.to_string()).collect(),
            },
            is_current,
        }
    }

    fn launched(path: &str, mode: LaunchMode, outcome: LaunchOutcome) -> LaunchResult {
        let started_at = Utc::now();
        LaunchResult {
            path: path.to_string(),
            mode,
            started_at,
            finished_at: started_at + Duration::milliseconds(1500),
            outcome,
        }
    }

    #[test]
    fn test_render_messages_plain() {
        plain();
        let output = render_messages(&[
            CmdMessage::success("Profile created: Work"),
            CmdMessage::warning("careful"),
        ]);
        assert_eq!(output, "Profile created: Work\ncareful\n");
    }

    #[test]
    fn test_render_messages_empty() {
        assert_eq!(render_messages(&[]), "");
    }

    #[test]
    fn test_render_profile_list_aligns_names() {
        plain();
        let output = render_profile_list(&[
            view("p1", "Work", &["/a", "/b"], true),
            view("p2", "Home office", &["/c"], false),
        ]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("* Work "));
        assert!(lines[1].starts_with("  Home office"));
        assert!(lines[0].contains("2 paths"));
        assert!(lines[1].contains("1 path"));
        assert_eq!(lines[0].find("p1"), lines[1].find("p2"));
    }

    #[test]
    fn test_render_profile_list_wide_chars() {
        plain();
        let output = render_profile_list(&[
            view("p1", "作業", &[], false),
            view("p2", "abcd", &[], false),
        ]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0].width(), lines[1].width());
    }

    #[test]
    fn test_render_paths_numbered() {
        plain();
        let output = render_paths(&["/bin/a".to_string(), "/bin/b".to_string()]);
        assert_eq!(output, "  1. /bin/a\n  2. /bin/b\n");
    }

    #[test]
    fn test_render_launch_report() {
        plain();
        let report = LaunchReport {
            results: vec![
                launched("x.bat", LaunchMode::Shell, LaunchOutcome::Exited(ExitInfo::ok())),
                launched(
                    "y.exe",
                    LaunchMode::Direct,
                    LaunchOutcome::Exited(ExitInfo::with_code(2)),
                ),
                launched(
                    "bad.exe",
                    LaunchMode::Direct,
                    LaunchOutcome::Failed("not found".to_string()),
                ),
            ],
        };
        let output = render_launch_report(&report);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "  ok      x.bat (shell, 1.5s)");
        assert_eq!(lines[1], "  exit 2  y.exe (direct, 1.5s)");
        assert_eq!(lines[2], "  failed  bad.exe (direct, 1.5s)");
    }

    #[test]
    fn test_render_config() {
        let output = render_config(&[("default-appearance".to_string(), "Dark".to_string())]);
        assert_eq!(output, "default-appearance = Dark\n");
    }
}
