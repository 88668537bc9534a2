//! Starting the programs a profile points at.
//!
//! Paths are launched one after another, each awaited before the next starts.
//! A path whose extension is in the [`LaunchPolicy`] goes through the platform
//! shell (`cmd /C` on Windows, `sh -c` elsewhere); anything else is executed
//! directly. One failed spawn never stops the rest: it is logged and recorded in
//! the [`LaunchReport`].

use crate::error::{Result, WorklaunchError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use std::process::Command;

/// Extensions launched through the shell when nothing else is configured.
pub const DEFAULT_SHELL_EXTENSIONS: [&str; 2] = [".rdp", ".bat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LaunchMode {
    Shell,
    Direct,
}

impl LaunchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchMode::Shell => "shell",
            LaunchMode::Direct => "direct",
        }
    }
}

/// Decides how each path is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPolicy {
    shell_extensions: Vec<String>,
}

impl Default for LaunchPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL_EXTENSIONS)
    }
}

impl LaunchPolicy {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut shell_extensions: Vec<String> = Vec::new();
        for ext in extensions {
            if let Some(ext) = normalize_extension(ext.as_ref()) {
                if !shell_extensions.contains(&ext) {
                    shell_extensions.push(ext);
                }
            }
        }
        Self { shell_extensions }
    }

    pub fn shell_extensions(&self) -> &[String] {
        &self.shell_extensions
    }

    pub fn mode_for(&self, path: &str) -> LaunchMode {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()));
        match ext {
            Some(ext) if self.shell_extensions.contains(&ext) => LaunchMode::Shell,
            _ => LaunchMode::Direct,
        }
    }
}

/// Lowercases and adds the leading dot. Blank input yields `None`.
pub fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim().trim_start_matches('.');
    if ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_lowercase()))
}

/// How a launched process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExitInfo {
    pub success: bool,
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl ExitInfo {
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn with_code(code: i32) -> Self {
        Self {
            success: code == 0,
            code: Some(code),
        }
    }
}

/// Spawns one process and blocks until it exits.
pub trait ProcessSpawner {
    fn spawn_and_wait(&self, path: &str, mode: LaunchMode) -> Result<ExitInfo>;
}

/// Runs real processes with `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl SystemSpawner {
    fn command(path: &str, mode: LaunchMode) -> Command {
        match mode {
            LaunchMode::Direct => Command::new(path),
            LaunchMode::Shell if cfg!(windows) => {
                let mut cmd = Command::new("cmd");
                cmd.arg("/C").arg(path);
                cmd
            }
            LaunchMode::Shell => {
                let mut cmd = Command::new("sh");
                cmd.arg("-c").arg(path);
                cmd
            }
        }
    }
}

impl ProcessSpawner for SystemSpawner {
    fn spawn_and_wait(&self, path: &str, mode: LaunchMode) -> Result<ExitInfo> {
        let status = Self::command(path, mode)
            .status()
            .map_err(|e| WorklaunchError::Launch {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        Ok(ExitInfo {
            success: status.success(),
            code: status.code(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LaunchOutcome {
    Exited(ExitInfo),
    Failed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct LaunchResult {
    pub path: String,
    pub mode: LaunchMode,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcome: LaunchOutcome,
}

impl LaunchResult {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, LaunchOutcome::Failed(_))
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LaunchReport {
    pub results: Vec<LaunchResult>,
}

impl LaunchReport {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn failures(&self) -> impl Iterator<Item = &LaunchResult> {
        self.results.iter().filter(|r| r.is_failure())
    }

    pub fn launched_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_failure()).count()
    }
}

/// A policy plus the spawner that carries it out.
pub struct Launcher<P: ProcessSpawner> {
    policy: LaunchPolicy,
    spawner: P,
}

impl<P: ProcessSpawner> Launcher<P> {
    pub fn new(policy: LaunchPolicy, spawner: P) -> Self {
        Self { policy, spawner }
    }

    pub fn policy(&self) -> &LaunchPolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: LaunchPolicy) {
        self.policy = policy;
    }

    pub fn spawner(&self) -> &P {
        &self.spawner
    }

    /// Launches `paths` in order, waiting on each. Never fails as a whole.
    pub fn launch_all(&self, paths: &[String]) -> LaunchReport {
        let mut report = LaunchReport::default();
        for path in paths {
            let mode = self.policy.mode_for(path);
            let started_at = Utc::now();
            log::info!("Launching {} ({})", path, mode.as_str());

            let outcome = match self.spawner.spawn_and_wait(path, mode) {
                Ok(exit) => {
                    if !exit.success {
                        log::warn!("{} exited with status {:?}", path, exit.code);
                    }
                    LaunchOutcome::Exited(exit)
                }
                Err(e) => {
                    log::error!("{}", e);
                    LaunchOutcome::Failed(e.to_string())
                }
            };

            report.results.push(LaunchResult {
                path: path.clone(),
                mode,
                started_at,
                finished_at: Utc::now(),
                outcome,
            });
        }
        report
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Records every launch instead of running anything.
    #[derive(Default)]
    pub struct MockSpawner {
        calls: RefCell<Vec<(String, LaunchMode)>>,
        failing: Vec<String>,
        exit_codes: HashMap<String, i32>,
    }

    impl MockSpawner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Spawning `path` fails with a launch error.
        pub fn failing_on(mut self, path: &str) -> Self {
            self.failing.push(path.to_string());
            self
        }

        /// `path` runs but exits with `code`.
        pub fn exiting_with(mut self, path: &str, code: i32) -> Self {
            self.exit_codes.insert(path.to_string(), code);
            self
        }

        pub fn calls(&self) -> Vec<(String, LaunchMode)> {
            self.calls.borrow().clone()
        }
    }

    impl ProcessSpawner for MockSpawner {
        fn spawn_and_wait(&self, path: &str, mode: LaunchMode) -> Result<ExitInfo> {
            self.calls.borrow_mut().push((path.to_string(), mode));
            if self.failing.iter().any(|p| p == path) {
                return Err(WorklaunchError::Launch {
                    path: path.to_string(),
                    reason: "No such file or directory".to_string(),
                });
            }
            Ok(self
                .exit_codes
                .get(path)
                .map(|code| ExitInfo::with_code(*code))
                .unwrap_or_else(ExitInfo::ok))
        }
    }
}
