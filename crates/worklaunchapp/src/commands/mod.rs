//! # Command Layer
//!
//! One module per user operation. Commands hold the application-level rules that
//! sit above the services: resolving what the user typed into a profile id,
//! keeping the current-profile selection in sync, and phrasing the outcome.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, stderr or terminal concerns
//! - **Argument parsing**: that is the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `profiles`: profiles to display, each flagged if it is the current one
//! - `paths`: a profile's paths (for `paths`)
//! - `launch_report`: per-path outcomes (for `launch`)
//! - `config`: configuration data (for `config`)
//! - `messages`: leveled messages (info, success, warning, error)
//!
//! Rule violations the user can fix (taken name, duplicate path) come back as
//! error or warning messages inside an `Ok`. `Err` is reserved for things the
//! user asked for that do not exist, and for storage failures.
//!
//! ## Selection
//!
//! The current profile is plain caller-owned state, [`Selection`], passed into
//! the commands that read or change it. Changes are persisted through the
//! settings service so the next run starts where this one left off.
//!
//! ## Command Modules
//!
//! - [`create`], [`delete`], [`rename`], [`list`]: profile lifecycle
//! - [`select`]: change the current profile, restore it at startup
//! - [`paths`]: add, remove and list a profile's paths
//! - [`launch`]: launch every path of a profile
//! - [`appearance`]: show or set the appearance mode
//! - [`config`]: manage configuration
//! - [`helpers`]: profile selector resolution

use crate::config::WorklaunchConfig;
use crate::error::Result;
use crate::launch::{LaunchReport, ProcessSpawner};
use crate::model::Profile;
use crate::service::{ProfileService, SettingsService};
use crate::store::DocumentBackend;
use serde::Serialize;

pub mod appearance;
pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod launch;
pub mod list;
pub mod paths;
pub mod rename;
pub mod select;

/// The two services every command works against.
pub struct Services<B: DocumentBackend, P: ProcessSpawner> {
    pub profiles: ProfileService<B, P>,
    pub settings: SettingsService<B>,
}

impl<B: DocumentBackend, P: ProcessSpawner> Services<B, P> {
    pub fn new(profiles: ProfileService<B, P>, settings: SettingsService<B>) -> Self {
        Self { profiles, settings }
    }
}

/// Which profile is current.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub current_profile_id: Option<String>,
}

impl Selection {
    pub fn current(&self) -> Option<&str> {
        self.current_profile_id.as_deref()
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.current() == Some(id)
    }

    /// Updates the selection and persists it if the stored value differs.
    pub fn set<B: DocumentBackend>(
        &mut self,
        settings: &mut SettingsService<B>,
        id: Option<String>,
    ) -> Result<()> {
        if settings.get_current_profile_id() != id {
            settings.set_current_profile_id(id.as_deref())?;
        }
        self.current_profile_id = id;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub profile: Profile,
    pub is_current: bool,
}

impl ProfileView {
    pub fn new(profile: Profile, selection: &Selection) -> Self {
        let is_current = selection.is_current(&profile.id);
        Self {
            profile,
            is_current,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub profiles: Vec<ProfileView>,
    pub paths: Vec<String>,
    pub launch_report: Option<LaunchReport>,
    pub config: Option<WorklaunchConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_profiles(mut self, profiles: Vec<ProfileView>) -> Self {
        self.profiles = profiles;
        self
    }

    pub fn with_paths(mut self, paths: Vec<String>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_launch_report(mut self, report: LaunchReport) -> Self {
        self.launch_report = Some(report);
        self
    }

    pub fn with_config(mut self, config: WorklaunchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True if any message is error-level.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
