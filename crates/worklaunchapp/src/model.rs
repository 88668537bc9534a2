use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Settings key holding the appearance mode string.
pub const APPEARANCE_SETTING: &str = "appearance_mode";

/// Settings key holding the id of the last selected profile.
pub const CURRENT_PROFILE_SETTING: &str = "current_profile_id";

/// The stored shape of a profile entry: `{"name": ..., "paths": [...]}`.
///
/// The id is the document key, so it is not part of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub paths: Vec<String>,
}

impl ProfileRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            paths: Vec::new(),
        }
    }
}

/// A profile as seen by callers: the record plus the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub paths: Vec<String>,
}

impl Profile {
    pub fn from_record(id: impl Into<String>, record: ProfileRecord) -> Self {
        Self {
            id: id.into(),
            name: record.name,
            paths: record.paths,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppearanceMode {
    Light,
    #[default]
    Dark,
    System,
}

impl AppearanceMode {
    pub const ALL: [AppearanceMode; 3] = [
        AppearanceMode::Light,
        AppearanceMode::Dark,
        AppearanceMode::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppearanceMode::Light => "Light",
            AppearanceMode::Dark => "Dark",
            AppearanceMode::System => "System",
        }
    }
}

impl fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppearanceMode {
    type Err = String;

    /// Case-insensitive: "dark", "Dark" and "DARK" all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "Unknown appearance mode '{}' (expected Light, Dark or System)",
                    s
                )
            })
    }
}

/// Typed snapshot of the settings document.
///
/// `appearance_mode` is kept as the raw stored string: the settings layer
/// accepts whatever was written and leaves interpretation to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub appearance_mode: Option<String>,
    pub current_profile_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_to_canonical_shape() {
        let record = ProfileRecord {
            name: "Work".to_string(),
            paths: vec!["/bin/a".to_string()],
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Work", "paths": ["/bin/a"]})
        );
    }

    #[test]
    fn new_record_has_no_paths() {
        let record = ProfileRecord::new("Empty");
        assert!(record.paths.is_empty());
    }

    #[test]
    fn appearance_mode_parses_case_insensitively() {
        assert_eq!("light".parse::<AppearanceMode>(), Ok(AppearanceMode::Light));
        assert_eq!(" SYSTEM ".parse::<AppearanceMode>(), Ok(AppearanceMode::System));
        assert!("sepia".parse::<AppearanceMode>().is_err());
    }

    #[test]
    fn appearance_mode_defaults_to_dark() {
        assert_eq!(AppearanceMode::default(), AppearanceMode::Dark);
        assert_eq!(AppearanceMode::default().to_string(), "Dark");
    }
}
