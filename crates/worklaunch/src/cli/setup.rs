use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "worklaunch",
    bin_name = "worklaunch",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Group applications into profiles and launch them together", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Directory holding profiles.json, settings.json and config.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a profile and make it current
    #[command(alias = "n", display_order = 1)]
    Create {
        /// Profile name words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// List profiles
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Delete a profile
    #[command(alias = "rm", display_order = 3)]
    Delete {
        /// Profile id or name
        profile: String,
    },

    /// Rename a profile
    #[command(display_order = 4)]
    Rename {
        /// Profile id or name
        profile: String,

        /// New name words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Make a profile the current one
    #[command(alias = "use", display_order = 5)]
    Select {
        /// Profile id or name
        profile: String,
    },

    /// Add an application path to a profile
    #[command(display_order = 10)]
    Add {
        /// Path to the executable, script or shortcut
        path: String,

        /// Profile id or name (defaults to the current profile)
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Remove an application path from a profile
    #[command(display_order = 11)]
    Remove {
        /// Path exactly as stored (see `paths`)
        path: String,

        /// Profile id or name (defaults to the current profile)
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Show the paths of a profile
    #[command(display_order = 12)]
    Paths {
        /// Profile id or name (defaults to the current profile)
        profile: Option<String>,
    },

    /// Launch every path of a profile, one after another
    #[command(alias = "run", display_order = 20)]
    Launch {
        /// Profile id or name (defaults to the current profile)
        profile: Option<String>,
    },

    /// Show or set the appearance mode (Light, Dark, System)
    #[command(display_order = 30)]
    Appearance { mode: Option<String> },

    /// Get or set configuration
    #[command(display_order = 31)]
    Config {
        /// Configuration key (shell-extensions, default-appearance)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn no_command_is_none() {
        let cli = parse(&["worklaunch"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn create_joins_words() {
        let cli = parse(&["worklaunch", "n", "Morning", "Work"]);
        match cli.command {
            Some(Commands::Create { name }) => assert_eq!(name.join(" "), "Morning Work"),
            other => panic!("Expected Create, got {other:?}"),
        }
    }

    #[test]
    fn add_with_profile_flag() {
        let cli = parse(&["worklaunch", "add", "/bin/a", "-p", "Work"]);
        match cli.command {
            Some(Commands::Add { path, profile }) => {
                assert_eq!(path, "/bin/a");
                assert_eq!(profile.as_deref(), Some("Work"));
            }
            other => panic!("Expected Add, got {other:?}"),
        }
    }

    #[test]
    fn aliases_resolve() {
        assert!(matches!(parse(&["worklaunch", "ls"]).command, Some(Commands::List)));
        assert!(matches!(
            parse(&["worklaunch", "rm", "Work"]).command,
            Some(Commands::Delete { .. })
        ));
        assert!(matches!(
            parse(&["worklaunch", "use", "Work"]).command,
            Some(Commands::Select { .. })
        ));
        assert!(matches!(
            parse(&["worklaunch", "run"]).command,
            Some(Commands::Launch { profile: None })
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["worklaunch", "list", "-v", "--data-dir", "/tmp/wl"]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/wl")));
    }

    #[test]
    fn create_requires_a_name() {
        assert!(Cli::try_parse_from(["worklaunch", "create"]).is_err());
    }
}
