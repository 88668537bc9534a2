//! # Worklaunch CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/worklaunchapp/`: core library, UI-agnostic profile storage,
//!   services and launching
//! - `crates/worklaunch/`: this CLI, one client of the library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/worklaunch/src/cli/)                     │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging, context wiring, dispatch (commands.rs)          │
//! │  - Colored terminal rendering (render.rs)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/worklaunchapp/src/api.rs)                │
//! │  - Resolves profile selectors, owns the selection           │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The CLI layer owns every user-facing concern: argument parsing, logging
//! setup, rendering and exit codes. Propagated errors print `Error: ...` and
//! exit with status 1; validation problems are printed as messages.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
