//! # CLI Behavior
//!
//! This is **one possible UI client** for worklaunch, not the application
//! itself. It is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Naked Execution
//!
//! Running `worklaunch` with no arguments lists profiles, marking the current one.
//!
//! ## The Current Profile
//!
//! Commands that act on one profile (`add`, `remove`, `paths`, `launch`) use
//! the current profile unless one is named. Creating a profile makes it
//! current; `select` changes it. Profiles can be named by id or by name.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: logging setup, context init and per-command handlers
//! - `render`: colored output for messages, profile lists and launch reports

mod commands;
mod render;
pub mod setup;

pub use commands::run;
