//! # Worklaunch Architecture
//!
//! Worklaunch groups executable paths into named **profiles** and starts every
//! path of a profile with one action. This crate is the UI-agnostic core; the
//! `worklaunch` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (worklaunch crate)                                     │
//! │  - Parses arguments, renders results, owns exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the current selection    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Selector resolution, selection upkeep, user messages     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Services (service/)                                        │
//! │  - Unique profile names, typed settings, launching          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore over one JSON document per concern         │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments and returns
//! `Result<CmdResult>`. It never writes to stdout or stderr and never exits the
//! process. Launching goes through the [`launch::ProcessSpawner`] trait so the
//! whole stack can be tested without starting real programs.
//!
//! ## Testing Strategy
//!
//! 1. **Stores and services**: unit tests against [`store::MemBackend`].
//! 2. **Commands**: the bulk of the behaviour tests, using in-memory services
//!    and a recording spawner.
//! 3. **API**: dispatch and selection wiring.
//! 4. **Filesystem**: integration tests in `tests/` against temp directories.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user operation
//! - [`service`]: Profile and settings services
//! - [`store`]: Document backends and the key-value stores
//! - [`launch`]: Launch policy, process spawning, launch reports
//! - [`model`]: Profile and settings types
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod launch;
pub mod model;
pub mod service;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
