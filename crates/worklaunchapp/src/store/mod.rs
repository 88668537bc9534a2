//! # Storage Layer
//!
//! Everything worklaunch remembers lives in small JSON documents in the data
//! directory. Each document is a flat object loaded fully into memory on open
//! and rewritten wholesale on every mutation.
//!
//! ## Layers
//!
//! - [`backend::DocumentBackend`]: raw load/save of one document.
//!   [`fs_backend::FsBackend`] writes through a temp file renamed over the
//!   target; [`mem_backend::MemBackend`] keeps the text in memory for tests.
//! - [`kv_store::KeyValueStore`]: entry semantics (`add_entry` only inserts,
//!   `update_entry` upserts, no-op calls never write).
//! - [`profile_store::ProfileStore`] and [`settings_store::SettingsStore`]:
//!   the two consumers, adding typed access on top of the generic mapping.
//!
//! ## Documents
//!
//! ```text
//! <data dir>/
//! ├── profiles.json   # profile_id -> {"name": ..., "paths": [...]}
//! ├── settings.json   # appearance_mode, current_profile_id
//! └── config.json     # shell-extensions, default-appearance
//! ```
//!
//! A document that exists but is not a JSON object fails the open with
//! [`WorklaunchError::StorageCorrupt`](crate::error::WorklaunchError::StorageCorrupt).
//! Nothing is reset automatically.

pub mod backend;
pub mod fs_backend;
pub mod kv_store;
pub mod mem_backend;
pub mod memory;
pub mod profile_store;
pub mod settings_store;

pub use backend::{Document, DocumentBackend};
pub use fs_backend::FsBackend;
pub use kv_store::KeyValueStore;
pub use mem_backend::MemBackend;
pub use profile_store::ProfileStore;
pub use settings_store::SettingsStore;
