//! Service façades over the stores.
//!
//! [`ProfileService`] owns the rules that span profiles (unique names) and the
//! launch operation; [`SettingsService`] gives the known settings types.

pub mod profile_service;
pub mod settings_service;

pub use profile_service::{NameCheck, ProfileService};
pub use settings_service::SettingsService;
