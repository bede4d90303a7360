//! Provider traits for settings.

use crate::errors::Result;
use crate::settings::Settings;

/// Source of the current settings.
///
/// Implementations may re-read their backing file on every call so edits
/// apply to the next export without a restart.
pub trait SettingsProviderTrait: Send + Sync {
    fn load(&self) -> Result<Settings>;
}
