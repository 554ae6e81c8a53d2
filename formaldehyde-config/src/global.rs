//! The process-wide settings slot
//!
//! Forms read the installed [`LayoutSettings`] whenever they resolve a default
//! width. Embedding applications install their own once at startup.

use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::provider::SettingsProvider;
use crate::settings::LayoutSettings;
use crate::ConfigResult;

static SETTINGS: Lazy<RwLock<Arc<LayoutSettings>>> =
    Lazy::new(|| RwLock::new(Arc::new(LayoutSettings::default())));

/// The installed settings, or the built-in defaults if nothing was installed.
pub fn current() -> Arc<LayoutSettings> {
    match SETTINGS.read() {
        Ok(guard) => Arc::clone(&*guard),
        Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
    }
}

/// Validate and install `settings` for the whole process.
pub fn override_settings(settings: LayoutSettings) -> ConfigResult<()> {
    settings.validate()?;
    install(settings);
    Ok(())
}

/// Restore the built-in defaults.
pub fn reset() {
    install(LayoutSettings::default());
}

/// Load from files and environment, then install the result.
pub fn load_and_install() -> ConfigResult<Arc<LayoutSettings>> {
    let settings = SettingsProvider::new().load()?;
    install(settings);
    Ok(current())
}

fn install(settings: LayoutSettings) {
    debug!(?settings, "installing process-wide layout settings");
    let mut guard = match SETTINGS.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = Arc::new(settings);
}
