//! Settings provider using Figment

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use tracing::{debug, trace};

use crate::discovery::{ConfigFile, ConfigFormat, FileDiscovery};
use crate::settings::LayoutSettings;
use crate::ConfigResult;

/// Prefix for environment overrides, e.g. `FORMALDEHYDE_LABEL_COLUMN_SIZE=2`.
pub const ENV_PREFIX: &str = "FORMALDEHYDE_";

/// Loads [`LayoutSettings`] from every source in precedence order.
///
/// Nothing is cached; each call to [`SettingsProvider::load`] reads the
/// sources again.
#[derive(Debug, Default)]
pub struct SettingsProvider {
    discovery: FileDiscovery,
}

impl SettingsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific discovery setup instead of the current directory and home.
    pub fn with_discovery(discovery: FileDiscovery) -> Self {
        Self { discovery }
    }

    /// Load and validate the settings.
    pub fn load(&self) -> ConfigResult<LayoutSettings> {
        let settings: LayoutSettings = self.build_figment().extract()?;
        settings.validate()?;
        debug!(
            default_field_column_size = settings.default_field_column_size,
            first_label_column_size = settings.first_label_column_size,
            label_column_size = settings.label_column_size,
            "loaded layout settings"
        );
        Ok(settings)
    }

    /// Sources, later ones overriding earlier ones:
    /// 1. built-in defaults
    /// 2. discovered files (global, then project)
    /// 3. `FORMALDEHYDE_*` environment variables
    fn build_figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(LayoutSettings::default()));

        for file in self.discovery.discover_all() {
            figment = figment.merge(Self::file_provider(&file));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into()))
    }

    fn file_provider(file: &ConfigFile) -> Figment {
        trace!(
            "Loading settings file: {} ({:?})",
            file.path.display(),
            file.format
        );
        match file.format {
            ConfigFormat::Toml => Figment::from(Toml::file(&file.path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(&file.path)),
            ConfigFormat::Json => Figment::from(Json::file(&file.path)),
        }
    }
}
