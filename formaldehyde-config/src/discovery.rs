//! Settings file discovery
//!
//! Looks for `formaldehyde.{toml,yaml,yml,json}` in the global
//! (`~/.formaldehyde/`) and project (`./.formaldehyde/`) directories.
//! Project files take precedence over global ones.

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::error::ConfigError;
use crate::ConfigResult;

/// Name of the directory holding settings files, in both scopes.
pub const CONFIG_DIR_NAME: &str = ".formaldehyde";

const FILE_STEM: &str = "formaldehyde";

/// A discovered settings file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Full path to the settings file
    pub path: PathBuf,
    /// Format detected from the extension
    pub format: ConfigFormat,
    /// Where the file was found
    pub scope: ConfigScope,
}

/// Settings file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Where a settings file was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigScope {
    /// `~/.formaldehyde/`
    Global,
    /// `./.formaldehyde/`
    Project,
}

/// Finds settings files; directories are resolved at discovery time unless pinned.
#[derive(Debug, Default)]
pub struct FileDiscovery {
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
}

impl FileDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin both directories instead of resolving them from the environment.
    pub fn with_dirs(project_dir: impl Into<PathBuf>, global_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: Some(project_dir.into()),
            global_dir: Some(global_dir.into()),
        }
    }

    /// `./.formaldehyde/` relative to the current directory.
    pub fn project_config_dir() -> ConfigResult<PathBuf> {
        std::env::current_dir()
            .map(|cwd| cwd.join(CONFIG_DIR_NAME))
            .map_err(|_| ConfigError::CurrentDirectoryNotFound)
    }

    /// `~/.formaldehyde/` in the user's home directory.
    pub fn global_config_dir() -> ConfigResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR_NAME))
            .ok_or(ConfigError::HomeDirectoryNotFound)
    }

    /// Discover all settings files, lowest precedence first so figment can
    /// merge them in order.
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let global_dir = self
            .global_dir
            .clone()
            .or_else(|| Self::global_config_dir().ok());
        let project_dir = self
            .project_dir
            .clone()
            .or_else(|| Self::project_config_dir().ok());

        let mut files = Vec::new();
        if let Some(dir) = global_dir {
            files.extend(Self::search_directory(&dir, ConfigScope::Global));
        }
        if let Some(dir) = project_dir {
            files.extend(Self::search_directory(&dir, ConfigScope::Project));
        }
        files.sort_by_key(|f| f.scope);

        debug!("Discovered {} settings files", files.len());
        files
    }

    fn search_directory(dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
        if !dir.exists() {
            trace!("Directory does not exist: {}", dir.display());
            return Vec::new();
        }
        if !dir.is_dir() {
            warn!("Path exists but is not a directory: {}", dir.display());
            return Vec::new();
        }

        ["toml", "yaml", "yml", "json"]
            .iter()
            .map(|ext| dir.join(format!("{FILE_STEM}.{ext}")))
            .filter(|candidate| candidate.is_file())
            .filter_map(|path| {
                let format = ConfigFormat::from_extension(path.extension()?.to_str()?)?;
                trace!("Found settings file: {} ({:?})", path.display(), format);
                Some(ConfigFile {
                    path,
                    format,
                    scope,
                })
            })
            .collect()
    }
}
