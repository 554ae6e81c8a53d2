//! Isolated settings environment for tests

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use formaldehyde_config::CONFIG_DIR_NAME;
use tempfile::TempDir;

/// RAII guard isolating everything settings loading reads.
///
/// On creation, HOME and the current directory point at fresh directories
/// inside a temporary directory, each with an empty `.formaldehyde/`. On
/// drop, HOME, the current directory, every variable set through the guard
/// and the process-wide settings are restored.
///
/// Tests using it change process state and must run serially.
pub struct IsolatedSettingsEnvironment {
    temp_dir: TempDir,
    original_home: Option<String>,
    original_dir: Option<PathBuf>,
    original_env_vars: HashMap<String, Option<String>>,
}

impl IsolatedSettingsEnvironment {
    pub fn new() -> std::io::Result<Self> {
        let temp_dir = create_temp_dir_with_retry()?;
        let home = temp_dir.path().join("home");
        let project = temp_dir.path().join("project");
        std::fs::create_dir_all(home.join(CONFIG_DIR_NAME))?;
        std::fs::create_dir_all(project.join(CONFIG_DIR_NAME))?;

        let original_home = std::env::var("HOME").ok();
        let original_dir = std::env::current_dir().ok();
        std::env::set_var("HOME", &home);
        std::env::set_current_dir(&project)?;

        Ok(Self {
            temp_dir,
            original_home,
            original_dir,
            original_env_vars: HashMap::new(),
        })
    }

    /// The isolated home directory
    pub fn home_path(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// The isolated project directory, which is also the current directory
    pub fn project_path(&self) -> PathBuf {
        self.temp_dir.path().join("project")
    }

    /// `~/.formaldehyde/` inside the isolated home
    pub fn global_config_dir(&self) -> PathBuf {
        self.home_path().join(CONFIG_DIR_NAME)
    }

    /// `./.formaldehyde/` inside the isolated project
    pub fn project_config_dir(&self) -> PathBuf {
        self.project_path().join(CONFIG_DIR_NAME)
    }

    /// Write a settings file into `dir` (one of the two config dirs).
    pub fn write_settings(&self, dir: &Path, file_name: &str, contents: &str) -> std::io::Result<()> {
        std::fs::write(dir.join(file_name), contents)
    }

    /// Set an environment variable, remembering its original value.
    pub fn set_env_var(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) {
        let key = key.as_ref().to_string();
        if !self.original_env_vars.contains_key(&key) {
            let original = std::env::var(&key).ok();
            self.original_env_vars.insert(key.clone(), original);
        }
        std::env::set_var(&key, value.as_ref());
    }
}

impl Drop for IsolatedSettingsEnvironment {
    fn drop(&mut self) {
        if let Some(dir) = &self.original_dir {
            let _ = std::env::set_current_dir(dir);
        }
        match &self.original_home {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
        for (key, original_value) in &self.original_env_vars {
            match original_value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
        formaldehyde_config::reset();
    }
}

/// Create a temporary directory, retrying briefly under filesystem contention.
pub fn create_temp_dir_with_retry() -> std::io::Result<TempDir> {
    let mut attempt = 1;
    loop {
        match TempDir::new() {
            Ok(dir) => return Ok(dir),
            Err(_) if attempt < 3 => {
                std::thread::sleep(std::time::Duration::from_millis(10 * attempt));
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
