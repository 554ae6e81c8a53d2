//! Loading settings from the real project and home directories into the
//! process-wide slot.

use formaldehyde_config::{current, load_and_install, reset, LayoutSettings, CONFIG_DIR_NAME};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

struct DirGuard {
    original_dir: std::path::PathBuf,
    original_home: Option<String>,
}

impl DirGuard {
    fn enter(project: &std::path::Path, home: &std::path::Path) -> Self {
        let guard = Self {
            original_dir: std::env::current_dir().unwrap(),
            original_home: std::env::var("HOME").ok(),
        };
        std::env::set_current_dir(project).unwrap();
        std::env::set_var("HOME", home);
        guard
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
        match &self.original_home {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
        reset();
    }
}

#[test]
#[serial]
fn test_load_and_install_reads_project_and_home() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    let home = temp.path().join("home");
    fs::create_dir_all(project.join(CONFIG_DIR_NAME)).unwrap();
    fs::create_dir_all(home.join(CONFIG_DIR_NAME)).unwrap();
    fs::write(
        home.join(CONFIG_DIR_NAME).join("formaldehyde.yml"),
        "default_field_column_size: 10\nfirst_label_column_size: 3\n",
    )
    .unwrap();
    fs::write(
        project.join(CONFIG_DIR_NAME).join("formaldehyde.toml"),
        "first_label_column_size = 4\n",
    )
    .unwrap();

    let _guard = DirGuard::enter(&project, &home);
    let installed = load_and_install().unwrap();

    assert_eq!(installed.default_field_column_size, 10);
    assert_eq!(installed.first_label_column_size, 4);
    assert_eq!(installed.label_column_size, 1);
    assert_eq!(*current(), *installed);
}

#[test]
#[serial]
fn test_failed_load_leaves_installed_settings() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    fs::create_dir_all(project.join(CONFIG_DIR_NAME)).unwrap();
    fs::write(
        project.join(CONFIG_DIR_NAME).join("formaldehyde.json"),
        r#"{"label_column_size": 99}"#,
    )
    .unwrap();

    let _guard = DirGuard::enter(&project, temp.path());
    assert!(load_and_install().is_err());
    assert_eq!(*current(), LayoutSettings::default());
}
