//! File System Utilities
//!
//! Configuration and data directory management.

use crate::constants::APP_NAME;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "showcase", APP_NAME).ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/showcase/` or `$XDG_CONFIG_HOME/showcase/`
/// - **macOS**: `~/Library/Application Support/dev.showcase.showcase/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\showcase\showcase\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get or create the directory for rolling log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/showcase/logs/`
/// - **macOS**: `~/Library/Application Support/dev.showcase.showcase/logs/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\showcase\showcase\data\logs\`
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let log_dir = project_dirs.data_dir().join("logs");

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }

    Ok(log_dir)
}

/// Check if running on macOS
pub fn is_macos() -> bool {
    cfg!(target_os = "macos")
}
