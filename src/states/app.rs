//! Application State
//!
//! Persisted window bounds and logging settings, plus the global store.

use crate::constants::DEFAULT_MAX_LOG_FILES;
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use gpui::{App, AppContext, Bounds, Context, Entity, Global, Pixels};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

const CONFIG_FILE_NAME: &str = "showcase.toml";

/// Path of the config file in the platform config directory; created empty
/// when absent
pub fn config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

// ==================== Persisted State ====================

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Write a daily rotated log file next to the console output
    pub file: bool,
    /// Number of rotated log files to keep
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
            max_files: DEFAULT_MAX_LOG_FILES,
        }
    }
}

/// Persisted application state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseAppState {
    bounds: Option<Bounds<Pixels>>,
    log: LogConfig,
    /// Set when the file on disk could not be parsed; it is never overwritten
    #[serde(skip)]
    read_only: bool,
}

impl ShowcaseAppState {
    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse state from TOML; blank input yields defaults
    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(toml::from_str(value)?)
    }

    /// Serialize state to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Load state from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let value = std::fs::read_to_string(path)?;
        Self::from_toml_str(&value)
    }

    /// Load state from a file, falling back to read-only defaults on error
    ///
    /// The error is handed back so the caller can log it once a subscriber
    /// is installed.
    pub fn load_or_default_from(path: &Path) -> (Self, Option<Error>) {
        match Self::load_from(path) {
            Ok(state) => (state, None),
            Err(e) => (
                Self {
                    read_only: true,
                    ..Self::new()
                },
                Some(e),
            ),
        }
    }

    /// Write state to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if self.read_only {
            return Err(Error::Invalid {
                message: format!("Refusing to overwrite unreadable config {}", path.display()),
            });
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Save state to the platform config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path()?)
    }

    // ==================== Getters ====================

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Saved bounds, kept only when their origin lies on one of `displays`
    pub fn visible_bounds(&self, displays: &[Bounds<Pixels>]) -> Option<Bounds<Pixels>> {
        self.bounds
            .as_ref()
            .filter(|bounds| displays.iter().any(|d| d.contains(&bounds.origin)))
            .cloned()
    }

    // ==================== Setters ====================

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<ShowcaseGlobalStore>()`
#[derive(Clone)]
pub struct ShowcaseGlobalStore {
    app_state: Entity<ShowcaseAppState>,
}

impl ShowcaseGlobalStore {
    /// Create a new global store
    pub fn new(app_state: Entity<ShowcaseAppState>) -> Self {
        Self { app_state }
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut ShowcaseAppState, &mut Context<ShowcaseAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for ShowcaseGlobalStore {}

/// Record the window bounds and persist the state
///
/// Called from the window should-close handler.
pub fn save_window_bounds(bounds: Bounds<Pixels>, cx: &mut App) {
    let store = cx.global::<ShowcaseGlobalStore>().clone();
    let state = store.update(cx, |state, _cx| {
        state.set_bounds(bounds);
        state.clone()
    });

    if state.is_read_only() {
        warn!("Config file could not be parsed at startup, window bounds not saved");
        return;
    }

    if let Err(e) = state.save() {
        error!(error = %e, "Failed to save window bounds");
    } else {
        info!("Window bounds saved");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{point, px, size};

    #[test]
    fn blank_config_yields_defaults() {
        let state = ShowcaseAppState::from_toml_str("  \n").expect("parse blank");
        assert!(state.bounds().is_none());
        assert_eq!(state.log(), &LogConfig::default());
    }

    #[test]
    fn partial_log_section_keeps_other_defaults() {
        let state =
            ShowcaseAppState::from_toml_str("[log]\nlevel = \"debug\"\n").expect("parse log");
        assert_eq!(state.log().level, "debug");
        assert!(state.log().file);
        assert_eq!(state.log().max_files, DEFAULT_MAX_LOG_FILES);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let result = ShowcaseAppState::from_toml_str("[log\nlevel = ");
        assert!(matches!(result, Err(crate::error::Error::TomlDe { .. })));
    }

    #[test]
    fn save_and_load_preserves_bounds() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut state = ShowcaseAppState::new();
        state.set_bounds(Bounds::new(point(px(10.0), px(20.0)), size(px(800.0), px(600.0))));
        state.save_to(&path).expect("save");

        let loaded = ShowcaseAppState::load_from(&path).expect("load");
        assert_eq!(loaded.bounds(), state.bounds());
        assert_eq!(loaded.log(), state.log());
    }

    #[test]
    fn unreadable_config_is_never_overwritten() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        let original = "[log]\nlevel = \"debug\"\nfile = tru\n";
        std::fs::write(&path, original).expect("write config");

        let (mut state, error) = ShowcaseAppState::load_or_default_from(&path);
        assert!(matches!(error, Some(Error::TomlDe { .. })));
        assert!(state.is_read_only());
        assert_eq!(state.log(), &LogConfig::default());

        state.set_bounds(Bounds::new(point(px(0.0), px(0.0)), size(px(800.0), px(600.0))));
        assert!(matches!(state.save_to(&path), Err(Error::Invalid { .. })));
        assert_eq!(std::fs::read_to_string(&path).expect("read config"), original);
    }

    #[test]
    fn readable_config_stays_writable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[log]\nlevel = \"warn\"\n").expect("write config");

        let (state, error) = ShowcaseAppState::load_or_default_from(&path);
        assert!(error.is_none());
        assert!(!state.is_read_only());
        assert_eq!(state.log().level, "warn");
        state.save_to(&path).expect("save");
    }

    #[test]
    fn off_screen_bounds_are_dropped() {
        let displays = [Bounds::new(point(px(0.0), px(0.0)), size(px(1920.0), px(1080.0)))];

        let mut state = ShowcaseAppState::new();
        assert!(state.visible_bounds(&displays).is_none());

        let on_screen = Bounds::new(point(px(100.0), px(50.0)), size(px(800.0), px(600.0)));
        state.set_bounds(on_screen.clone());
        assert_eq!(state.visible_bounds(&displays), Some(on_screen));

        let unplugged = Bounds::new(point(px(2500.0), px(50.0)), size(px(800.0), px(600.0)));
        state.set_bounds(unplugged);
        assert!(state.visible_bounds(&displays).is_none());
        assert!(state.visible_bounds(&[]).is_none());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = ShowcaseAppState::load_from(&dir.path().join("absent.toml")).expect("load");
        assert!(state.bounds().is_none());
    }
}
