//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Application name used for titles, config and log file names
pub const APP_NAME: &str = "showcase";

/// Window title
pub const WINDOW_TITLE: &str = "Component Showcase";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Viewport breakpoints in pixels
pub const MEDIUM_BREAKPOINT: f32 = 768.0;
pub const WIDE_BREAKPOINT: f32 = 1024.0;

/// Maximum content widths
pub const SUBTITLE_MAX_WIDTH: f32 = 672.0;
pub const WELCOME_MAX_WIDTH: f32 = 896.0;
pub const PREVIEW_MAX_WIDTH: f32 = 1152.0;

/// Outer page padding
pub const PAGE_PADDING_X: f32 = 16.0;
pub const PAGE_PADDING_Y: f32 = 64.0;

/// Feature list marker diameter
pub const MARKER_SIZE: f32 = 8.0;

/// Log files kept by the daily rotation
pub const DEFAULT_MAX_LOG_FILES: usize = 7;
