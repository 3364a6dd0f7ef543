//! Component Showcase - Main Entry Point

use showcase_gui::app::application::run_app;
use showcase_gui::logging;
use showcase_gui::states::{config_path, ShowcaseAppState};

fn main() {
    // Config is read before logging so the log settings can come from it
    let (state, path, load_error) = match config_path() {
        Ok(path) => {
            let (state, error) = ShowcaseAppState::load_or_default_from(&path);
            (state, Some(path), error)
        }
        Err(e) => (ShowcaseAppState::new(), None, Some(e)),
    };

    let _log_guard = match logging::init(state.log()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    tracing::info!(path = ?path, "Config file");
    if let Some(e) = load_error {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
    }

    tracing::info!("Starting Component Showcase...");

    // Run the GPUI application
    run_app(state);
}
