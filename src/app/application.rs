//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    px, size, AnyView, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info, warn};

use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    WINDOW_TITLE,
};
use crate::helpers::{key_bindings, Quit};
use crate::states::{save_window_bounds, ShowcaseAppState, ShowcaseGlobalStore};
use crate::views::ShowcaseView;

/// Run the showcase application
pub fn run_app(state: ShowcaseAppState) {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            gpui_component::init(cx);

            // Set up action handlers
            cx.bind_keys(key_bindings());
            cx.on_action(|_: &Quit, cx: &mut App| {
                info!("Quit requested");
                cx.quit();
            });

            // Quit the app when all windows are closed (macOS behavior)
            cx.on_window_closed(|cx| {
                if cx.windows().is_empty() {
                    cx.quit();
                }
            })
            .detach();

            let displays: Vec<_> = cx.displays().iter().map(|d| d.bounds()).collect();
            let restored = state.visible_bounds(&displays);
            if restored.is_none() && state.bounds().is_some() {
                warn!("Saved window bounds are off-screen, centering window");
            }
            let bounds = restored.unwrap_or_else(|| {
                Bounds::centered(
                    None,
                    size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                    cx,
                )
            });

            let app_state = cx.new(|_| state);
            cx.set_global(ShowcaseGlobalStore::new(app_state));

            let window_options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::from(WINDOW_TITLE)),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let opened = cx.open_window(window_options, |window, cx| {
                window.on_window_should_close(cx, |window, cx| {
                    save_window_bounds(window.bounds(), cx);
                    true
                });

                let view = cx.new(|cx| ShowcaseView::new(window, cx));
                cx.new(|cx| Root::new(AnyView::from(view), window, cx))
            });

            match opened {
                Ok(_) => info!("Showcase window opened"),
                Err(e) => {
                    error!(error = %e, "Failed to open showcase window");
                    cx.quit();
                }
            }

            cx.activate(true);
        });
}
