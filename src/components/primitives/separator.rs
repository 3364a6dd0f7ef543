//! Separator Component

use gpui::{div, px, App, IntoElement, RenderOnce, Styled, Window};

use crate::theme::colors::ShowcaseColors;

/// A one pixel divider line
#[derive(IntoElement)]
pub struct Separator;

impl Separator {
    /// Create a horizontal separator spanning its container
    pub fn horizontal() -> Self {
        Self
    }
}

impl RenderOnce for Separator {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .h(px(1.0))
            .flex_shrink_0()
            .bg(ShowcaseColors::border())
    }
}
