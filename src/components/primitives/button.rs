//! Button Component

use gpui::{
    div, prelude::*, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, Styled, Window,
};

use crate::theme::colors::ShowcaseColors;
use crate::theme::typography::Typography;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Solid dark fill
    #[default]
    Primary,
    /// Light gray fill
    Secondary,
    /// Bordered, transparent fill
    Outline,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    /// Regular button
    #[default]
    Default,
    /// Large button
    Large,
}

/// A styled button component
///
/// Buttons are inert unless a caller wires a handler onto the returned element.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Default,
            full_width: false,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Stretch the button to the width of its container
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                ShowcaseColors::primary(),
                ShowcaseColors::primary_foreground(),
                ShowcaseColors::primary_hover(),
            ),
            ButtonVariant::Secondary => (
                ShowcaseColors::secondary(),
                ShowcaseColors::secondary_foreground(),
                ShowcaseColors::secondary_hover(),
            ),
            ButtonVariant::Outline => (
                ShowcaseColors::transparent(),
                ShowcaseColors::text_heading(),
                ShowcaseColors::outline_hover(),
            ),
        };

        let (height, padding_x) = match self.size {
            ButtonSize::Default => (px(36.0), px(16.0)),
            ButtonSize::Large => (px(40.0), px(32.0)),
        };

        div()
            .id(self.id)
            .h(height)
            .px(padding_x)
            .flex()
            .items_center()
            .justify_center()
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(Typography::TEXT_SM))
            .font_weight(gpui::FontWeight::MEDIUM)
            .rounded_md()
            .cursor_pointer()
            .when(self.variant == ButtonVariant::Outline, |el| {
                el.border_1().border_color(ShowcaseColors::border())
            })
            .when(self.full_width, |el| el.w_full())
            .hover(|s| s.bg(hover_bg))
            .child(self.label)
    }
}
