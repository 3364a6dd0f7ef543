//! Badge Component

use gpui::{
    div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window,
};

use crate::theme::colors::ShowcaseColors;
use crate::theme::typography::Typography;

/// Badge variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    /// Solid dark fill
    #[default]
    Default,
    /// Light gray fill
    Secondary,
    /// Red fill for errors and warnings
    Destructive,
    /// Bordered, no fill
    Outline,
}

/// A small pill-shaped status label
#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    variant: BadgeVariant,
}

impl Badge {
    /// Create a new badge
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            variant: BadgeVariant::Default,
        }
    }

    /// Set the badge variant
    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, border_color) = match self.variant {
            BadgeVariant::Default => (
                ShowcaseColors::primary(),
                ShowcaseColors::primary_foreground(),
                ShowcaseColors::transparent(),
            ),
            BadgeVariant::Secondary => (
                ShowcaseColors::secondary(),
                ShowcaseColors::secondary_foreground(),
                ShowcaseColors::transparent(),
            ),
            BadgeVariant::Destructive => (
                ShowcaseColors::destructive(),
                ShowcaseColors::destructive_foreground(),
                ShowcaseColors::transparent(),
            ),
            BadgeVariant::Outline => (
                ShowcaseColors::transparent(),
                ShowcaseColors::text_heading(),
                ShowcaseColors::border(),
            ),
        };

        // Wrapper keeps the pill at its intrinsic width inside column layouts
        div().flex().child(
            div()
                .px(px(10.0))
                .py(px(2.0))
                .rounded_full()
                .border_1()
                .border_color(border_color)
                .bg(bg_color)
                .text_color(text_color)
                .text_size(px(Typography::TEXT_XS))
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .child(self.label),
        )
    }
}
