//! Card Component
//!
//! A bordered surface with a title/description header and a body region.

use gpui::{
    div, prelude::*, px, AnyElement, App, IntoElement, ParentElement, Pixels, RenderOnce,
    SharedString, Styled, Window,
};

use crate::theme::colors::ShowcaseColors;
use crate::theme::typography::Typography;

/// Card component
#[derive(IntoElement)]
pub struct Card {
    title: SharedString,
    description: Option<SharedString>,
    title_size: Pixels,
    description_size: Pixels,
    elevated: bool,
    children: Vec<AnyElement>,
}

impl Card {
    /// Create a new card
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            description: None,
            title_size: px(Typography::TEXT_2XL),
            description_size: px(Typography::TEXT_SM),
            elevated: false,
            children: Vec::new(),
        }
    }

    /// Set the description shown under the title
    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Override the title font size
    pub fn title_size(mut self, size: Pixels) -> Self {
        self.title_size = size;
        self
    }

    /// Override the description font size
    pub fn description_size(mut self, size: Pixels) -> Self {
        self.description_size = size;
        self
    }

    /// Use a large drop shadow instead of a small one
    pub fn elevated(mut self, elevated: bool) -> Self {
        self.elevated = elevated;
        self
    }

    /// Add a child element to the card body
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .w_full()
            .h_full()
            .flex()
            .flex_col()
            .bg(ShowcaseColors::card_bg())
            .border_1()
            .border_color(ShowcaseColors::border())
            .rounded_lg()
            .map(|el| if self.elevated { el.shadow_lg() } else { el.shadow_sm() })
            // Header
            .child(
                div()
                    .p_6()
                    .flex()
                    .flex_col()
                    .gap(px(6.0))
                    .child(
                        div()
                            .text_size(self.title_size)
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(ShowcaseColors::text_heading())
                            .child(self.title),
                    )
                    .when_some(self.description, |el, description| {
                        el.child(
                            div()
                                .text_size(self.description_size)
                                .text_color(ShowcaseColors::text_muted())
                                .child(description),
                        )
                    }),
            )
            // Body
            .child(
                div()
                    .px_6()
                    .pb_6()
                    .flex()
                    .flex_col()
                    .children(self.children),
            )
    }
}
