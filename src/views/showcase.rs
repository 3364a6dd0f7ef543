//! Showcase View
//!
//! Renders the [`ShowcasePage`] model with the visual primitives: gradient
//! background, header, welcome card, component preview grid and footer.

use gpui::{
    div, linear_color_stop, linear_gradient, prelude::*, px, AnyElement, Context, ElementId,
    IntoElement, ParentElement, Pixels, Render, SharedString, Styled, Window,
};
use gpui_component::{h_flex, v_flex};
use tracing::debug;

use crate::components::primitives::{Badge, Button, Card, Separator};
use crate::constants::{
    MARKER_SIZE, PAGE_PADDING_X, PAGE_PADDING_Y, PREVIEW_MAX_WIDTH, SUBTITLE_MAX_WIDTH,
    WELCOME_MAX_WIDTH,
};
use crate::showcase::{
    grid_rows, showcase_page, Breakpoint, ButtonSpec, Callout, GridCell, PreviewBody,
    PreviewCard, ResponsiveColumns, ShowcasePage,
};
use crate::theme::colors::ShowcaseColors;
use crate::theme::typography::Typography;

/// The showcase page view
pub struct ShowcaseView {
    page: ShowcasePage,
    breakpoint: Breakpoint,
}

impl ShowcaseView {
    /// Create the view; the page model is built once here
    pub fn new(window: &mut Window, _cx: &mut Context<Self>) -> Self {
        let page = showcase_page();
        let breakpoint = Breakpoint::for_width(window.viewport_size().width);

        debug!(
            buttons = page.buttons().count(),
            badges = page.badges().count(),
            preview_cards = page.preview.cards.len(),
            ?breakpoint,
            "Showcase page built"
        );

        Self { page, breakpoint }
    }

    fn render_header(&self) -> impl IntoElement {
        let header = &self.page.header;

        v_flex()
            .w_full()
            .items_center()
            .gap_4()
            .child(
                div()
                    .text_center()
                    .text_size(px(Typography::TEXT_5XL))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(ShowcaseColors::text_heading())
                    .child(header.title),
            )
            .child(
                div()
                    .w_full()
                    .max_w(px(SUBTITLE_MAX_WIDTH))
                    .text_center()
                    .text_size(px(Typography::TEXT_XL))
                    .text_color(ShowcaseColors::text_secondary())
                    .child(header.subtitle),
            )
    }

    fn render_callout(callout: &Callout) -> AnyElement {
        v_flex()
            .items_start()
            .gap_2()
            .child(Badge::new(callout.tag.label).variant(callout.tag.variant))
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(ShowcaseColors::text_secondary())
                    .child(callout.description),
            )
            .into_any_element()
    }

    fn render_welcome(&self) -> impl IntoElement {
        let welcome = &self.page.welcome;
        let callouts = welcome.callouts.iter().map(Self::render_callout).collect();
        let columns = ResponsiveColumns::CALLOUTS.resolve(self.breakpoint);

        let body = v_flex()
            .w_full()
            .items_start()
            .gap_6()
            .child(
                div()
                    .text_color(ShowcaseColors::text_body())
                    .child(welcome.intro),
            )
            .child(render_grid(callouts, columns, px(16.0)))
            .child(Separator::horizontal())
            .child(
                h_flex()
                    .w_full()
                    .flex_wrap()
                    .justify_center()
                    .gap_4()
                    .children(welcome.actions.iter().enumerate().map(|(i, spec)| {
                        render_button(format!("welcome-action-{i}"), spec)
                    })),
            );

        centered(
            WELCOME_MAX_WIDTH,
            Card::new(welcome.title)
                .description(welcome.description)
                .title_size(px(Typography::TEXT_3XL))
                .description_size(px(Typography::TEXT_LG))
                .elevated(true)
                .child(body),
        )
    }

    fn render_preview_body(index: usize, card: &PreviewCard) -> AnyElement {
        match &card.body {
            PreviewBody::Buttons(buttons) => v_flex()
                .w_full()
                .gap_2()
                .children(buttons.iter().enumerate().map(|(i, spec)| {
                    render_button(format!("preview-{index}-button-{i}"), spec)
                }))
                .into_any_element(),
            PreviewBody::Badges(badges) => h_flex()
                .w_full()
                .flex_wrap()
                .gap_2()
                .children(
                    badges
                        .iter()
                        .map(|spec| Badge::new(spec.label).variant(spec.variant)),
                )
                .into_any_element(),
            PreviewBody::Features(items) => v_flex()
                .w_full()
                .items_start()
                .gap_2()
                .text_size(px(Typography::TEXT_SM))
                .text_color(ShowcaseColors::text_body())
                .children(items.iter().map(|item| {
                    h_flex()
                        .gap_2()
                        .child(
                            div()
                                .size(px(MARKER_SIZE))
                                .flex_shrink_0()
                                .rounded_full()
                                .bg(ShowcaseColors::marker()),
                        )
                        .child(*item)
                }))
                .into_any_element(),
        }
    }

    fn render_preview(&self) -> impl IntoElement {
        let preview = &self.page.preview;
        let cards = preview
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                Card::new(card.title)
                    .description(card.description)
                    .child(Self::render_preview_body(index, card))
                    .into_any_element()
            })
            .collect();
        let columns = ResponsiveColumns::PREVIEW.resolve(self.breakpoint);

        centered(
            PREVIEW_MAX_WIDTH,
            v_flex()
                .w_full()
                .gap_8()
                .child(
                    div()
                        .text_center()
                        .text_size(px(Typography::TEXT_3XL))
                        .font_weight(gpui::FontWeight::BOLD)
                        .text_color(ShowcaseColors::text_heading())
                        .child(preview.heading),
                )
                .child(render_grid(cards, columns, px(24.0))),
        )
    }

    fn render_footer(&self) -> impl IntoElement {
        let [attribution, notice] = self.page.footer.lines;

        v_flex()
            .w_full()
            .gap_2()
            .pt_8()
            .border_t_1()
            .border_color(ShowcaseColors::border())
            .child(
                div()
                    .text_center()
                    .text_size(px(Typography::TEXT_BASE))
                    .text_color(ShowcaseColors::text_secondary())
                    .child(attribution),
            )
            .child(
                div()
                    .text_center()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(ShowcaseColors::text_muted())
                    .child(notice),
            )
    }
}

impl Render for ShowcaseView {
    fn render(&mut self, window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let breakpoint = Breakpoint::for_width(window.viewport_size().width);
        if breakpoint != self.breakpoint {
            debug!(from = ?self.breakpoint, to = ?breakpoint, "Viewport breakpoint changed");
            self.breakpoint = breakpoint;
        }

        div()
            .id("showcase-page")
            .size_full()
            .overflow_y_scroll()
            .bg(linear_gradient(
                135.0,
                linear_color_stop(ShowcaseColors::gradient_from_hsla(), 0.0),
                linear_color_stop(ShowcaseColors::gradient_to_hsla(), 1.0),
            ))
            .child(
                v_flex()
                    .w_full()
                    .px(px(PAGE_PADDING_X))
                    .py(px(PAGE_PADDING_Y))
                    .gap(px(64.0))
                    .child(self.render_header())
                    .child(
                        v_flex()
                            .w_full()
                            .gap(px(48.0))
                            .child(self.render_welcome())
                            .child(self.render_preview()),
                    )
                    .child(self.render_footer()),
            )
    }
}

fn render_button(id: String, spec: &ButtonSpec) -> Button {
    Button::new(ElementId::Name(SharedString::from(id)), spec.label)
        .variant(spec.variant)
        .size(spec.size)
        .full_width(spec.full_width)
}

/// Horizontally center `content` and cap its width
fn centered(max_width: f32, content: impl IntoElement) -> impl IntoElement {
    h_flex()
        .w_full()
        .justify_center()
        .child(div().w_full().max_w(px(max_width)).child(content))
}

/// Lay out `items` in rows of `columns` equal-width cells
fn render_grid(items: Vec<AnyElement>, columns: usize, gap: Pixels) -> impl IntoElement {
    let len = items.len();
    let mut items: Vec<Option<AnyElement>> = items.into_iter().map(Some).collect();

    let mut grid = div().w_full().flex().flex_col().gap(gap);
    for row in grid_rows(len, columns) {
        let mut row_el = div().w_full().flex().flex_row().gap(gap);
        for cell in row {
            let mut cell_el = div().flex_1().min_w(px(0.0)).flex().flex_col();
            if let GridCell::Item(i) = cell {
                if let Some(item) = items[i].take() {
                    cell_el = cell_el.child(item);
                }
            }
            row_el = row_el.child(cell_el);
        }
        grid = grid.child(row_el);
    }
    grid
}
