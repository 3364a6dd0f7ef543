use showcase_gui::components::primitives::{BadgeVariant, ButtonVariant};
use showcase_gui::showcase::{showcase_page, PreviewBody};

#[test]
fn header_has_title_and_subtitle() {
    let page = showcase_page();
    assert_eq!(page.header.title, "Next.js UI Components");
    assert_eq!(
        page.header.subtitle,
        "A modern component library built with Next.js 15, TypeScript, Tailwind CSS, and shadcn/ui"
    );
}

#[test]
fn footer_has_two_attribution_lines() {
    let page = showcase_page();
    assert_eq!(
        page.footer.lines,
        [
            "Built with Next.js 15, TypeScript, Tailwind CSS, and shadcn/ui",
            "© 2024 Next.js UI Components. Ready for development.",
        ]
    );
}

#[test]
fn header_and_footer_text_appears_once() {
    let page = showcase_page();
    let text = page.visible_text();
    for needle in [page.header.title, page.header.subtitle]
        .into_iter()
        .chain(page.footer.lines)
    {
        assert_eq!(text.iter().filter(|t| **t == needle).count(), 1, "{needle}");
    }
}

#[test]
fn welcome_card_pairs_tags_with_descriptions() {
    let page = showcase_page();
    let pairs: Vec<_> = page
        .welcome
        .callouts
        .iter()
        .map(|c| (c.tag.label, c.description))
        .collect();

    assert_eq!(
        pairs,
        vec![
            (
                "Accessibility First",
                "Built with Radix UI primitives for maximum accessibility"
            ),
            ("Responsive Design", "Mobile-first approach with Tailwind CSS"),
            (
                "Type Safe",
                "Full TypeScript support for better development experience"
            ),
            ("Modern Stack", "Next.js 15 with Turbopack for fast development"),
        ]
    );
}

#[test]
fn preview_section_has_three_cards_in_order() {
    let page = showcase_page();
    let titles: Vec<_> = page.preview.cards.iter().map(|c| c.title).collect();
    assert_eq!(titles, vec!["Buttons", "Badges", "Features"]);
}

#[test]
fn buttons_card_shows_three_full_width_variants() {
    let page = showcase_page();
    let card = &page.preview.cards[0];
    assert!(matches!(card.body, PreviewBody::Buttons(_)));

    let variants: Vec<_> = card.buttons().iter().map(|b| b.variant).collect();
    assert_eq!(
        variants,
        vec![
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Outline
        ]
    );
    assert!(card.buttons().iter().all(|b| b.full_width));
    assert_eq!(card.button_count(), 3);
}

#[test]
fn badges_card_shows_four_variants() {
    let page = showcase_page();
    let card = &page.preview.cards[1];

    let variants: Vec<_> = card.badges().iter().map(|b| b.variant).collect();
    assert_eq!(
        variants,
        vec![
            BadgeVariant::Default,
            BadgeVariant::Secondary,
            BadgeVariant::Destructive,
            BadgeVariant::Outline
        ]
    );
}

#[test]
fn features_card_lists_four_items() {
    let page = showcase_page();
    let card = &page.preview.cards[2];
    assert_eq!(
        card.features(),
        &[
            "40+ UI Components",
            "Dark/Light Mode",
            "Form Validation",
            "Data Visualization"
        ]
    );
    assert_eq!(card.button_count(), 0);
}

#[test]
fn rendering_twice_is_identical() {
    assert_eq!(showcase_page(), showcase_page());
}

#[test]
fn root_page_has_welcome_text_and_five_buttons() {
    let page = showcase_page();
    assert!(
        page.visible_text()
            .contains(&"Welcome to the Component Showcase")
    );

    let labels: Vec<_> = page.buttons().map(|b| b.label).collect();
    assert_eq!(
        labels,
        vec![
            "Get Started",
            "View Components",
            "Primary Button",
            "Secondary",
            "Outline"
        ]
    );
}

#[test]
fn visible_text_is_in_document_order() {
    let page = showcase_page();
    let text = page.visible_text();
    let position = |s: &str| text.iter().position(|t| *t == s);

    assert_eq!(text.first(), Some(&"Next.js UI Components"));
    assert_eq!(
        text.last(),
        Some(&"© 2024 Next.js UI Components. Ready for development.")
    );
    assert!(position("Component Preview") > position("View Components"));
    assert!(position("Features") > position("Badges"));
}
