//! Page Content
//!
//! The literal text and variant choices of the showcase page.

use crate::components::primitives::{BadgeVariant, ButtonVariant};
use crate::showcase::model::{
    BadgeSpec, ButtonSpec, Callout, Footer, Header, PreviewBody, PreviewCard, PreviewSection,
    ShowcasePage, WelcomeCard,
};

const fn callout(tag: &'static str, description: &'static str) -> Callout {
    Callout {
        tag: BadgeSpec::new(tag, BadgeVariant::Secondary),
        description,
    }
}

/// Build the showcase page
pub fn showcase_page() -> ShowcasePage {
    ShowcasePage {
        header: Header {
            title: "Next.js UI Components",
            subtitle: "A modern component library built with Next.js 15, TypeScript, Tailwind CSS, and shadcn/ui",
        },
        welcome: WelcomeCard {
            title: "Welcome to the Component Showcase",
            description: "Explore our collection of accessible, responsive UI components",
            intro: "This application demonstrates a comprehensive UI component library featuring:",
            callouts: [
                callout(
                    "Accessibility First",
                    "Built with Radix UI primitives for maximum accessibility",
                ),
                callout("Responsive Design", "Mobile-first approach with Tailwind CSS"),
                callout(
                    "Type Safe",
                    "Full TypeScript support for better development experience",
                ),
                callout("Modern Stack", "Next.js 15 with Turbopack for fast development"),
            ],
            actions: [
                ButtonSpec::new("Get Started", ButtonVariant::Primary).large(),
                ButtonSpec::new("View Components", ButtonVariant::Outline).large(),
            ],
        },
        preview: PreviewSection {
            heading: "Component Preview",
            cards: [
                PreviewCard {
                    title: "Buttons",
                    description: "Various button styles and sizes",
                    body: PreviewBody::Buttons(vec![
                        ButtonSpec::new("Primary Button", ButtonVariant::Primary).full_width(),
                        ButtonSpec::new("Secondary", ButtonVariant::Secondary).full_width(),
                        ButtonSpec::new("Outline", ButtonVariant::Outline).full_width(),
                    ]),
                },
                PreviewCard {
                    title: "Badges",
                    description: "Status indicators and labels",
                    body: PreviewBody::Badges(vec![
                        BadgeSpec::new("Default", BadgeVariant::Default),
                        BadgeSpec::new("Secondary", BadgeVariant::Secondary),
                        BadgeSpec::new("Destructive", BadgeVariant::Destructive),
                        BadgeSpec::new("Outline", BadgeVariant::Outline),
                    ]),
                },
                PreviewCard {
                    title: "Features",
                    description: "What's included in this library",
                    body: PreviewBody::Features(vec![
                        "40+ UI Components",
                        "Dark/Light Mode",
                        "Form Validation",
                        "Data Visualization",
                    ]),
                },
            ],
        },
        footer: Footer {
            lines: [
                "Built with Next.js 15, TypeScript, Tailwind CSS, and shadcn/ui",
                "© 2024 Next.js UI Components. Ready for development.",
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_tags_use_secondary_badges() {
        let page = showcase_page();
        assert!(
            page.welcome
                .callouts
                .iter()
                .all(|c| c.tag.variant == BadgeVariant::Secondary)
        );
    }

    #[test]
    fn welcome_actions_are_large_and_not_full_width() {
        let page = showcase_page();
        let [start, view] = page.welcome.actions;
        assert_eq!(start.label, "Get Started");
        assert_eq!(start.variant, ButtonVariant::Primary);
        assert_eq!(view.label, "View Components");
        assert_eq!(view.variant, ButtonVariant::Outline);
        for action in page.welcome.actions {
            assert_eq!(action.size, crate::components::primitives::ButtonSize::Large);
            assert!(!action.full_width);
        }
    }

    #[test]
    fn badge_count_covers_callouts_and_preview() {
        assert_eq!(showcase_page().badges().count(), 8);
    }
}
