//! Page Model
//!
//! Toolkit-free description of the showcase page. Every value is a literal
//! fixed at authoring time; the view only reads it.

use crate::components::primitives::{BadgeVariant, ButtonSize, ButtonVariant};

/// A button on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    pub label: &'static str,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub full_width: bool,
}

impl ButtonSpec {
    pub const fn new(label: &'static str, variant: ButtonVariant) -> Self {
        Self {
            label,
            variant,
            size: ButtonSize::Default,
            full_width: false,
        }
    }

    pub const fn large(mut self) -> Self {
        self.size = ButtonSize::Large;
        self
    }

    pub const fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }
}

/// A badge on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeSpec {
    pub label: &'static str,
    pub variant: BadgeVariant,
}

impl BadgeSpec {
    pub const fn new(label: &'static str, variant: BadgeVariant) -> Self {
        Self { label, variant }
    }
}

/// A tag paired with a one-line explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Callout {
    pub tag: BadgeSpec,
    pub description: &'static str,
}

/// Page title block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Welcome card with capability callouts and the two call-to-action buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeCard {
    pub title: &'static str,
    pub description: &'static str,
    /// Sentence shown above the callout grid
    pub intro: &'static str,
    pub callouts: [Callout; 4],
    pub actions: [ButtonSpec; 2],
}

/// Body of a preview card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewBody {
    /// Stacked buttons, one per variant
    Buttons(Vec<ButtonSpec>),
    /// A wrapping row of badges
    Badges(Vec<BadgeSpec>),
    /// A bulleted list, each item preceded by a marker dot
    Features(Vec<&'static str>),
}

/// One card in the component preview grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCard {
    pub title: &'static str,
    pub description: &'static str,
    pub body: PreviewBody,
}

impl PreviewCard {
    /// Buttons rendered inside this card
    pub fn buttons(&self) -> &[ButtonSpec] {
        match &self.body {
            PreviewBody::Buttons(buttons) => buttons,
            _ => &[],
        }
    }

    /// Badges rendered inside this card
    pub fn badges(&self) -> &[BadgeSpec] {
        match &self.body {
            PreviewBody::Badges(badges) => badges,
            _ => &[],
        }
    }

    /// Feature list items rendered inside this card
    pub fn features(&self) -> &[&'static str] {
        match &self.body {
            PreviewBody::Features(items) => items,
            _ => &[],
        }
    }

    pub fn button_count(&self) -> usize {
        self.buttons().len()
    }
}

/// Heading plus the grid of preview cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSection {
    pub heading: &'static str,
    pub cards: [PreviewCard; 3],
}

/// Two centered attribution lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub lines: [&'static str; 2],
}

/// The whole page, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcasePage {
    pub header: Header,
    pub welcome: WelcomeCard,
    pub preview: PreviewSection,
    pub footer: Footer,
}

impl ShowcasePage {
    /// Every button in document order. These are the only interactive elements;
    /// the view gives each one an element id, and otherwise only its scroll
    /// container carries one.
    pub fn buttons(&self) -> impl Iterator<Item = &ButtonSpec> + '_ {
        self.welcome
            .actions
            .iter()
            .chain(self.preview.cards.iter().flat_map(PreviewCard::buttons))
    }

    /// Every badge in document order
    pub fn badges(&self) -> impl Iterator<Item = &BadgeSpec> + '_ {
        self.welcome
            .callouts
            .iter()
            .map(|callout| &callout.tag)
            .chain(self.preview.cards.iter().flat_map(PreviewCard::badges))
    }

    /// Every visible string in document order
    pub fn visible_text(&self) -> Vec<&'static str> {
        let mut text = vec![
            self.header.title,
            self.header.subtitle,
            self.welcome.title,
            self.welcome.description,
            self.welcome.intro,
        ];

        for callout in &self.welcome.callouts {
            text.push(callout.tag.label);
            text.push(callout.description);
        }
        text.extend(self.welcome.actions.iter().map(|b| b.label));

        text.push(self.preview.heading);
        for card in &self.preview.cards {
            text.push(card.title);
            text.push(card.description);
            match &card.body {
                PreviewBody::Buttons(buttons) => text.extend(buttons.iter().map(|b| b.label)),
                PreviewBody::Badges(badges) => text.extend(badges.iter().map(|b| b.label)),
                PreviewBody::Features(items) => text.extend(items.iter().copied()),
            }
        }

        text.extend(self.footer.lines);
        text
    }
}
