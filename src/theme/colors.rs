//! Colors - Showcase Theme Colors

use gpui::{rgb, Hsla, Rgba};

/// Showcase color palette - All colors are accessed via associated functions
pub struct ShowcaseColors;

impl ShowcaseColors {
    // Page background
    /// Gradient start (top left) - Gray 50
    pub fn gradient_from() -> Rgba { rgb(0xf9fafb) }
    /// Gradient end (bottom right) - Gray 100
    pub fn gradient_to() -> Rgba { rgb(0xf3f4f6) }

    // Surfaces
    /// Card background
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Text colors
    /// Headings - Gray 900
    pub fn text_heading() -> Rgba { rgb(0x111827) }
    /// Body text - Gray 700
    pub fn text_body() -> Rgba { rgb(0x374151) }
    /// Secondary text - Gray 600
    pub fn text_secondary() -> Rgba { rgb(0x4b5563) }
    /// Muted text - Gray 500
    pub fn text_muted() -> Rgba { rgb(0x6b7280) }

    // Variant colors
    /// Primary fill
    pub fn primary() -> Rgba { rgb(0x18181b) }
    /// Text on primary fill
    pub fn primary_foreground() -> Rgba { rgb(0xfafafa) }
    /// Primary hover
    pub fn primary_hover() -> Rgba { rgb(0x3f3f46) }
    /// Secondary fill
    pub fn secondary() -> Rgba { rgb(0xf4f4f5) }
    /// Text on secondary fill
    pub fn secondary_foreground() -> Rgba { rgb(0x18181b) }
    /// Secondary hover
    pub fn secondary_hover() -> Rgba { rgb(0xe4e4e7) }
    /// Destructive fill - Red
    pub fn destructive() -> Rgba { rgb(0xef4444) }
    /// Text on destructive fill
    pub fn destructive_foreground() -> Rgba { rgb(0xfafafa) }
    /// Outline hover
    pub fn outline_hover() -> Rgba { rgb(0xf4f4f5) }
    /// Transparent fill
    pub fn transparent() -> Rgba { gpui::rgba(0x00000000) }

    // Status colors
    /// Feature marker - Green 500
    pub fn marker() -> Rgba { rgb(0x22c55e) }
}

/// Convert Rgba to Hsla for gradient stops
impl ShowcaseColors {
    pub fn gradient_from_hsla() -> Hsla {
        Hsla::from(Self::gradient_from())
    }

    pub fn gradient_to_hsla() -> Hsla {
        Hsla::from(Self::gradient_to())
    }
}
