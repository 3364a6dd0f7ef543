//! Primitive Components
//!
//! Basic building blocks: buttons, badges, cards and separators.
//! Each exposes a small closed set of variants; callers only pick variants.

pub mod badge;
pub mod button;
pub mod card;
pub mod separator;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
pub use separator::Separator;
