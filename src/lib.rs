//! Component Showcase Library
//!
//! A native landing page for a UI component library: a header, a welcome
//! card, a grid of component previews and a footer, composed from button,
//! badge, card and separator primitives.

pub mod app;
pub mod components;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod showcase;
pub mod states;
pub mod theme;
pub mod views;
