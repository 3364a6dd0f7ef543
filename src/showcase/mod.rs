//! Showcase - The Page Model
//!
//! A fixed, data-free description of the showcase page plus the responsive
//! layout rules used to arrange it. Nothing here depends on a window.

pub mod content;
pub mod layout;
pub mod model;

pub use content::showcase_page;
pub use layout::{grid_rows, Breakpoint, GridCell, ResponsiveColumns};
pub use model::*;
