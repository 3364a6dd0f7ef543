//! View Components
//!
//! ## Layout Structure
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                   Header                      │
//! │        ┌──────────────────────────┐          │
//! │        │       Welcome card       │          │
//! │        └──────────────────────────┘          │
//! │               Component Preview               │
//! │   ┌──────────┬──────────┬──────────┐         │
//! │   │ Buttons  │  Badges  │ Features │         │
//! │   └──────────┴──────────┴──────────┘         │
//! │                   Footer                      │
//! └──────────────────────────────────────────────┘
//! ```

mod showcase;

pub use showcase::*;
