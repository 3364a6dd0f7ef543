//! State Management Layer
//!
//! The showcase page itself is stateless; the only application state is the
//! persisted window geometry and logging settings.

mod app;

pub use app::*;
