//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{actions, KeyBinding};

use crate::helpers::is_macos;

actions!(showcase, [Quit]);

/// Keystroke bound to [`Quit`] on the current platform
pub fn quit_keystroke() -> &'static str {
    if is_macos() { "cmd-q" } else { "ctrl-q" }
}

/// Global key bindings
pub fn key_bindings() -> Vec<KeyBinding> {
    vec![KeyBinding::new(quit_keystroke(), Quit, None)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keystroke_uses_platform_modifier() {
        let expected = if cfg!(target_os = "macos") { "cmd-q" } else { "ctrl-q" };
        assert_eq!(quit_keystroke(), expected);
    }
}
