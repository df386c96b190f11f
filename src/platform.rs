//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the toggle shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const TOGGLE_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const TOGGLE_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Toggle shortcut display
#[cfg(target_os = "macos")]
pub const TOGGLE_SHORTCUT: &str = "Cmd+F";

#[cfg(not(target_os = "macos"))]
pub const TOGGLE_SHORTCUT: &str = "Ctrl+F";

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
