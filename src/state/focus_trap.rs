//! Keyboard containment for the open panel
//!
//! The trap works over an explicit, ordered list of controls declared by the
//! panel view. Tab and Shift+Tab cycle through that list, wrapping at both
//! ends, and Escape asks the owner to close the panel.

use super::controls::ControlId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of offering a key to the trap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapOutcome {
    /// Focus moved to this control
    Moved(ControlId),
    /// The panel should close
    Close,
    /// Not a trap key, or the trap is inactive
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct FocusTrap {
    controls: Vec<ControlId>,
    focused: Option<usize>,
    active: bool,
}

impl FocusTrap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the trap over `controls` and focus the first one
    pub fn activate(&mut self, controls: &[ControlId]) {
        self.controls = controls.to_vec();
        self.active = !self.controls.is_empty();
        self.focused = if self.active { Some(0) } else { None };
        if !self.active {
            tracing::warn!("Focus trap activated on a panel without focusable controls");
        }
    }

    /// Stop handling keys. Focus is released, not moved anywhere.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.focused = None;
        self.controls.clear();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn controls(&self) -> &[ControlId] {
        &self.controls
    }

    pub fn focused(&self) -> Option<ControlId> {
        self.focused.and_then(|idx| self.controls.get(idx).copied())
    }

    /// Move focus to a specific control, if it belongs to the trap
    pub fn focus(&mut self, control: ControlId) -> bool {
        match self.controls.iter().position(|c| *c == control) {
            Some(idx) if self.active => {
                self.focused = Some(idx);
                true
            }
            _ => false,
        }
    }

    pub fn focus_next(&mut self) -> Option<ControlId> {
        let count = self.controls.len();
        let current = self.focused?;
        self.focused = Some((current + 1) % count);
        self.focused()
    }

    pub fn focus_prev(&mut self) -> Option<ControlId> {
        let count = self.controls.len();
        let current = self.focused?;
        self.focused = Some(if current == 0 { count - 1 } else { current - 1 });
        self.focused()
    }

    /// Handle Tab, Shift+Tab and Escape
    pub fn handle_key(&mut self, key: &KeyEvent) -> TrapOutcome {
        if !self.active {
            return TrapOutcome::Ignored;
        }

        let moved = match key.code {
            KeyCode::Esc => return TrapOutcome::Close,
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => self.focus_prev(),
            KeyCode::Tab => self.focus_next(),
            _ => return TrapOutcome::Ignored,
        };

        match moved {
            Some(control) => {
                tracing::debug!("Focus moved to {control:?}");
                TrapOutcome::Moved(control)
            }
            None => TrapOutcome::Ignored,
        }
    }
}
