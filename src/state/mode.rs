//! Presentation mode state machine

use super::responsive::LayoutReading;

/// Presentation state of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Collapsed,
    /// Inline panel next to the toggle (wide layouts)
    Expanded,
    /// Full-screen form (compact layouts)
    Full,
}

impl Mode {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Collapsed)
    }
}

/// What a mode change did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeTransition {
    Opened(Mode),
    Closed,
    Unchanged,
}

/// Owns the widget's presentation mode.
///
/// The toggle is a binary switch: while open it always collapses, whichever
/// open state is active. The layout reading is only consulted when opening.
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn toggle(&mut self, reading: LayoutReading) -> ModeTransition {
        if self.mode.is_open() {
            return self.close();
        }

        self.mode = match reading {
            LayoutReading::Wide => Mode::Expanded,
            LayoutReading::Compact => Mode::Full,
        };
        tracing::info!("Feedback panel opened in {:?} mode", self.mode);
        ModeTransition::Opened(self.mode)
    }

    pub fn close(&mut self) -> ModeTransition {
        if !self.mode.is_open() {
            return ModeTransition::Unchanged;
        }
        self.mode = Mode::Collapsed;
        tracing::info!("Feedback panel closed");
        ModeTransition::Closed
    }
}
