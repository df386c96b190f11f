//! Light and dark palettes selected by the `darkMode` flag

use crate::state::FeatureFlags;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        background: Color::White,
        text: Color::Black,
        muted: Color::Gray,
        accent: Color::Magenta,
        error: Color::Red,
        success: Color::Green,
    };

    pub const DARK: Theme = Theme {
        background: Color::Black,
        text: Color::White,
        muted: Color::DarkGray,
        accent: Color::LightMagenta,
        error: Color::LightRed,
        success: Color::LightGreen,
    };

    pub fn for_flags(flags: &FeatureFlags) -> Self {
        if flags.dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}
