//! Parrot/neon theme tokens for the StockView TUI
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, headings)
//! - **Positive**: Neon green (chosen value)
//! - **Warning**: Neon orange (loading indicator)
//! - **Neutral**: Cool purple (secondary info)
//! - **Muted**: Steel blue (hints, placeholder)

use ratatui::style::{Color, Modifier, Style};

/// Parrot/neon theme for the TUI
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Neon green (chosen value)
    pub positive: Color,
    /// Neon orange (in-progress)
    pub warning: Color,
    /// Cool purple (neutral info, secondary)
    pub neutral: Color,
    /// Steel blue (muted text, disabled)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub const fn parrot_neon() -> Self {
        THEME
    }
}

const THEME: Theme = Theme {
    accent: Color::Rgb(0, 255, 255),
    positive: Color::Rgb(0, 255, 128),
    warning: Color::Rgb(255, 140, 0),
    neutral: Color::Rgb(147, 112, 219),
    muted: Color::Rgb(100, 149, 237),
    text_primary: Color::White,
};

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(THEME.positive)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

/// Row under the selector cursor.
pub fn cursor() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}
