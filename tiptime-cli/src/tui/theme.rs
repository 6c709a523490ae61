//! Diner Receipt Theme System
//!
//! A centralized theme providing a Copper/Mint color palette with dark slate
//! background, shared by every widget in the calculator.

use ratatui::style::{Color, Modifier, Style};

/// The main theme struct containing all colors and pre-computed styles.
#[derive(Debug, Clone)]
pub struct Theme {
    // Primary brand colors
    /// Warm copper - primary accent color
    pub copper: Color,
    /// Mint green - money values and confirmations
    pub mint: Color,
    /// Dark slate - main background
    pub slate: Color,
    /// Light slate - inactive borders and chrome
    pub slate_light: Color,

    // Semantic colors
    /// Primary text color (near-white)
    pub text_primary: Color,
    /// Muted/secondary text color
    pub text_muted: Color,
    /// Warning color (amber)
    pub warning: Color,
    /// Accent color (cyan)
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            copper: Color::Rgb(217, 119, 66),
            mint: Color::Rgb(52, 211, 153),
            slate: Color::Rgb(15, 23, 42),
            slate_light: Color::Rgb(30, 41, 59),
            text_primary: Color::Rgb(248, 250, 252),
            text_muted: Color::Rgb(148, 163, 184),
            warning: Color::Rgb(245, 158, 11),
            accent: Color::Cyan,
        }
    }
}

#[allow(dead_code)]
impl Theme {
    /// Creates a new theme with default colors.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────
    // Pre-computed Styles
    // ─────────────────────────────────────────────────────────────

    /// Title style - bold copper text
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.copper)
            .add_modifier(Modifier::BOLD)
    }

    /// Subtitle/label style - muted text
    pub fn subtitle(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Primary text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Highlighted/selected item style
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.slate)
            .bg(self.copper)
            .add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active(&self) -> Style {
        Style::default().fg(self.copper)
    }

    /// Inactive border style
    pub fn border_inactive(&self) -> Style {
        Style::default().fg(self.slate_light)
    }

    /// Warning style - amber text
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Accent style - cyan text
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Background style for main area
    pub fn bg(&self) -> Style {
        Style::default().bg(self.slate)
    }

    /// Value display style - bold primary text
    pub fn value(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Money value style - bold mint
    pub fn value_money(&self) -> Style {
        Style::default().fg(self.mint).add_modifier(Modifier::BOLD)
    }
}

/// Global theme instance for convenience.
/// In a more complex app, this could be configurable.
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Convenience function to get the default theme.
pub fn theme() -> &'static Theme {
    &THEME
}

// ─────────────────────────────────────────────────────────────────────
// Unicode Icons
// ─────────────────────────────────────────────────────────────────────

/// Icons used throughout the TUI
#[allow(dead_code)]
pub mod icons {
    pub const RECEIPT: &str = "🧾";
    pub const CASH: &str = "💵";
    pub const HELP: &str = "❓";
    pub const CHECK: &str = "✓";
    pub const CROSS: &str = "✗";
    pub const BULLET: &str = "•";
    pub const ARROW_RIGHT: &str = "➜";
    pub const SEPARATOR: &str = "│";

    // Switch glyphs
    pub const SWITCH_ON: &str = "●";
    pub const SWITCH_OFF: &str = "○";
    pub const SWITCH_TRACK: &str = "──";
}
