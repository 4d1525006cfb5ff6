//! Neon-on-charcoal theme tokens.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, active nav button, titles)
//! - **Positive**: Neon green (successful searches, selected card)
//! - **Negative**: Hot pink (errors)
//! - **Warning**: Neon orange (empty results, hints)
//! - **Neutral**: Cool purple (secondary labels)
//! - **Muted**: Steel blue (inactive text)

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_PRIMARY: Color = Color::White;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT_PRIMARY)
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

/// Nav button look: lit buttons are reversed accent.
pub fn nav_button(lit: bool) -> Style {
    if lit {
        Style::default()
            .fg(BACKGROUND)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        muted()
    }
}

/// Card border: the cursor card is highlighted.
pub fn card_border(selected: bool) -> Style {
    if selected {
        positive().add_modifier(Modifier::BOLD)
    } else {
        neutral()
    }
}

/// Clickable control such as `[ Search ]` or `[ View Details ]`.
pub fn control(focused: bool) -> Style {
    if focused {
        accent().add_modifier(Modifier::REVERSED)
    } else {
        accent()
    }
}
