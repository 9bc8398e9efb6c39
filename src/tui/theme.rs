// src/tui/theme.rs — Color scheme and style definitions for the chat screen.

use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // ── Palette ──────────────────────────────────────────────────
    pub const INK: Color = Color::Rgb(235, 235, 240);
    pub const DIM: Color = Color::Rgb(120, 120, 140);
    pub const FAINT: Color = Color::Rgb(80, 80, 100);
    pub const BLUE: Color = Color::Rgb(90, 150, 230);
    pub const GREEN: Color = Color::Rgb(90, 200, 130);
    pub const YELLOW: Color = Color::Rgb(230, 200, 70);
    pub const RED: Color = Color::Rgb(230, 85, 85);
    pub const CYAN: Color = Color::Rgb(90, 200, 220);

    // ── Semantic styles ──────────────────────────────────────────

    /// Screen title / header bar.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::BLUE)
            .add_modifier(Modifier::BOLD)
    }

    /// Block border (normal).
    pub fn border() -> Style {
        Style::default().fg(Theme::FAINT)
    }

    /// Block border while a request is in flight.
    pub fn border_busy() -> Style {
        Style::default().fg(Theme::YELLOW)
    }

    /// Normal body text.
    pub fn text() -> Style {
        Style::default().fg(Theme::INK)
    }

    /// Dimmed / secondary text (metadata annotations, placeholders).
    pub fn text_dim() -> Style {
        Style::default().fg(Theme::DIM)
    }

    /// The "You" speaker tag.
    pub fn user_tag() -> Style {
        Style::default()
            .fg(Theme::GREEN)
            .add_modifier(Modifier::BOLD)
    }

    /// The "Tutor" speaker tag.
    pub fn assistant_tag() -> Style {
        Style::default()
            .fg(Theme::BLUE)
            .add_modifier(Modifier::BOLD)
    }

    /// Inline code and code blocks.
    pub fn code() -> Style {
        Style::default().fg(Theme::CYAN)
    }

    /// Error banner and failure text.
    pub fn error() -> Style {
        Style::default()
            .fg(Theme::RED)
            .add_modifier(Modifier::BOLD)
    }

    /// Busy indicator while waiting on the backend.
    pub fn busy() -> Style {
        Style::default()
            .fg(Theme::YELLOW)
            .add_modifier(Modifier::ITALIC)
    }

    /// Key hint in the footer.
    pub fn key_hint() -> Style {
        Style::default().fg(Theme::BLUE)
    }

    /// Description next to a key hint.
    pub fn key_desc() -> Style {
        Style::default().fg(Theme::DIM)
    }

    /// Style for a score value (color-coded 0-100).
    pub fn score(value: f64) -> Style {
        if value >= 80.0 {
            Style::default().fg(Theme::GREEN)
        } else if value >= 50.0 {
            Style::default().fg(Theme::YELLOW)
        } else {
            Style::default().fg(Theme::RED)
        }
    }
}
