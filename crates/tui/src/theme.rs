//! Light and dark palettes.

use ratatui::style::{Color, Style};
use taskboard_protocol::TaskStatus;

/// Colors used to paint the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Regular text.
    pub text: Color,
    /// Hints and inactive elements.
    pub muted: Color,
    /// Unfocused borders.
    pub border: Color,
    /// Active board, selected card and focused field.
    pub accent: Color,
}

impl Palette {
    /// The dark palette.
    pub const DARK: Self = Self {
        background: Color::Reset,
        text: Color::White,
        muted: Color::DarkGray,
        border: Color::DarkGray,
        accent: Color::LightMagenta,
    };

    /// The light palette.
    pub const LIGHT: Self = Self {
        background: Color::White,
        text: Color::Black,
        muted: Color::Gray,
        border: Color::Gray,
        accent: Color::Magenta,
    };

    /// Returns the palette for the light or dark theme.
    #[must_use]
    pub const fn for_theme(light: bool) -> Self {
        if light { Self::LIGHT } else { Self::DARK }
    }

    /// Base style: text on background.
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }
}

/// Returns the color of the dot in a column header.
#[must_use]
pub fn status_color(status: &TaskStatus) -> Color {
    match status {
        TaskStatus::Todo => Color::Cyan,
        TaskStatus::Doing => Color::LightBlue,
        TaskStatus::Done => Color::Green,
        TaskStatus::Other(_) => Color::DarkGray,
    }
}
