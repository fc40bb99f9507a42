//! Help overlay widget.
//!
//! Lists the key bindings when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::theme::Palette;

const HELP_WIDTH: u16 = 38;
const HELP_HEIGHT: u16 = 21;

/// Renders the help overlay centered in `area`.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskboard_tui::theme::Palette;
/// use taskboard_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
/// render_help_overlay(&Palette::DARK, area, &mut buf);
/// ```
pub fn render_help_overlay(palette: &Palette, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base());

    Paragraph::new(build_help_lines(palette))
        .block(block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

fn build_help_lines(palette: &Palette) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(palette.accent);
    let text_style = Style::default().fg(palette.text);
    let hint_style = Style::default()
        .fg(palette.muted)
        .add_modifier(Modifier::ITALIC);

    let binding = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<11}"), key_style),
            Span::styled(action, text_style),
        ])
    };

    vec![
        Line::from(""),
        Line::from(Span::styled("  Board", header_style)),
        binding("← → ↑ ↓", "Move between cards"),
        binding("Enter", "Edit selected card"),
        binding("n", "New task"),
        binding("Tab", "Next board"),
        binding("Shift+Tab", "Previous board"),
        binding("s", "Toggle sidebar"),
        binding("t", "Toggle theme"),
        Line::from(""),
        Line::from(Span::styled("  Forms", header_style)),
        binding("Tab", "Next field"),
        binding("← →", "Change status"),
        binding("Enter", "Save"),
        binding("Ctrl+D", "Delete task"),
        binding("Esc", "Cancel"),
        Line::from(""),
        binding("Ctrl+C", "Quit"),
        Line::from(Span::styled("  Press any key to close", hint_style)),
    ]
}

/// Returns a `width` x `height` rectangle centered in `area`, clamped to it.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(popup_width) / 2;
    let y = area.y + area.height.saturating_sub(popup_height) / 2;
    Rect::new(x, y, popup_width, popup_height)
}
