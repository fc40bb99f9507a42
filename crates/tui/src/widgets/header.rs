//! Header bar with the active board name and a help cue.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::theme::Palette;

/// Renders the header. An empty `board_name` shows a placeholder.
pub fn render_header(board_name: &str, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(palette.base());
    let inner = block.inner(area);
    block.render(area, buf);

    let [title_area, hint_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(30)]).areas(inner);

    let title = if board_name.is_empty() {
        Span::styled("No boards yet", Style::default().fg(palette.muted))
    } else {
        Span::styled(
            board_name.to_string(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )
    };
    Paragraph::new(Line::from(title)).render(title_area, buf);

    Paragraph::new(Line::from(vec![
        Span::styled("n", Style::default().fg(palette.accent)),
        Span::styled(" add task  ", Style::default().fg(palette.muted)),
        Span::styled("?", Style::default().fg(palette.accent)),
        Span::styled(" for help", Style::default().fg(palette.muted)),
    ]))
    .alignment(Alignment::Right)
    .render(hint_area, buf);
}
