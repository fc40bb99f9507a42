//! Sidebar with one line per board.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::theme::Palette;
use crate::view::BoardEntry;

/// Renders the board list; the active board is marked and highlighted.
pub fn render_sidebar(boards: &[BoardEntry], palette: &Palette, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(Span::styled(
            format!(" All Boards ({}) ", boards.len()),
            Style::default().fg(palette.muted),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(palette.base());

    let lines: Vec<Line> = boards
        .iter()
        .map(|board| {
            if board.active {
                Line::from(Span::styled(
                    format!("▸ {}", board.name),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", board.name),
                    Style::default().fg(palette.text),
                ))
            }
        })
        .collect();

    Paragraph::new(lines).block(block).render(area, buf);
}
