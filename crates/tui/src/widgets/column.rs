//! Status columns and their task cards.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::cursor::Cursor;
use crate::layout::CARD_HEIGHT;
use crate::theme::{Palette, status_color};
use crate::view::{CardView, ColumnView};

/// Renders `columns` side by side with equal widths.
///
/// The column under the cursor gets an accent border and the selected card
/// is highlighted.
pub fn render_columns(
    columns: &[ColumnView],
    cursor: Cursor,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    if columns.is_empty() {
        return;
    }
    let areas = Layout::horizontal(columns.iter().map(|_| Constraint::Fill(1))).split(area);
    for (i, (column, column_area)) in columns.iter().zip(areas.iter()).enumerate() {
        let focused = cursor.column == i;
        let selected = if focused { cursor.card } else { None };
        render_column(column, focused, selected, palette, *column_area, buf);
    }
}

/// Renders a single column: a header with a status dot and card count,
/// then as many cards as fit, scrolled to keep the selection visible.
pub fn render_column(
    column: &ColumnView,
    focused: bool,
    selected: Option<usize>,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let border_color = if focused { palette.accent } else { palette.border };
    let title = Line::from(vec![
        Span::styled(" ● ", Style::default().fg(status_color(&column.status))),
        Span::styled(
            format!("{} ({}) ", column.label, column.cards.len()),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(palette.base());
    let inner = block.inner(area);
    block.render(area, buf);

    if column.cards.is_empty() {
        Paragraph::new(Span::styled("No tasks", Style::default().fg(palette.muted)))
            .render(inner, buf);
        return;
    }

    let visible = usize::from((inner.height / CARD_HEIGHT).max(1));
    let offset = scroll_offset(selected, column.cards.len(), visible);
    let mut y = inner.y;
    for (idx, card) in column.cards.iter().enumerate().skip(offset).take(visible) {
        let slot = Rect::new(inner.x, y, inner.width, CARD_HEIGHT).intersection(inner);
        render_card(card, selected == Some(idx), palette, slot, buf);
        y = y.saturating_add(CARD_HEIGHT);
    }
}

/// Renders a card showing the task title.
pub fn render_card(
    card: &CardView,
    selected: bool,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.width < 4 || area.height < CARD_HEIGHT {
        return;
    }
    let (border_style, title_style) = if selected {
        (
            Style::default().fg(palette.accent),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(palette.border),
            Style::default().fg(palette.text),
        )
    };

    let width = usize::from(area.width.saturating_sub(2));
    Paragraph::new(Span::styled(truncate(&card.title, width), title_style))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .render(area, buf);
}

/// First card to draw so that `selected` stays within `visible` slots.
fn scroll_offset(selected: Option<usize>, len: usize, visible: usize) -> usize {
    match selected {
        Some(idx) if idx >= visible => (idx + 1 - visible).min(len.saturating_sub(visible)),
        _ => 0,
    }
}

/// Cuts `text` to `width` characters, ending with `…` when cut.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
