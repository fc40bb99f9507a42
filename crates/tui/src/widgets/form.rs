//! Add and edit task forms.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::help::centered_rect;
use crate::cursor::FormField;
use crate::layout::{FORM_HEIGHT, FORM_WIDTH};
use crate::theme::Palette;
use crate::view::{FormKind, FormView};

/// Renders `form` as a centered modal over `area`.
///
/// The focused field is marked and, for text fields, shows a cursor.
///
/// ```text
/// ╭ Add New Task ──────────────────╮
/// │                                │
/// │ ▸ Title                        │
/// │   Buy milk▏                    │
/// │   Description                  │
/// │                                │
/// │   Status   ◂ todo ▸            │
/// │                                │
/// │ Enter create · Esc cancel      │
/// ╰────────────────────────────────╯
/// ```
pub fn render_form(
    form: &FormView,
    focused: FormField,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let popup = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
    Clear.render(popup, buf);

    let title = match form.kind {
        FormKind::Add => " Add New Task ",
        FormKind::Edit => " Edit Task ",
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base());

    Paragraph::new(form_lines(form, focused, palette))
        .block(block)
        .wrap(Wrap { trim: false })
        .render(popup, buf);
}

fn form_lines(form: &FormView, focused: FormField, palette: &Palette) -> Vec<Line<'static>> {
    let label = |field: FormField, text: &'static str| {
        if field == focused {
            Span::styled(
                format!(" ▸ {text}"),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!("   {text}"), Style::default().fg(palette.muted))
        }
    };
    let value = |field: FormField, text: &str| {
        let cursor = if field == focused { "▏" } else { "" };
        Line::from(Span::styled(
            format!("   {text}{cursor}"),
            Style::default().fg(palette.text),
        ))
    };

    let status_style = if focused == FormField::Status {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };

    let mut hints = vec![
        Span::styled(" Enter ", Style::default().fg(palette.accent)),
        Span::styled(
            match form.kind {
                FormKind::Add => "create",
                FormKind::Edit => "save",
            },
            Style::default().fg(palette.muted),
        ),
    ];
    if form.kind == FormKind::Edit {
        hints.push(Span::styled(" · Ctrl+D ", Style::default().fg(palette.accent)));
        hints.push(Span::styled("delete", Style::default().fg(palette.muted)));
    }
    hints.push(Span::styled(" · Esc ", Style::default().fg(palette.accent)));
    hints.push(Span::styled("cancel", Style::default().fg(palette.muted)));

    vec![
        Line::from(""),
        Line::from(label(FormField::Title, "Title")),
        value(FormField::Title, &form.title),
        Line::from(label(FormField::Description, "Description")),
        value(FormField::Description, &form.description),
        Line::from(""),
        Line::from(vec![
            label(FormField::Status, "Status"),
            Span::raw("   "),
            Span::styled(format!("◂ {} ▸", form.status), status_style),
        ]),
        Line::from(""),
        Line::from(hints),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn form(kind: FormKind) -> FormView {
        FormView {
            kind,
            title: "Buy milk".to_string(),
            description: "Two liters".to_string(),
            status: "doing".to_string(),
        }
    }

    #[test]
    fn add_form_shows_fields() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_form(&form(FormKind::Add), FormField::Title, &Palette::DARK, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Add New Task"));
        assert!(content.contains("▸ Title"));
        assert!(content.contains("Buy milk▏"));
        assert!(content.contains("Two liters"));
        assert!(content.contains("◂ doing ▸"));
        assert!(!content.contains("Ctrl+D"));
    }

    #[test]
    fn edit_form_offers_delete() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_form(
            &form(FormKind::Edit),
            FormField::Status,
            &Palette::LIGHT,
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("Edit Task"));
        assert!(content.contains("▸ Status"));
        assert!(content.contains("Ctrl+D delete"));
        assert!(!content.contains("▏"));
    }
}
