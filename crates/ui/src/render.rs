//! Drawing board state into a [`Document`].
//!
//! Every function here is a pure function of its inputs and the document:
//! nothing reads or writes storage. A missing target element is logged and
//! the affected part of the render is skipped.

use taskboard_protocol::{Task, TaskStatus, tasks_in_column};
use tracing::warn;

use crate::dom::{Display, Document, NodeId};
use crate::layout::{LOGO_DARK, LOGO_LIGHT, classes, data, ids};

fn require(doc: &Document, id: &str) -> Option<NodeId> {
    let node = doc.get_element_by_id(id);
    if node.is_none() {
        warn!(id, "element not found");
    }
    node
}

/// Rebuilds the board buttons and highlights `active`.
pub fn render_board_list(doc: &mut Document, boards: &[String], active: Option<&str>) {
    let Some(nav) = require(doc, ids::BOARDS_NAV) else {
        return;
    };
    doc.clear_children(nav);

    for board in boards {
        let button = doc.create_element("button");
        doc.add_class(button, classes::BOARD_BTN);
        doc.set_text(button, board);
        doc.append_child(nav, button);
    }

    style_active_board(doc, active);
}

/// Marks the board button whose text is exactly `active`.
pub fn style_active_board(doc: &mut Document, active: Option<&str>) {
    for button in doc.query_by_class(classes::BOARD_BTN) {
        let is_active = active.is_some_and(|name| doc.text(button) == name);
        doc.toggle_class(button, classes::ACTIVE, Some(is_active));
    }
}

/// Shows the active board name in the header.
pub fn render_header(doc: &mut Document, active: Option<&str>) {
    if let Some(header) = require(doc, ids::HEADER_BOARD_NAME) {
        doc.set_text(header, active.unwrap_or_default());
    }
}

/// Rebuilds every status column with the cards of `active`.
///
/// Each column is cleared first, so rendering twice never duplicates
/// cards. Tasks whose status has no column are not shown.
pub fn render_columns(doc: &mut Document, tasks: &[Task], active: Option<&str>) {
    for status in TaskStatus::columns() {
        let Some(column) = doc.query_one(classes::COLUMN, data::STATUS, status.as_str()) else {
            warn!(status = %status, "column not found");
            continue;
        };
        render_column(doc, column, &status, tasks, active);
    }
}

fn render_column(
    doc: &mut Document,
    column: NodeId,
    status: &TaskStatus,
    tasks: &[Task],
    active: Option<&str>,
) {
    doc.clear_children(column);

    let head = doc.create_element("div");
    doc.add_class(head, classes::COLUMN_HEAD);
    doc.append_child(column, head);

    let dot = doc.create_element("span");
    doc.add_class(dot, classes::DOT);
    doc.set_id(dot, &format!("{status}-dot"));
    doc.append_child(head, dot);

    let label = doc.create_element("h4");
    doc.add_class(label, classes::COLUMN_HEADER);
    doc.set_text(label, &status.label());
    doc.append_child(head, label);

    let container = doc.create_element("div");
    doc.add_class(container, classes::TASKS_CONTAINER);
    doc.append_child(column, container);

    let Some(board) = active else {
        return;
    };
    for task in tasks_in_column(tasks, board, status) {
        let card = doc.create_element("div");
        doc.add_class(card, classes::TASK);
        doc.set_text(card, &task.title);
        doc.set_data(card, data::TASK_ID, task.id.as_str());
        doc.append_child(container, card);
    }
}

/// Shows or hides the sidebar; the "show sidebar" button gets the inverse.
pub fn apply_sidebar(doc: &mut Document, show: bool) {
    let (sidebar, opener) = if show {
        (Display::Block, Display::Hidden)
    } else {
        (Display::Hidden, Display::Block)
    };
    if let Some(node) = require(doc, ids::SIDE_BAR) {
        doc.set_display(node, sidebar);
    }
    if let Some(node) = require(doc, ids::SHOW_SIDE_BAR_BTN) {
        doc.set_display(node, opener);
    }
}

/// Applies the light or dark theme to the body, switch and logo.
pub fn apply_theme(doc: &mut Document, light: bool) {
    let body = doc.body();
    doc.toggle_class(body, classes::LIGHT_THEME, Some(light));

    if let Some(switch) = require(doc, ids::THEME_SWITCH) {
        if light {
            doc.set_attribute(switch, "checked", "");
        } else {
            doc.remove_attribute(switch, "checked");
        }
    }
    if let Some(logo) = require(doc, ids::LOGO) {
        doc.set_attribute(logo, "src", if light { LOGO_LIGHT } else { LOGO_DARK });
    }
}

/// Shows or hides the modal with element id `id`.
pub fn show_modal(doc: &mut Document, id: &str, show: bool) {
    if let Some(modal) = require(doc, id) {
        doc.set_display(modal, if show { Display::Block } else { Display::Hidden });
    }
}

/// Shows or hides the backdrop behind the add-task modal.
pub fn show_backdrop(doc: &mut Document, show: bool) {
    show_modal(doc, ids::BACKDROP, show);
}

/// Clears the add-task form back to its initial values.
pub fn reset_add_form(doc: &mut Document) {
    for (id, value) in [
        (ids::TITLE_INPUT, ""),
        (ids::DESC_INPUT, ""),
        (ids::SELECT_STATUS, TaskStatus::Todo.as_str()),
    ] {
        if let Some(node) = require(doc, id) {
            doc.set_value(node, value);
        }
    }
}

/// Pre-fills the edit form with `task`'s fields.
pub fn fill_edit_form(doc: &mut Document, task: &Task) {
    for (id, value) in [
        (ids::EDIT_TITLE_INPUT, task.title.as_str()),
        (ids::EDIT_DESC_INPUT, task.description.as_str()),
        (ids::EDIT_SELECT_STATUS, task.status.as_str()),
    ] {
        if let Some(node) = require(doc, id) {
            doc.set_value(node, value);
        }
    }
}

/// Returns the value of the form field with element id `id`.
///
/// A missing field reads as empty.
#[must_use]
pub fn field_value(doc: &Document, id: &str) -> String {
    require(doc, id)
        .map(|node| doc.value(node).to_string())
        .unwrap_or_default()
}
