//! The fixed page skeleton the board binds to.
//!
//! Element ids and classes are the contract between the render layer, the
//! controller and any host that displays the document.

use crate::dom::{Display, Document, NodeId};
use taskboard_protocol::TaskStatus;

/// Element ids.
pub mod ids {
    /// Sidebar container.
    pub const SIDE_BAR: &str = "side-bar-div";
    /// Container of the board buttons.
    pub const BOARDS_NAV: &str = "boards-nav-links-div";
    /// Button hiding the sidebar.
    pub const HIDE_SIDE_BAR_BTN: &str = "hide-side-bar-btn";
    /// Button showing the sidebar.
    pub const SHOW_SIDE_BAR_BTN: &str = "show-side-bar-btn";
    /// Theme switch.
    pub const THEME_SWITCH: &str = "switch";
    /// Logo image.
    pub const LOGO: &str = "logo";
    /// Header showing the active board name.
    pub const HEADER_BOARD_NAME: &str = "header-board-name";
    /// Button opening the add-task modal.
    pub const ADD_NEW_TASK_BTN: &str = "add-new-task-btn";

    /// Add-task modal form.
    pub const ADD_MODAL: &str = "modal-window";
    /// Add-task title input.
    pub const TITLE_INPUT: &str = "title-input";
    /// Add-task description input.
    pub const DESC_INPUT: &str = "desc-input";
    /// Add-task status select.
    pub const SELECT_STATUS: &str = "select-status";
    /// Add-task submit button.
    pub const CREATE_TASK_BTN: &str = "create-task-btn";
    /// Add-task cancel button.
    pub const CANCEL_ADD_TASK_BTN: &str = "cancel-add-task-btn";
    /// Backdrop behind the add-task modal.
    pub const BACKDROP: &str = "filterDiv";

    /// Edit-task modal.
    pub const EDIT_MODAL: &str = "edit-task-modal-window";
    /// Edit-task title input.
    pub const EDIT_TITLE_INPUT: &str = "edit-task-title-input";
    /// Edit-task description input.
    pub const EDIT_DESC_INPUT: &str = "edit-task-desc-input";
    /// Edit-task status select.
    pub const EDIT_SELECT_STATUS: &str = "edit-select-status";
    /// Edit-task save button.
    pub const SAVE_TASK_CHANGES_BTN: &str = "save-task-changes-btn";
    /// Edit-task delete button.
    pub const DELETE_TASK_BTN: &str = "delete-task-btn";
    /// Edit-task cancel button.
    pub const CANCEL_EDIT_BTN: &str = "cancel-edit-btn";
}

/// Element classes.
pub mod classes {
    /// A board button in the sidebar.
    pub const BOARD_BTN: &str = "board-btn";
    /// Marks the active board button.
    pub const ACTIVE: &str = "active";
    /// A status column; carries `data-status`.
    pub const COLUMN: &str = "column-div";
    /// Column header row.
    pub const COLUMN_HEAD: &str = "column-head-div";
    /// Column header label.
    pub const COLUMN_HEADER: &str = "columnHeader";
    /// Colored status dot in the column header.
    pub const DOT: &str = "dot";
    /// Card container inside a column.
    pub const TASKS_CONTAINER: &str = "tasks-container";
    /// A task card; carries `data-task-id`.
    pub const TASK: &str = "task-div";
    /// Body class of the light theme.
    pub const LIGHT_THEME: &str = "light-theme";
    /// Wrapper of the theme switch.
    pub const TOGGLE: &str = "toggle-div";
}

/// `data-*` keys.
pub mod data {
    /// Status of a column.
    pub const STATUS: &str = "status";
    /// Id of the task shown by a card.
    pub const TASK_ID: &str = "task-id";
}

/// Logo shown with the light theme.
pub const LOGO_LIGHT: &str = "./assets/logo-light.svg";

/// Logo shown with the dark theme.
pub const LOGO_DARK: &str = "./assets/logo-dark.svg";

impl Document {
    /// Builds the empty page skeleton.
    ///
    /// Board buttons, column contents and cards are filled in by the
    /// render layer. Both modals and the backdrop start hidden.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_ui::dom::Document;
    /// use taskboard_ui::layout::{classes, ids};
    ///
    /// let doc = Document::board_layout();
    /// assert!(doc.get_element_by_id(ids::HEADER_BOARD_NAME).is_some());
    /// assert_eq!(doc.query_by_class(classes::COLUMN).len(), 3);
    /// ```
    #[must_use]
    pub fn board_layout() -> Self {
        let mut doc = Self::new();
        let body = doc.body();

        let sidebar = element(&mut doc, body, "div", Some(ids::SIDE_BAR));
        let logo = element(&mut doc, sidebar, "img", Some(ids::LOGO));
        doc.set_attribute(logo, "src", LOGO_DARK);
        element(&mut doc, sidebar, "div", Some(ids::BOARDS_NAV));
        let toggle = element(&mut doc, sidebar, "div", None);
        doc.add_class(toggle, classes::TOGGLE);
        let switch = element(&mut doc, toggle, "input", Some(ids::THEME_SWITCH));
        doc.set_attribute(switch, "type", "checkbox");
        button(&mut doc, sidebar, ids::HIDE_SIDE_BAR_BTN, "Hide Sidebar");
        button(&mut doc, body, ids::SHOW_SIDE_BAR_BTN, "Show Sidebar");

        let header = element(&mut doc, body, "header", None);
        element(&mut doc, header, "h3", Some(ids::HEADER_BOARD_NAME));
        button(&mut doc, header, ids::ADD_NEW_TASK_BTN, "+ Add New Task");

        let container = element(&mut doc, body, "div", None);
        doc.add_class(container, "container");
        for status in TaskStatus::columns() {
            let column = element(&mut doc, container, "div", None);
            doc.add_class(column, classes::COLUMN);
            doc.set_data(column, data::STATUS, status.as_str());
        }

        let add = element(&mut doc, body, "form", Some(ids::ADD_MODAL));
        doc.set_display(add, Display::Hidden);
        element(&mut doc, add, "input", Some(ids::TITLE_INPUT));
        element(&mut doc, add, "textarea", Some(ids::DESC_INPUT));
        status_select(&mut doc, add, ids::SELECT_STATUS);
        button(&mut doc, add, ids::CREATE_TASK_BTN, "Create Task");
        button(&mut doc, add, ids::CANCEL_ADD_TASK_BTN, "Cancel");

        let backdrop = element(&mut doc, body, "div", Some(ids::BACKDROP));
        doc.set_display(backdrop, Display::Hidden);

        let edit = element(&mut doc, body, "div", Some(ids::EDIT_MODAL));
        doc.set_display(edit, Display::Hidden);
        element(&mut doc, edit, "input", Some(ids::EDIT_TITLE_INPUT));
        element(&mut doc, edit, "textarea", Some(ids::EDIT_DESC_INPUT));
        status_select(&mut doc, edit, ids::EDIT_SELECT_STATUS);
        button(&mut doc, edit, ids::SAVE_TASK_CHANGES_BTN, "Save Changes");
        button(&mut doc, edit, ids::DELETE_TASK_BTN, "Delete Task");
        button(&mut doc, edit, ids::CANCEL_EDIT_BTN, "Cancel");

        doc
    }
}

fn element(doc: &mut Document, parent: NodeId, tag: &str, id: Option<&str>) -> NodeId {
    let node = doc.create_element(tag);
    if let Some(id) = id {
        doc.set_id(node, id);
    }
    doc.append_child(parent, node);
    node
}

fn button(doc: &mut Document, parent: NodeId, id: &str, label: &str) -> NodeId {
    let node = element(doc, parent, "button", Some(id));
    doc.set_text(node, label);
    node
}

fn status_select(doc: &mut Document, parent: NodeId, id: &str) -> NodeId {
    let select = element(doc, parent, "select", Some(id));
    doc.set_value(select, TaskStatus::Todo.as_str());
    for status in TaskStatus::columns() {
        let option = element(doc, select, "option", None);
        doc.set_attribute(option, "value", status.as_str());
        doc.set_text(option, status.as_str());
    }
    select
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bound_id_exists() {
        let doc = Document::board_layout();
        for id in [
            ids::SIDE_BAR,
            ids::BOARDS_NAV,
            ids::HIDE_SIDE_BAR_BTN,
            ids::SHOW_SIDE_BAR_BTN,
            ids::THEME_SWITCH,
            ids::LOGO,
            ids::HEADER_BOARD_NAME,
            ids::ADD_NEW_TASK_BTN,
            ids::ADD_MODAL,
            ids::TITLE_INPUT,
            ids::DESC_INPUT,
            ids::SELECT_STATUS,
            ids::CREATE_TASK_BTN,
            ids::CANCEL_ADD_TASK_BTN,
            ids::BACKDROP,
            ids::EDIT_MODAL,
            ids::EDIT_TITLE_INPUT,
            ids::EDIT_DESC_INPUT,
            ids::EDIT_SELECT_STATUS,
            ids::SAVE_TASK_CHANGES_BTN,
            ids::DELETE_TASK_BTN,
            ids::CANCEL_EDIT_BTN,
        ] {
            assert!(doc.get_element_by_id(id).is_some(), "missing #{id}");
        }
    }

    #[test]
    fn columns_follow_status_order() {
        let doc = Document::board_layout();
        let statuses: Vec<_> = doc
            .query_by_class(classes::COLUMN)
            .into_iter()
            .map(|c| doc.data(c, data::STATUS).unwrap_or_default().to_string())
            .collect();
        assert_eq!(statuses, vec!["todo", "doing", "done"]);
    }

    #[test]
    fn modals_start_hidden() {
        let doc = Document::board_layout();
        for id in [ids::ADD_MODAL, ids::EDIT_MODAL, ids::BACKDROP] {
            let node = doc.get_element_by_id(id).unwrap();
            assert!(!doc.is_rendered(node), "#{id} should be hidden");
        }
    }
}
