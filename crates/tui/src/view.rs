//! A read-only snapshot of the board document.
//!
//! The terminal never reads storage or controller internals: everything it
//! paints is read back from the [`Document`] the render layer produced.

use taskboard_protocol::TaskStatus;
use taskboard_ui::dom::{Document, NodeId};
use taskboard_ui::layout::{classes, data, ids};

/// A board button in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEntry {
    /// Button element.
    pub node: NodeId,
    /// Board name.
    pub name: String,
    /// Whether this is the active board.
    pub active: bool,
}

/// A task card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Card element; clicking it opens the edit form.
    pub node: NodeId,
    /// Id of the task the card shows.
    pub task_id: String,
    /// Task title.
    pub title: String,
}

/// A status column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    /// Status of the column.
    pub status: TaskStatus,
    /// Header label, e.g. `TODO`.
    pub label: String,
    /// Cards in display order.
    pub cards: Vec<CardView>,
}

/// Which form is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// The add-task form.
    Add,
    /// The edit-task form.
    Edit,
}

impl FormKind {
    /// Element ids of the title, description and status fields.
    #[must_use]
    pub const fn field_ids(self) -> [&'static str; 3] {
        match self {
            Self::Add => [ids::TITLE_INPUT, ids::DESC_INPUT, ids::SELECT_STATUS],
            Self::Edit => [
                ids::EDIT_TITLE_INPUT,
                ids::EDIT_DESC_INPUT,
                ids::EDIT_SELECT_STATUS,
            ],
        }
    }
}

/// Field values of the open form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// Which form is open.
    pub kind: FormKind,
    /// Title field.
    pub title: String,
    /// Description field.
    pub description: String,
    /// Status field.
    pub status: String,
}

/// Everything the terminal paints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Sidebar board buttons.
    pub boards: Vec<BoardEntry>,
    /// Name in the header; empty when there is no board.
    pub board_name: String,
    /// Status columns in display order.
    pub columns: Vec<ColumnView>,
    /// Whether the sidebar is shown.
    pub sidebar_visible: bool,
    /// Whether the light theme is on.
    pub light_theme: bool,
    /// The open form, if any.
    pub form: Option<FormView>,
}

impl BoardView {
    /// Reads the view out of `doc`.
    #[must_use]
    pub fn from_document(doc: &Document) -> Self {
        let boards = doc
            .query_by_class(classes::BOARD_BTN)
            .into_iter()
            .map(|node| BoardEntry {
                node,
                name: doc.text(node).to_string(),
                active: doc.has_class(node, classes::ACTIVE),
            })
            .collect();

        let columns = doc
            .query_by_class(classes::COLUMN)
            .into_iter()
            .map(|column| read_column(doc, column))
            .collect();

        Self {
            boards,
            board_name: text_of(doc, ids::HEADER_BOARD_NAME),
            columns,
            sidebar_visible: rendered(doc, ids::SIDE_BAR),
            light_theme: doc.has_class(doc.body(), classes::LIGHT_THEME),
            form: read_form(doc),
        }
    }

    /// Returns the number of cards in each column.
    #[must_use]
    pub fn card_counts(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.cards.len()).collect()
    }

    /// Returns the card at `column`, `index`.
    #[must_use]
    pub fn card(&self, column: usize, index: usize) -> Option<&CardView> {
        self.columns.get(column)?.cards.get(index)
    }
}

fn read_column(doc: &Document, column: NodeId) -> ColumnView {
    let status = TaskStatus::from(doc.data(column, data::STATUS).unwrap_or_default());
    let label = doc
        .query_by_class_within(column, classes::COLUMN_HEADER)
        .first()
        .map_or_else(|| status.label(), |node| doc.text(*node).to_string());
    let cards = doc
        .query_by_class_within(column, classes::TASK)
        .into_iter()
        .map(|node| CardView {
            node,
            task_id: doc.data(node, data::TASK_ID).unwrap_or_default().to_string(),
            title: doc.text(node).to_string(),
        })
        .collect();

    ColumnView {
        status,
        label,
        cards,
    }
}

fn read_form(doc: &Document) -> Option<FormView> {
    let kind = if rendered(doc, ids::ADD_MODAL) {
        FormKind::Add
    } else if rendered(doc, ids::EDIT_MODAL) {
        FormKind::Edit
    } else {
        return None;
    };
    let [title, description, status] = kind.field_ids().map(|id| value_of(doc, id));
    Some(FormView {
        kind,
        title,
        description,
        status,
    })
}

fn rendered(doc: &Document, id: &str) -> bool {
    doc.get_element_by_id(id)
        .is_some_and(|node| doc.is_rendered(node))
}

fn text_of(doc: &Document, id: &str) -> String {
    doc.get_element_by_id(id)
        .map(|node| doc.text(node).to_string())
        .unwrap_or_default()
}

fn value_of(doc: &Document, id: &str) -> String {
    doc.get_element_by_id(id)
        .map(|node| doc.value(node).to_string())
        .unwrap_or_default()
}
