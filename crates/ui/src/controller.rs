//! The interaction controller.
//!
//! [`Controller`] ties the pieces together: it resolves clicks on document
//! elements to [`UiEvent`]s, applies each event to the [`AppState`], calls
//! the task repository, persists UI flags and asks the render layer to
//! redraw whatever changed.

use std::collections::HashMap;

use taskboard_protocol::{
    NewTask, Task, TaskStatus, TaskUpdate, derive_boards, resolve_active_board,
};
use taskboard_store::{Storage, TaskRepository, UiFlags};
use tracing::{debug, info, instrument, warn};

use crate::dom::{Document, NodeId};
use crate::error::Result;
use crate::event::UiEvent;
use crate::layout::{classes, data, ids};
use crate::render;
use crate::state::{AppState, ModalState};

/// Board assigned to a task created while no board exists yet.
pub const DEFAULT_BOARD_NAME: &str = "Main";

/// Fixed element bindings installed by [`Controller::attach_listeners`].
const BINDINGS: &[(&str, UiEvent)] = &[
    (ids::ADD_NEW_TASK_BTN, UiEvent::OpenAddTask),
    (ids::CREATE_TASK_BTN, UiEvent::SubmitAddTask),
    (ids::CANCEL_ADD_TASK_BTN, UiEvent::CancelAddTask),
    (ids::BACKDROP, UiEvent::BackdropClicked),
    (ids::SAVE_TASK_CHANGES_BTN, UiEvent::SaveTaskChanges),
    (ids::DELETE_TASK_BTN, UiEvent::DeleteTask),
    (ids::CANCEL_EDIT_BTN, UiEvent::CancelEdit),
    (ids::HIDE_SIDE_BAR_BTN, UiEvent::HideSidebar),
    (ids::SHOW_SIDE_BAR_BTN, UiEvent::ShowSidebar),
    (ids::THEME_SWITCH, UiEvent::ToggleTheme),
];

/// Owns the document, the task repository and the interaction state.
///
/// # Examples
///
/// ```
/// use taskboard_store::MemoryStorage;
/// use taskboard_ui::dom::Document;
/// use taskboard_ui::layout::ids;
/// use taskboard_ui::{Controller, ModalState};
///
/// # fn main() -> taskboard_ui::Result<()> {
/// let mut controller = Controller::new(MemoryStorage::new(), Document::board_layout());
/// controller.attach_listeners();
///
/// controller.click_id(ids::ADD_NEW_TASK_BTN)?;
/// assert_eq!(controller.state().modal, ModalState::AddTask);
///
/// controller.set_field(ids::TITLE_INPUT, "First task");
/// controller.click_id(ids::CREATE_TASK_BTN)?;
/// assert_eq!(controller.tasks()?.len(), 1);
/// assert_eq!(controller.state().modal, ModalState::Closed);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Controller<S> {
    repo: TaskRepository<S>,
    document: Document,
    state: AppState,
    listeners: HashMap<&'static str, UiEvent>,
    listeners_attached: bool,
}

impl<S: Storage> Controller<S> {
    /// Creates a controller over `storage` and `document`.
    ///
    /// Nothing is rendered and no listener is attached yet; see
    /// [`bootstrap`](crate::bootstrap()) for the full start-up sequence.
    pub fn new(storage: S, document: Document) -> Self {
        Self {
            repo: TaskRepository::new(storage),
            document,
            state: AppState::default(),
            listeners: HashMap::new(),
            listeners_attached: false,
        }
    }

    /// Returns the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the document mutably, e.g. to type into form fields.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Returns the interaction state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the task repository.
    pub fn repository(&self) -> &TaskRepository<S> {
        &self.repo
    }

    /// Returns the stored tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored tasks cannot be read.
    pub fn tasks(&self) -> Result<Vec<Task>> {
        Ok(self.repo.get_tasks()?)
    }

    /// Returns the boards derived from the stored tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored tasks cannot be read.
    pub fn boards(&self) -> Result<Vec<String>> {
        Ok(derive_boards(&self.repo.get_tasks()?))
    }

    /// Returns `true` once [`attach_listeners`](Self::attach_listeners) ran.
    pub fn listeners_attached(&self) -> bool {
        self.listeners_attached
    }

    /// Sets the value of the form field with element id `id`.
    ///
    /// Returns `false` if no such element exists.
    pub fn set_field(&mut self, id: &str, value: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(node) => {
                self.document.set_value(node, value);
                true
            }
            None => {
                warn!(id, "form field not found");
                false
            }
        }
    }

    /// Applies the persisted sidebar and theme flags to the document.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn restore_flags(&mut self) -> Result<()> {
        let storage = self.repo.storage();
        let show_sidebar = storage.show_sidebar()?;
        let light_theme = storage.light_theme()?;

        render::apply_sidebar(&mut self.document, show_sidebar);
        render::apply_theme(&mut self.document, light_theme);
        debug!(show_sidebar, light_theme, "restored UI flags");
        Ok(())
    }

    /// Seeds the active board from storage, before the first refresh.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn restore_active_board(&mut self) -> Result<()> {
        self.state.active_board = self.repo.storage().active_board()?;
        Ok(())
    }

    /// Re-reads the tasks and redraws the header, board list and columns.
    ///
    /// The active board is re-resolved against the current boards and the
    /// result is persisted when it changed.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or written.
    pub fn refresh(&mut self) -> Result<()> {
        let tasks = self.repo.get_tasks()?;
        let boards = derive_boards(&tasks);
        let active = resolve_active_board(self.state.active_board.as_deref(), &boards);
        self.persist_active_board(active.as_deref())?;
        self.state.active_board = active;

        let active = self.state.active_board.as_deref();
        render::render_header(&mut self.document, active);
        render::render_board_list(&mut self.document, &boards, active);
        render::render_columns(&mut self.document, &tasks, active);
        Ok(())
    }

    fn persist_active_board(&mut self, active: Option<&str>) -> Result<()> {
        let storage = self.repo.storage_mut();
        if storage.active_board()?.as_deref() == active {
            return Ok(());
        }
        match active {
            Some(name) => storage.set_active_board(name)?,
            None => storage.clear_active_board()?,
        }
        Ok(())
    }

    /// Installs the fixed element bindings.
    ///
    /// Runs once; later calls do nothing and return `false`. Bindings for
    /// elements missing from the document are logged and skipped.
    pub fn attach_listeners(&mut self) -> bool {
        if self.listeners_attached {
            debug!("listeners already attached");
            return false;
        }

        for (id, event) in BINDINGS {
            if self.document.get_element_by_id(id).is_none() {
                warn!(id, "cannot attach listener, element not found");
                continue;
            }
            self.listeners.insert(*id, event.clone());
        }

        self.listeners_attached = true;
        debug!(count = self.listeners.len(), "attached listeners");
        true
    }

    /// Resolves a click on `node` to the event it triggers.
    ///
    /// The click bubbles from `node` up through its ancestors. Bound ids
    /// win; task cards open the edit form and board buttons switch boards.
    pub fn resolve_click(&self, node: NodeId) -> Option<UiEvent> {
        let mut current = Some(node);
        while let Some(n) = current {
            if let Some(event) = self
                .document
                .element_id(n)
                .and_then(|id| self.listeners.get(id))
            {
                return Some(event.clone());
            }
            if self.document.has_class(n, classes::TASK) {
                return self
                    .document
                    .data(n, data::TASK_ID)
                    .map(|id| UiEvent::OpenEditTask(id.into()));
            }
            if self.document.has_class(n, classes::BOARD_BTN) {
                return Some(UiEvent::SwitchBoard(self.document.text(n).to_string()));
            }
            current = self.document.parent(n);
        }
        None
    }

    /// Clicks `node`, handling the resulting event if there is one.
    ///
    /// Returns whether the click triggered an event.
    ///
    /// # Errors
    ///
    /// Returns an error if handling the event fails.
    pub fn click(&mut self, node: NodeId) -> Result<bool> {
        match self.resolve_click(node) {
            Some(event) => {
                self.handle(event)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clicks the element with id `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if handling the event fails.
    pub fn click_id(&mut self, id: &str) -> Result<bool> {
        match self.document.get_element_by_id(id) {
            Some(node) => self.click(node),
            None => {
                warn!(id, "cannot click, element not found");
                Ok(false)
            }
        }
    }

    /// Applies `event`.
    ///
    /// Events that make no sense in the current modal state are logged and
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or written.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: UiEvent) -> Result<()> {
        match (event, self.state.modal.clone()) {
            (UiEvent::OpenAddTask, ModalState::Closed) => self.open_add_task(),
            (UiEvent::SubmitAddTask, ModalState::AddTask) => self.submit_add_task()?,
            (UiEvent::CancelAddTask | UiEvent::BackdropClicked, ModalState::AddTask) => {
                self.close_add_task();
            }
            (UiEvent::OpenEditTask(id), ModalState::Closed) => match self.repo.get_task(&id)? {
                Some(task) => self.open_edit_task(&task),
                None => warn!(%id, "clicked task no longer exists"),
            },
            (UiEvent::SaveTaskChanges, ModalState::EditTask(id)) => {
                let update = self.read_edit_form();
                self.repo.update_task(&id, update)?;
                self.close_edit_task();
                self.refresh()?;
            }
            (UiEvent::DeleteTask, ModalState::EditTask(id)) => {
                self.repo.delete_task(&id)?;
                self.close_edit_task();
                self.refresh()?;
            }
            (UiEvent::CancelEdit, ModalState::EditTask(_)) => self.close_edit_task(),
            (UiEvent::SwitchBoard(name), ModalState::Closed) => self.switch_board(name)?,
            (UiEvent::HideSidebar, _) => self.set_sidebar(false)?,
            (UiEvent::ShowSidebar, _) => self.set_sidebar(true)?,
            (UiEvent::ToggleTheme, _) => self.toggle_theme()?,
            (event, modal) => debug!(?event, ?modal, "event ignored in current state"),
        }
        Ok(())
    }

    fn open_add_task(&mut self) {
        render::show_modal(&mut self.document, ids::ADD_MODAL, true);
        render::show_backdrop(&mut self.document, true);
        self.state.modal = ModalState::AddTask;
    }

    fn close_add_task(&mut self) {
        render::show_modal(&mut self.document, ids::ADD_MODAL, false);
        render::show_backdrop(&mut self.document, false);
        render::reset_add_form(&mut self.document);
        self.state.modal = ModalState::Closed;
    }

    fn submit_add_task(&mut self) -> Result<()> {
        let board = self
            .state
            .active_board
            .clone()
            .unwrap_or_else(|| DEFAULT_BOARD_NAME.to_string());
        let new = NewTask::new(render::field_value(&self.document, ids::TITLE_INPUT), board)
            .with_description(render::field_value(&self.document, ids::DESC_INPUT))
            .with_status(TaskStatus::from(render::field_value(
                &self.document,
                ids::SELECT_STATUS,
            )));

        let Some(task) = self.repo.create_task(new)? else {
            debug!("title is empty, keeping the form open");
            return Ok(());
        };

        info!(id = %task.id, board = %task.board, "task created");
        if self.state.active_board.is_none() {
            self.state.active_board = Some(task.board.clone());
        }
        self.close_add_task();
        self.refresh()
    }

    fn open_edit_task(&mut self, task: &Task) {
        render::fill_edit_form(&mut self.document, task);
        render::show_modal(&mut self.document, ids::EDIT_MODAL, true);
        self.state.modal = ModalState::EditTask(task.id.clone());
    }

    fn close_edit_task(&mut self) {
        render::show_modal(&mut self.document, ids::EDIT_MODAL, false);
        self.state.modal = ModalState::Closed;
    }

    fn read_edit_form(&self) -> TaskUpdate {
        TaskUpdate::new(
            render::field_value(&self.document, ids::EDIT_TITLE_INPUT),
            render::field_value(&self.document, ids::EDIT_DESC_INPUT),
            TaskStatus::from(render::field_value(&self.document, ids::EDIT_SELECT_STATUS)),
        )
    }

    fn switch_board(&mut self, name: String) -> Result<()> {
        if !self.boards()?.contains(&name) {
            warn!(board = %name, "cannot switch to unknown board");
            return Ok(());
        }
        self.state.active_board = Some(name);
        self.refresh()
    }

    fn set_sidebar(&mut self, show: bool) -> Result<()> {
        self.repo.storage_mut().set_show_sidebar(show)?;
        render::apply_sidebar(&mut self.document, show);
        Ok(())
    }

    fn toggle_theme(&mut self) -> Result<()> {
        let body = self.document.body();
        let light = !self.document.has_class(body, classes::LIGHT_THEME);
        self.repo.storage_mut().set_light_theme(light)?;
        render::apply_theme(&mut self.document, light);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_protocol::{TaskId, default_tasks};
    use taskboard_store::{MemoryStorage, seed_if_empty};

    fn controller() -> Controller<MemoryStorage> {
        let mut storage = MemoryStorage::new();
        seed_if_empty(&mut storage, &default_tasks()).unwrap();
        let mut controller = Controller::new(storage, Document::board_layout());
        controller.restore_active_board().unwrap();
        controller.refresh().unwrap();
        controller.attach_listeners();
        controller
    }

    fn card(controller: &Controller<MemoryStorage>, id: &str) -> NodeId {
        controller
            .document()
            .query_one(classes::TASK, data::TASK_ID, id)
            .unwrap()
    }

    fn visible(controller: &Controller<MemoryStorage>, id: &str) -> bool {
        let node = controller.document().get_element_by_id(id).unwrap();
        controller.document().is_rendered(node)
    }

    #[test]
    fn attach_listeners_runs_once() {
        let mut controller = controller();
        assert!(controller.listeners_attached());
        assert!(!controller.attach_listeners());
    }

    #[test]
    fn clicks_do_nothing_before_listeners_attach() {
        let mut controller = Controller::new(MemoryStorage::new(), Document::board_layout());
        assert!(!controller.click_id(ids::ADD_NEW_TASK_BTN).unwrap());
        assert_eq!(controller.state().modal, ModalState::Closed);
    }

    #[test]
    fn add_task_flow() {
        let mut controller = controller();
        controller.click_id(ids::ADD_NEW_TASK_BTN).unwrap();
        assert!(visible(&controller, ids::ADD_MODAL));
        assert!(visible(&controller, ids::BACKDROP));

        controller.set_field(ids::TITLE_INPUT, "Learn Rust");
        controller.set_field(ids::DESC_INPUT, "ownership first");
        controller.set_field(ids::SELECT_STATUS, "doing");
        controller.click_id(ids::CREATE_TASK_BTN).unwrap();

        assert_eq!(controller.state().modal, ModalState::Closed);
        assert!(!visible(&controller, ids::ADD_MODAL));
        assert!(!visible(&controller, ids::BACKDROP));
        assert_eq!(render::field_value(controller.document(), ids::TITLE_INPUT), "");

        let tasks = controller.tasks().unwrap();
        let created = tasks.last().unwrap();
        assert_eq!(created.title, "Learn Rust");
        assert_eq!(created.board, "Launch Career");
        assert_eq!(created.status, TaskStatus::Doing);

        let node = card(&controller, created.id.as_str());
        let column = controller
            .document()
            .query_one(classes::COLUMN, data::STATUS, "doing")
            .unwrap();
        assert!(controller
            .document()
            .query_by_class_within(column, classes::TASK)
            .contains(&node));
    }

    #[test]
    fn empty_title_keeps_modal_open() {
        let mut controller = controller();
        controller.click_id(ids::ADD_NEW_TASK_BTN).unwrap();
        controller.set_field(ids::TITLE_INPUT, "   ");
        controller.click_id(ids::CREATE_TASK_BTN).unwrap();

        assert_eq!(controller.state().modal, ModalState::AddTask);
        assert!(visible(&controller, ids::ADD_MODAL));
        assert_eq!(controller.tasks().unwrap().len(), 8);
    }

    #[test]
    fn backdrop_and_cancel_close_add_modal() {
        let mut controller = controller();
        for closer in [ids::BACKDROP, ids::CANCEL_ADD_TASK_BTN] {
            controller.click_id(ids::ADD_NEW_TASK_BTN).unwrap();
            controller.set_field(ids::TITLE_INPUT, "draft");
            controller.click_id(closer).unwrap();

            assert_eq!(controller.state().modal, ModalState::Closed);
            assert!(!visible(&controller, ids::BACKDROP));
            assert_eq!(render::field_value(controller.document(), ids::TITLE_INPUT), "");
        }
        assert_eq!(controller.tasks().unwrap().len(), 8);
    }

    #[test]
    fn clicking_card_opens_prefilled_edit_modal() {
        let mut controller = controller();
        let node = card(&controller, "2");
        controller.click(node).unwrap();

        assert_eq!(
            controller.state().modal,
            ModalState::EditTask(TaskId::new("2"))
        );
        assert!(visible(&controller, ids::EDIT_MODAL));
        assert!(!visible(&controller, ids::BACKDROP));
        let doc = controller.document();
        assert_eq!(render::field_value(doc, ids::EDIT_TITLE_INPUT), "Master JavaScript");
        assert_eq!(render::field_value(doc, ids::EDIT_SELECT_STATUS), "doing");
    }

    #[test]
    fn save_changes_updates_and_rerenders() {
        let mut controller = controller();
        controller.click(card(&controller, "1")).unwrap();
        controller.set_field(ids::EDIT_TITLE_INPUT, "Launch Legendary Career");
        controller.set_field(ids::EDIT_SELECT_STATUS, "done");
        controller.click_id(ids::SAVE_TASK_CHANGES_BTN).unwrap();

        assert_eq!(controller.state().modal, ModalState::Closed);
        let task = controller
            .repository()
            .get_task(&TaskId::new("1"))
            .unwrap()
            .unwrap();
        assert_eq!(task.title, "Launch Legendary Career");
        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.board, "Launch Career");

        let node = card(&controller, "1");
        assert_eq!(controller.document().text(node), "Launch Legendary Career");
        let done = controller
            .document()
            .query_one(classes::COLUMN, data::STATUS, "done")
            .unwrap();
        assert!(controller
            .document()
            .query_by_class_within(done, classes::TASK)
            .contains(&node));
    }

    #[test]
    fn delete_removes_card() {
        let mut controller = controller();
        controller.click(card(&controller, "3")).unwrap();
        controller.click_id(ids::DELETE_TASK_BTN).unwrap();

        assert_eq!(controller.state().modal, ModalState::Closed);
        assert_eq!(controller.tasks().unwrap().len(), 7);
        assert!(controller
            .document()
            .query_one(classes::TASK, data::TASK_ID, "3")
            .is_none());
    }

    #[test]
    fn deleting_last_task_of_board_switches_board() {
        let mut storage = MemoryStorage::new();
        let tasks: Vec<_> = default_tasks()
            .into_iter()
            .filter(|t| t.id.as_str() == "1" || t.board == "Roadmap")
            .collect();
        seed_if_empty(&mut storage, &tasks).unwrap();
        let mut controller = Controller::new(storage, Document::board_layout());
        controller.attach_listeners();
        controller.refresh().unwrap();
        assert_eq!(controller.state().active_board.as_deref(), Some("Launch Career"));

        controller.click(card(&controller, "1")).unwrap();
        controller.click_id(ids::DELETE_TASK_BTN).unwrap();

        assert_eq!(controller.state().active_board.as_deref(), Some("Roadmap"));
        assert_eq!(
            controller.repository().storage().active_board().unwrap().as_deref(),
            Some("Roadmap")
        );
        assert_eq!(controller.document().query_by_class(classes::BOARD_BTN).len(), 1);
    }

    #[test]
    fn stale_card_is_ignored() {
        let mut controller = controller();
        let node = card(&controller, "4");
        controller.handle(UiEvent::OpenEditTask(TaskId::new("gone"))).unwrap();
        assert_eq!(controller.state().modal, ModalState::Closed);
        assert!(controller.document().contains(node));
    }

    #[test]
    fn switching_board_persists_and_highlights() {
        let mut controller = controller();
        let roadmap = controller
            .document()
            .query_by_class(classes::BOARD_BTN)
            .into_iter()
            .find(|b| controller.document().text(*b) == "Roadmap")
            .unwrap();
        controller.click(roadmap).unwrap();

        let doc = controller.document();
        assert_eq!(controller.state().active_board.as_deref(), Some("Roadmap"));
        assert_eq!(
            controller.repository().storage().active_board().unwrap().as_deref(),
            Some("Roadmap")
        );
        let header = doc.get_element_by_id(ids::HEADER_BOARD_NAME).unwrap();
        assert_eq!(doc.text(header), "Roadmap");
        let active: Vec<_> = doc
            .query_by_class(classes::ACTIVE)
            .into_iter()
            .map(|n| doc.text(n).to_string())
            .collect();
        assert_eq!(active, vec!["Roadmap"]);
        assert_eq!(doc.query_by_class(classes::TASK).len(), 5);
    }

    #[test]
    fn unknown_board_switch_is_ignored() {
        let mut controller = controller();
        controller.handle(UiEvent::SwitchBoard("Nope".to_string())).unwrap();
        assert_eq!(controller.state().active_board.as_deref(), Some("Launch Career"));
    }

    #[test]
    fn board_switch_ignored_while_modal_open() {
        let mut controller = controller();
        controller.click_id(ids::ADD_NEW_TASK_BTN).unwrap();
        controller.handle(UiEvent::SwitchBoard("Roadmap".to_string())).unwrap();
        assert_eq!(controller.state().active_board.as_deref(), Some("Launch Career"));
    }

    #[test]
    fn sidebar_toggle_is_persisted() {
        let mut controller = controller();
        controller.click_id(ids::HIDE_SIDE_BAR_BTN).unwrap();
        assert!(!controller.repository().storage().show_sidebar().unwrap());
        assert!(!visible(&controller, ids::SIDE_BAR));
        assert!(visible(&controller, ids::SHOW_SIDE_BAR_BTN));

        controller.click_id(ids::SHOW_SIDE_BAR_BTN).unwrap();
        assert!(controller.repository().storage().show_sidebar().unwrap());
        assert!(visible(&controller, ids::SIDE_BAR));
    }

    #[test]
    fn theme_toggle_is_persisted() {
        let mut controller = controller();
        controller.click_id(ids::THEME_SWITCH).unwrap();
        assert!(controller.repository().storage().light_theme().unwrap());
        assert!(controller
            .document()
            .has_class(controller.document().body(), classes::LIGHT_THEME));

        controller.click_id(ids::THEME_SWITCH).unwrap();
        assert_eq!(
            controller.repository().storage().get_item("light-theme").unwrap().as_deref(),
            Some("disabled")
        );
    }

    #[test]
    fn first_task_on_empty_storage_creates_default_board() {
        let mut controller = Controller::new(MemoryStorage::new(), Document::board_layout());
        controller.attach_listeners();
        controller.refresh().unwrap();
        assert_eq!(controller.state().active_board, None);

        controller.click_id(ids::ADD_NEW_TASK_BTN).unwrap();
        controller.set_field(ids::TITLE_INPUT, "Hello");
        controller.click_id(ids::CREATE_TASK_BTN).unwrap();

        assert_eq!(controller.state().active_board.as_deref(), Some(DEFAULT_BOARD_NAME));
        assert_eq!(controller.boards().unwrap(), vec![DEFAULT_BOARD_NAME]);
        assert_eq!(controller.document().query_by_class(classes::BOARD_BTN).len(), 1);
        assert_eq!(controller.document().query_by_class(classes::TASK).len(), 1);
    }

    #[test]
    fn click_bubbles_from_descendant() {
        let mut controller = controller();
        let button = controller
            .document()
            .get_element_by_id(ids::ADD_NEW_TASK_BTN)
            .unwrap();
        let icon = controller.document_mut().create_element("span");
        controller.document_mut().append_child(button, icon);

        assert_eq!(controller.resolve_click(icon), Some(UiEvent::OpenAddTask));
    }
}
