//! The terminal application: update, view and run loop.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use taskboard_protocol::{Message, TaskStatus};
use taskboard_store::Storage;
use taskboard_ui::layout::ids;
use taskboard_ui::{Controller, ModalState, Result, render};
use tracing::{debug, info};

use crate::cursor::{Cursor, FormField};
use crate::event::{event_to_message, poll_event};
use crate::layout::{
    HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, SIDEBAR_WIDTH,
};
use crate::terminal::AppTerminal;
use crate::theme::Palette;
use crate::view::{BoardView, FormKind};
use crate::widgets::{
    render_columns, render_form, render_header, render_help_overlay, render_sidebar,
};

/// The terminal host around a board [`Controller`].
///
/// Key messages become clicks on document elements and edits of form
/// fields; everything drawn is read back from the document.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::Message;
/// use taskboard_store::MemoryStorage;
/// use taskboard_tui::App;
/// use taskboard_ui::{ModalState, bootstrap, dom::Document};
///
/// # fn main() -> taskboard_ui::Result<()> {
/// let controller = bootstrap(MemoryStorage::new(), Document::board_layout())?;
/// let mut app = App::new(controller);
///
/// app.update(Message::NewTask)?;
/// assert_eq!(app.controller().state().modal, ModalState::AddTask);
///
/// app.update(Message::Quit)?;
/// assert!(app.should_quit());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct App<S> {
    controller: Controller<S>,
    cursor: Cursor,
    field: FormField,
    help_visible: bool,
    should_quit: bool,
}

impl<S: Storage> App<S> {
    /// Wraps a bootstrapped controller.
    pub fn new(controller: Controller<S>) -> Self {
        Self {
            controller,
            cursor: Cursor::default(),
            field: FormField::default(),
            help_visible: false,
            should_quit: false,
        }
    }

    /// Returns the controller.
    pub fn controller(&self) -> &Controller<S> {
        &self.controller
    }

    /// Returns the card cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns the focused form field.
    pub fn focused_field(&self) -> FormField {
        self.field
    }

    /// Returns `true` while the help overlay is shown.
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Returns `true` once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns `true` while the add or edit form is open.
    pub fn in_form(&self) -> bool {
        self.controller.state().modal.is_open()
    }

    /// Reads the current view out of the document.
    pub fn board_view(&self) -> BoardView {
        BoardView::from_document(self.controller.document())
    }

    fn form_kind(&self) -> Option<FormKind> {
        match self.controller.state().modal {
            ModalState::Closed => None,
            ModalState::AddTask => Some(FormKind::Add),
            ModalState::EditTask(_) => Some(FormKind::Edit),
        }
    }

    /// Applies a message.
    ///
    /// While help is shown, any message other than quit only dismisses it.
    ///
    /// # Errors
    ///
    /// Returns an error if the controller fails to read or write storage.
    pub fn update(&mut self, msg: Message) -> Result<()> {
        if msg.is_terminating() {
            info!("quit requested");
            self.should_quit = true;
            return Ok(());
        }
        if self.help_visible {
            self.help_visible = false;
            return Ok(());
        }

        match self.form_kind() {
            Some(kind) => self.update_form(kind, msg)?,
            None => self.update_board(msg)?,
        }

        if !self.in_form() {
            self.field = FormField::Title;
        }
        self.cursor.clamp(&self.board_view().card_counts());
        Ok(())
    }

    fn update_board(&mut self, msg: Message) -> Result<()> {
        let view = self.board_view();
        let counts = view.card_counts();
        match msg {
            Message::NavigateLeft => self.cursor.navigate_left(&counts),
            Message::NavigateRight => self.cursor.navigate_right(&counts),
            Message::NavigateUp => self.cursor.navigate_up(&counts),
            Message::NavigateDown => self.cursor.navigate_down(&counts),
            Message::Select => {
                let card = self
                    .cursor
                    .card
                    .and_then(|idx| view.card(self.cursor.column, idx));
                if let Some(card) = card {
                    self.controller.click(card.node)?;
                }
            }
            Message::Escape => self.cursor.clear(),
            Message::NewTask => {
                self.controller.click_id(ids::ADD_NEW_TASK_BTN)?;
            }
            Message::NextBoard => self.switch_board(&view, 1)?,
            Message::PrevBoard => self.switch_board(&view, -1)?,
            Message::ToggleSidebar => {
                let id = if view.sidebar_visible {
                    ids::HIDE_SIDE_BAR_BTN
                } else {
                    ids::SHOW_SIDE_BAR_BTN
                };
                self.controller.click_id(id)?;
            }
            Message::ToggleTheme => {
                self.controller.click_id(ids::THEME_SWITCH)?;
            }
            Message::ToggleHelp => self.help_visible = true,
            other => debug!(?other, "message ignored on the board"),
        }
        Ok(())
    }

    fn switch_board(&mut self, view: &BoardView, delta: isize) -> Result<()> {
        let len = view.boards.len();
        if len == 0 {
            return Ok(());
        }
        let current = view.boards.iter().position(|b| b.active).unwrap_or(0);
        let next = (current as isize + delta).rem_euclid(len as isize) as usize;
        if let Some(board) = view.boards.get(next) {
            self.controller.click(board.node)?;
            self.cursor.clear();
        }
        Ok(())
    }

    fn update_form(&mut self, kind: FormKind, msg: Message) -> Result<()> {
        let id = kind.field_ids()[self.field.index()];
        match msg {
            Message::FormInput { ch } if self.field.is_text() => {
                self.edit_field(id, |value| value.push(ch));
            }
            Message::FormBackspace if self.field.is_text() => {
                self.edit_field(id, |value| {
                    value.pop();
                });
            }
            Message::FormCycleStatus { delta } if self.field == FormField::Status => {
                self.edit_field(id, |value| {
                    *value = TaskStatus::from(value.as_str()).cycle(delta).to_string();
                });
            }
            Message::FormNextField => self.field = self.field.next(),
            Message::FormPrevField => self.field = self.field.prev(),
            Message::FormSubmit => {
                let id = match kind {
                    FormKind::Add => ids::CREATE_TASK_BTN,
                    FormKind::Edit => ids::SAVE_TASK_CHANGES_BTN,
                };
                self.controller.click_id(id)?;
            }
            Message::FormDelete if kind == FormKind::Edit => {
                self.controller.click_id(ids::DELETE_TASK_BTN)?;
            }
            Message::FormCancel => {
                let id = match kind {
                    FormKind::Add => ids::CANCEL_ADD_TASK_BTN,
                    FormKind::Edit => ids::CANCEL_EDIT_BTN,
                };
                self.controller.click_id(id)?;
            }
            other => debug!(?other, ?kind, "message ignored in form"),
        }
        Ok(())
    }

    fn edit_field(&mut self, id: &str, edit: impl FnOnce(&mut String)) {
        let mut value = render::field_value(self.controller.document(), id);
        edit(&mut value);
        self.controller.set_field(id, &value);
    }

    /// Draws the board.
    ///
    /// The sidebar is dropped on narrow terminals and the header on short
    /// ones; below the minimum size only a notice is drawn.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            render_terminal_too_small(frame, area);
            return;
        }

        let view = self.board_view();
        let palette = Palette::for_theme(view.light_theme);
        let buf = frame.buffer_mut();
        Block::default().style(palette.base()).render(area, buf);

        let main_area = if view.sidebar_visible && area.width >= SIDEBAR_WIDTH + MIN_WIDTH {
            let [sidebar_area, main_area] =
                Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                    .areas(area);
            render_sidebar(&view.boards, &palette, sidebar_area, buf);
            main_area
        } else {
            area
        };

        let board_area = if area.height >= MIN_HEIGHT_WITH_HEADER {
            let [header_area, board_area] =
                Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                    .areas(main_area);
            render_header(&view.board_name, &palette, header_area, buf);
            board_area
        } else {
            main_area
        };
        render_columns(&view.columns, self.cursor, &palette, board_area, buf);

        if let Some(form) = &view.form {
            render_form(form, self.field, &palette, area, buf);
        }
        if self.help_visible {
            render_help_overlay(&palette, area, buf);
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing, reading input or handling a message
    /// fails.
    pub fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.in_form())
            {
                self.update(msg)?;
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }
}

fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );
    let vertical_offset = area.height.saturating_sub(2) / 2;
    let centered = Rect {
        y: area.y + vertical_offset,
        height: area.height.saturating_sub(vertical_offset),
        ..area
    };
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        centered,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};
    use taskboard_protocol::TaskId;
    use taskboard_store::{MemoryStorage, UiFlags};
    use taskboard_ui::{bootstrap, dom::Document};

    fn app() -> App<MemoryStorage> {
        App::new(bootstrap(MemoryStorage::new(), Document::board_layout()).unwrap())
    }

    fn type_text(app: &mut App<MemoryStorage>, text: &str) {
        for ch in text.chars() {
            app.update(Message::FormInput { ch }).unwrap();
        }
    }

    fn draw(app: &App<MemoryStorage>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn quit_sets_should_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.update(Message::Quit).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn help_swallows_next_message() {
        let mut app = app();
        app.update(Message::ToggleHelp).unwrap();
        assert!(app.help_visible());

        app.update(Message::NavigateRight).unwrap();
        assert!(!app.help_visible());
        assert_eq!(app.cursor().column, 0);
    }

    #[test]
    fn quit_works_with_help_visible() {
        let mut app = app();
        app.update(Message::ToggleHelp).unwrap();
        app.update(Message::Quit).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn new_task_is_added_to_active_board() {
        let mut app = app();
        app.update(Message::NewTask).unwrap();
        assert!(app.in_form());

        type_text(&mut app, "Write tests");
        app.update(Message::FormSubmit).unwrap();

        assert!(!app.in_form());
        let tasks = app.controller().tasks().unwrap();
        let task = tasks.last().unwrap();
        assert_eq!(task.title, "Write tests");
        assert_eq!(task.board, "Launch Career");
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(app.board_view().card_counts(), vec![2, 1, 1]);
    }

    #[test]
    fn status_field_cycles_with_arrows() {
        let mut app = app();
        app.update(Message::NewTask).unwrap();
        type_text(&mut app, "x");
        app.update(Message::FormPrevField).unwrap();
        assert_eq!(app.focused_field(), FormField::Status);

        type_text(&mut app, "ignored");
        app.update(Message::FormCycleStatus { delta: 1 }).unwrap();
        app.update(Message::FormSubmit).unwrap();

        let tasks = app.controller().tasks().unwrap();
        let task = tasks.last().unwrap();
        assert_eq!(task.title, "x");
        assert_eq!(task.status, TaskStatus::Doing);
        assert_eq!(app.focused_field(), FormField::Title);
    }

    #[test]
    fn empty_title_keeps_form_open() {
        let mut app = app();
        app.update(Message::NewTask).unwrap();
        app.update(Message::FormSubmit).unwrap();
        assert!(app.in_form());
        assert_eq!(app.controller().tasks().unwrap().len(), 8);
    }

    #[test]
    fn select_opens_edit_form_and_saves() {
        let mut app = app();
        app.update(Message::NavigateDown).unwrap();
        app.update(Message::Select).unwrap();
        assert_eq!(
            app.controller().state().modal,
            ModalState::EditTask(TaskId::new("1"))
        );

        app.update(Message::FormBackspace).unwrap();
        app.update(Message::FormSubmit).unwrap();

        let task = app
            .controller()
            .repository()
            .get_task(&TaskId::new("1"))
            .unwrap()
            .unwrap();
        assert_eq!(task.title, "Launch Epic Caree");
        assert!(!app.in_form());
    }

    #[test]
    fn select_without_card_does_nothing() {
        let mut app = app();
        app.update(Message::Select).unwrap();
        assert!(!app.in_form());
    }

    #[test]
    fn delete_removes_card_and_clamps_cursor() {
        let mut app = app();
        app.update(Message::NavigateDown).unwrap();
        app.update(Message::Select).unwrap();
        app.update(Message::FormDelete).unwrap();

        assert!(!app.in_form());
        assert_eq!(app.controller().tasks().unwrap().len(), 7);
        assert_eq!(app.board_view().card_counts(), vec![0, 1, 1]);
        assert_eq!(app.cursor().card, None);
    }

    #[test]
    fn delete_is_ignored_in_add_form() {
        let mut app = app();
        app.update(Message::NewTask).unwrap();
        app.update(Message::FormDelete).unwrap();
        assert_eq!(app.controller().state().modal, ModalState::AddTask);
    }

    #[test]
    fn cancel_discards_edits() {
        let mut app = app();
        app.update(Message::NavigateDown).unwrap();
        app.update(Message::Select).unwrap();
        type_text(&mut app, "!!!");
        app.update(Message::FormCancel).unwrap();

        assert!(!app.in_form());
        let tasks = app.controller().tasks().unwrap();
        assert_eq!(tasks[0].title, "Launch Epic Career");
    }

    #[test]
    fn board_messages_are_ignored_in_form() {
        let mut app = app();
        app.update(Message::NewTask).unwrap();
        app.update(Message::NextBoard).unwrap();
        assert_eq!(
            app.controller().state().active_board.as_deref(),
            Some("Launch Career")
        );
    }

    #[test]
    fn board_cycling_wraps() {
        let mut app = app();
        app.update(Message::NextBoard).unwrap();
        assert_eq!(app.board_view().board_name, "Roadmap");

        app.update(Message::NextBoard).unwrap();
        assert_eq!(app.board_view().board_name, "Launch Career");

        app.update(Message::PrevBoard).unwrap();
        assert_eq!(app.board_view().board_name, "Roadmap");
    }

    #[test]
    fn sidebar_and_theme_toggles_persist() {
        let mut app = app();
        app.update(Message::ToggleSidebar).unwrap();
        app.update(Message::ToggleTheme).unwrap();

        let view = app.board_view();
        assert!(!view.sidebar_visible);
        assert!(view.light_theme);
        let storage = app.controller().repository().storage();
        assert!(!storage.show_sidebar().unwrap());
        assert!(storage.light_theme().unwrap());

        app.update(Message::ToggleSidebar).unwrap();
        assert!(app.board_view().sidebar_visible);
    }

    #[test]
    fn view_draws_board() {
        let content = draw(&app(), 100, 24);
        assert!(content.contains("All Boards (2)"));
        assert!(content.contains("Launch Career"));
        assert!(content.contains("TODO (1)"));
        assert!(content.contains("Launch Epic Career"));
        assert!(content.contains("? for help"));
    }

    #[test]
    fn view_draws_open_form_and_help() {
        let mut app = app();
        app.update(Message::NewTask).unwrap();
        assert!(draw(&app, 100, 24).contains("Add New Task"));

        app.update(Message::FormCancel).unwrap();
        app.update(Message::ToggleHelp).unwrap();
        assert!(draw(&app, 100, 24).contains("Help"));
    }

    #[test]
    fn view_hides_sidebar_when_narrow() {
        let content = draw(&app(), 60, 24);
        assert!(!content.contains("All Boards"));
        assert!(content.contains("TODO"));
    }

    #[test]
    fn view_degrades_when_too_small() {
        let content = draw(&app(), 30, 8);
        assert!(content.contains("Terminal too small"));
    }
}
