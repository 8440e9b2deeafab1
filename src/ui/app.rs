use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;
use tui_widgets::popup::PopupState;

use crate::config::{Config, Keys, UiColors};
use crate::contact::{Contact, ContactId, Field};
use crate::directory::{Directory, Modal, SubmitOutcome};

use super::draw;
use super::edit::FieldEditor;

const PAGE_STEP: isize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneFocus {
    List,
    Search,
}

pub struct App<'a> {
    config: &'a Config,
    pub directory: Directory,
    pub search_input: Input,
    pub focused_pane: PaneFocus,
    /// Index into the visible (filtered) list
    pub selected: usize,
    pub editor: FieldEditor,
    pub status: Option<String>,
    // Popup state for the add/edit/view modal (tui-widgets popup)
    pub modal_popup: PopupState,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, directory: Directory) -> Self {
        let search_input = Input::new(directory.query().to_string());
        Self {
            config,
            directory,
            search_input,
            focused_pane: PaneFocus::List,
            selected: 0,
            editor: FieldEditor::default(),
            status: None,
            modal_popup: PopupState::default(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        terminal.backend_mut().execute(LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        B: ratatui::backend::Backend,
    {
        loop {
            draw::render(terminal, self)?;

            if event::poll(Duration::from_millis(250))? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Route one key event. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits (hardcoded for safety)
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            return true;
        }

        match self.directory.modal() {
            Modal::Adding(_) | Modal::Editing { .. } => {
                self.handle_form_key(key);
                false
            }
            Modal::Viewing(_) => {
                self.handle_view_key(key);
                false
            }
            Modal::Idle => match self.focused_pane {
                PaneFocus::Search => {
                    self.handle_search_key(key);
                    false
                }
                PaneFocus::List => self.handle_list_key(key),
            },
        }
    }

    /// Handle keys while the contact list has focus
    fn handle_list_key(&mut self, key: KeyEvent) -> bool {
        let global = &self.config.keys.global;
        let list = &self.config.keys.list;

        if self.key_matches_any(&key, &global.quit) {
            return true;
        }

        if self.key_matches_any(&key, &global.search) {
            self.focused_pane = PaneFocus::Search;
            return false;
        }

        if self.key_matches_any(&key, &global.add) {
            self.directory.open_add();
            self.begin_form();
            self.set_status("Add contact");
            return false;
        }

        if self.key_matches_any(&key, &list.next) {
            self.move_selection(1);
            return false;
        }
        if self.key_matches_any(&key, &list.prev) {
            self.move_selection(-1);
            return false;
        }
        if self.key_matches_any(&key, &list.page_down) {
            self.move_selection(PAGE_STEP);
            return false;
        }
        if self.key_matches_any(&key, &list.page_up) {
            self.move_selection(-PAGE_STEP);
            return false;
        }

        if self.key_matches_any(&key, &list.view) {
            match self.selected_id() {
                Some(id) if self.directory.open_view(id) => {
                    self.modal_popup = PopupState::default();
                }
                _ => self.set_status("No contact selected"),
            }
            return false;
        }

        if self.key_matches_any(&key, &list.edit) {
            match self.selected_id() {
                Some(id) if self.directory.open_edit(id) => {
                    self.begin_form();
                    self.set_status("Edit contact");
                }
                _ => self.set_status("No contact selected"),
            }
            return false;
        }

        if self.key_matches_any(&key, &list.delete) {
            match self.selected_id().and_then(|id| self.directory.delete(id)) {
                Some(removed) => {
                    self.clamp_selection();
                    self.set_status(format!("Deleted {}", removed.name));
                }
                None => self.set_status("No contact selected"),
            }
            return false;
        }

        false
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let input_keys = &self.config.keys.search_input;

        // Cancel and confirm both hand focus back to the list; the query stays
        if self.key_matches_any(&key, &input_keys.cancel)
            || self.key_matches_any(&key, &input_keys.confirm)
        {
            self.focused_pane = PaneFocus::List;
            return;
        }

        // Next/prev: navigate results while typing
        if self.key_matches_any(&key, &input_keys.next) {
            self.move_selection(1);
            return;
        }
        if self.key_matches_any(&key, &input_keys.prev) {
            self.move_selection(-1);
            return;
        }

        // Pass other keys to the input widget
        if let Some(change) = self.search_input.handle_event(&Event::Key(key)) {
            if change.value {
                let previous = self.selected_id();
                self.directory.set_query(self.search_input.value());
                self.reselect(previous);
            }
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let form_keys = &self.config.keys.form;

        if self.key_matches_any(&key, &form_keys.cancel) {
            let message = match self.directory.modal() {
                Modal::Editing { .. } => "Edit cancelled",
                _ => "Add cancelled",
            };
            self.directory.close();
            self.editor.cancel();
            self.set_status(message);
            return;
        }

        if self.key_matches_any(&key, &form_keys.submit) {
            self.submit_form();
            return;
        }

        if self.key_matches_any(&key, &form_keys.next) {
            self.directory.focus_next();
            self.sync_editor();
            return;
        }
        if self.key_matches_any(&key, &form_keys.prev) {
            self.directory.focus_prev();
            self.sync_editor();
            return;
        }

        // Pass other keys to the field editor
        if self.editor.handle_key_event(key) {
            if let Some(field) = self.editor.target() {
                let value = self.editor.value().to_string();
                self.directory.set_field(field, value);
            }
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        let view_keys = &self.config.keys.view;

        // The view popup is read-only; close is its only action
        if self.key_matches_any(&key, &view_keys.close) {
            self.directory.close();
        }
    }

    fn submit_form(&mut self) {
        match self.directory.submit() {
            SubmitOutcome::Added(id) => {
                self.editor.cancel();
                self.reselect(Some(id));
                self.set_status("Contact added");
            }
            SubmitOutcome::Updated(id) => {
                self.editor.cancel();
                self.reselect(Some(id));
                self.set_status("Contact updated");
            }
            SubmitOutcome::Rejected(count) => {
                // Jump to the first field that needs fixing
                let first = self
                    .directory
                    .form()
                    .and_then(|form| form.errors.iter().next().map(|(field, _)| field));
                if let Some(field) = first {
                    self.directory.focus(field);
                    self.sync_editor();
                }
                self.set_status(format!("{} field(s) need attention", count));
            }
            SubmitOutcome::NotEditing => {}
        }
    }

    /// Reset popup placement and bind the editor to the form's focused field.
    fn begin_form(&mut self) {
        self.modal_popup = PopupState::default();
        self.sync_editor();
    }

    fn sync_editor(&mut self) {
        match self.directory.form() {
            Some(form) => {
                let field = form.focus;
                let current = form.draft.get(field).to_string();
                self.editor.start(&current, field);
            }
            None => self.editor.cancel(),
        }
    }

    pub fn visible(&self) -> Vec<&Contact> {
        self.directory.visible()
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.directory.visible().get(self.selected).copied()
    }

    fn selected_id(&self) -> Option<ContactId> {
        self.selected_contact().map(|contact| contact.id)
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.directory.visible().len() as isize;
        if len == 0 {
            return;
        }
        let index = (self.selected as isize + delta).clamp(0, len - 1);
        self.selected = index as usize;
    }

    /// Keep `previous` selected if it is still visible, otherwise clamp.
    fn reselect(&mut self, previous: Option<ContactId>) {
        if let Some(id) = previous {
            if let Some(index) = self.directory.visible().iter().position(|c| c.id == id) {
                self.selected = index;
                return;
            }
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.directory.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn set_status<S: Into<String>>(&mut self, message: S) {
        self.status = Some(message.into());
    }

    pub fn ui_colors(&self) -> &UiColors {
        &self.config.ui.colors
    }

    pub fn keys(&self) -> &Keys {
        &self.config.keys
    }

    /// Field currently shown with a cursor in the form, if any
    pub fn editing_field(&self) -> Option<Field> {
        if self.editor.active {
            self.editor.target()
        } else {
            None
        }
    }

    /// Check if the key event matches any of the given bindings
    fn key_matches_any(&self, event: &KeyEvent, bindings: &[String]) -> bool {
        bindings.iter().any(|b| self.key_matches_single(event, b))
    }

    /// Check if the key event matches a single binding string
    fn key_matches_single(&self, event: &KeyEvent, binding: &str) -> bool {
        let trimmed = binding.trim();
        if trimmed.is_empty() {
            return false;
        }

        // Disallow Ctrl/Alt/Super modifiers (we don't support them)
        let disallowed = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER;
        if event.modifiers.intersects(disallowed) {
            return false;
        }

        match trimmed.to_ascii_lowercase().as_str() {
            // Special keys
            "enter" => matches!(event.code, KeyCode::Enter),
            "tab" => matches!(event.code, KeyCode::Tab),
            "backtab" | "shift+tab" => matches!(event.code, KeyCode::BackTab),
            "backspace" => matches!(event.code, KeyCode::Backspace),
            "delete" | "del" => matches!(event.code, KeyCode::Delete),
            "esc" | "escape" => matches!(event.code, KeyCode::Esc),
            "space" => matches!(event.code, KeyCode::Char(' ')),
            // Arrow keys
            "up" => matches!(event.code, KeyCode::Up),
            "down" => matches!(event.code, KeyCode::Down),
            "left" => matches!(event.code, KeyCode::Left),
            "right" => matches!(event.code, KeyCode::Right),
            // Page navigation
            "pageup" | "page_up" => matches!(event.code, KeyCode::PageUp),
            "pagedown" | "page_down" => matches!(event.code, KeyCode::PageDown),
            "home" => matches!(event.code, KeyCode::Home),
            "end" => matches!(event.code, KeyCode::End),
            // Function keys
            name if name.len() > 1 && name.starts_with('f') => name[1..]
                .parse::<u8>()
                .map(|n| (1..=12).contains(&n) && event.code == KeyCode::F(n))
                .unwrap_or(false),
            // Single character - case-sensitive (e != E, since E requires Shift)
            _ => {
                let mut chars = trimmed.chars();
                if let (Some(first), None) = (chars.next(), chars.next()) {
                    matches!(event.code, KeyCode::Char(c) if c == first)
                } else {
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Draft;
    use crate::store::{ContactStore, IdAllocation};
    use crate::validate::MOBILE_FORMAT;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(key(code))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn directory() -> Directory {
        let seed = vec![
            Draft::new("Ann Lee", "5551234567", "ann@x.com", "1 Rd").into_contact(1),
            Draft::new("Bob Stone", "5559876543", "bob@x.com", "2 Ave").into_contact(2),
            Draft::new("Cid Moss", "4440001111", "cid@x.com", "3 Ln").into_contact(3),
        ];
        Directory::new(ContactStore::new(seed, IdAllocation::Count))
    }

    #[test]
    fn test_quit_keys() {
        let config = Config::default();
        let mut app = App::new(&config, directory());
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_add_flow_through_keys() {
        let config = Config::default();
        let mut app = App::new(&config, directory());

        press(&mut app, KeyCode::Char('a'));
        assert!(matches!(app.directory.modal(), Modal::Adding(_)));
        assert_eq!(app.editing_field(), Some(Field::Name));

        type_text(&mut app, "Dee Park");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "1112223333");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "dee@x.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "4 Ct");
        assert!(!press(&mut app, KeyCode::Enter));

        assert!(app.directory.is_idle());
        assert_eq!(app.status.as_deref(), Some("Contact added"));
        let added = app.selected_contact().expect("new contact selected");
        assert_eq!(added.id, 4);
        assert_eq!(added.name, "Dee Park");
        assert_eq!(added.address, "4 Ct");
    }

    #[test]
    fn test_typing_q_in_form_does_not_quit() {
        let config = Config::default();
        let mut app = App::new(&config, directory());
        press(&mut app, KeyCode::Char('a'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.directory.form().unwrap().draft.name, "q");
    }

    #[test]
    fn test_invalid_edit_keeps_form_and_store() {
        let config = Config::default();
        let mut app = App::new(&config, directory());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('e'));
        assert!(matches!(app.directory.modal(), Modal::Editing { id: 2, .. }));

        // move to mobile, clear it and type a short number
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.editing_field(), Some(Field::Mobile));
        for _ in 0..10 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "42");
        press(&mut app, KeyCode::Enter);

        let form = app.directory.form().expect("form stays open");
        assert_eq!(form.errors.get(Field::Mobile), Some(MOBILE_FORMAT));
        assert_eq!(app.editing_field(), Some(Field::Mobile));
        assert_eq!(app.status.as_deref(), Some("1 field(s) need attention"));
        assert_eq!(app.directory.store().get(2).unwrap().mobile, "5559876543");

        press(&mut app, KeyCode::Esc);
        assert!(app.directory.is_idle());
        assert_eq!(app.directory.store().get(2).unwrap().mobile, "5559876543");
    }

    #[test]
    fn test_view_then_close() {
        let config = Config::default();
        let mut app = App::new(&config, directory());
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.directory.modal(), Modal::Viewing(c) if c.id == 1));
        press(&mut app, KeyCode::Esc);
        assert!(app.directory.is_idle());
        assert_eq!(app.directory.contacts().len(), 3);
    }

    #[test]
    fn test_view_ignores_list_action_keys() {
        let config = Config::default();
        let mut app = App::new(&config, directory());
        press(&mut app, KeyCode::Char('v'));
        for code in [KeyCode::Char('e'), KeyCode::Char('a'), KeyCode::Char('x')] {
            assert!(!press(&mut app, code));
            assert!(matches!(app.directory.modal(), Modal::Viewing(c) if c.id == 1));
        }
        assert_eq!(app.directory.contacts().len(), 3);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.directory.is_idle());
    }

    #[test]
    fn test_search_filters_and_keeps_selection() {
        let config = Config::default();
        let mut app = App::new(&config, directory());
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_contact().unwrap().id, 2);

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.focused_pane, PaneFocus::Search);
        type_text(&mut app, "555");
        assert_eq!(app.directory.query(), "555");
        assert_eq!(app.visible().len(), 2);
        assert_eq!(app.selected_contact().unwrap().id, 2);

        type_text(&mut app, "9");
        assert_eq!(app.visible().len(), 1);
        assert_eq!(app.selected_contact().unwrap().id, 2);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focused_pane, PaneFocus::List);
        assert_eq!(app.directory.query(), "5559");
    }

    #[test]
    fn test_delete_removes_selected_and_clamps() {
        let config = Config::default();
        let mut app = App::new(&config, directory());
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.selected, 2);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.status.as_deref(), Some("Deleted Cid Moss"));
        assert_eq!(app.directory.contacts().len(), 2);
        assert_eq!(app.selected, 1);

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('x'));
        assert!(app.directory.contacts().is_empty());
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.status.as_deref(), Some("No contact selected"));
    }

    #[test]
    fn test_key_matching() {
        let config = Config::default();
        let app = App::new(&config, directory());
        assert!(app.key_matches_single(&key(KeyCode::Enter), "ENTER"));
        assert!(app.key_matches_single(&key(KeyCode::BackTab), "shift+tab"));
        assert!(app.key_matches_single(&key(KeyCode::F(5)), "F5"));
        assert!(!app.key_matches_single(&key(KeyCode::F(5)), "F50"));
        assert!(app.key_matches_single(&key(KeyCode::Char('E')), "E"));
        assert!(!app.key_matches_single(&key(KeyCode::Char('e')), "E"));
        assert!(app.key_matches_single(&key(KeyCode::Char('f')), "f"));
        assert!(!app.key_matches_single(
            &KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT),
            "a"
        ));
        assert!(!app.key_matches_single(&key(KeyCode::Char('a')), "  "));
    }
}
