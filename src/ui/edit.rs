use crossterm::event::{Event, KeyEvent};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::contact::Field;

/// Line editor bound to the focused field of the add/edit form.
#[derive(Default)]
pub struct FieldEditor {
    pub active: bool,
    target: Option<Field>,
    input: Input,
}

impl FieldEditor {
    pub fn start(&mut self, current: &str, target: Field) {
        self.active = true;
        self.target = Some(target);
        self.input = Input::new(current.to_string());
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.target = None;
        self.input.reset();
    }

    pub fn target(&self) -> Option<Field> {
        self.target
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn visual_cursor(&self) -> usize {
        self.input.visual_cursor()
    }

    /// Feed a key to the input. Returns true when the text changed.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        self.input
            .handle_event(&Event::Key(key))
            .map(|change| change.value)
            .unwrap_or(false)
    }
}
