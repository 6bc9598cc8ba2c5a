use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::App;

impl App {
    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }
        self.handle_field_key(key);
    }

    /// Handle keys that work regardless of the focused field
    ///
    /// Returns true if the key was handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: exit without output
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Shift+Tab: focus the previous field
        if key.code == KeyCode::BackTab {
            self.focus_previous();
            return true;
        }

        false
    }

    /// Handle a key for the focused field
    fn handle_field_key(&mut self, key: KeyEvent) {
        let has_focus_to_move = self.bindings.len() > 1;
        let Some(binding) = self.focused_binding() else {
            return;
        };

        match key.code {
            // Esc closes an open dropdown before it quits the form
            KeyCode::Esc => {
                if binding.suggestions.is_visible() {
                    binding.suggestions.clear();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Down => binding.suggestions.navigate_next(),
            KeyCode::Up => binding.suggestions.navigate_previous(),
            // Tab accepts the highlighted suggestion, otherwise moves focus
            KeyCode::Tab => {
                if let Some(index) = binding.suggestions.selected_index() {
                    binding.apply_suggestion(index);
                } else if has_focus_to_move {
                    self.focus_next();
                }
            }
            // Enter accepts the highlighted suggestion; with no dropdown it
            // accepts the whole form
            KeyCode::Enter => {
                if let Some(index) = binding.suggestions.selected_index() {
                    binding.apply_suggestion(index);
                } else if binding.suggestions.is_visible() {
                    binding.suggestions.clear();
                } else {
                    self.accept();
                }
            }
            // Everything else edits the field text
            _ => {
                if binding.textarea.input(key) {
                    binding.on_query_changed();
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
