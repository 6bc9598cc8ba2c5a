//! Mouse click handling
//!
//! Clicking a field focuses it; clicking a suggestion row applies that
//! suggestion to its field.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::layout::{Region, region_at};

use super::state::App;

impl App {
    /// Handle mouse events, only left button presses do anything
    pub fn handle_mouse_event(&mut self, event: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = event.kind {
            let region = region_at(&self.regions, event.column, event.row);
            handle_click(self, region);
        }
    }
}

/// Route a resolved click to the component under it
pub(super) fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::SuggestionItem { field, index }) => {
            if let Some(binding) = app.bindings.get_mut(field) {
                binding.apply_suggestion(index);
                app.focus = field;
            }
        }
        Some(Region::Field(index)) => click_field(app, index),
        None => {}
    }
}

fn click_field(app: &mut App, index: usize) {
    if index == app.focus || index >= app.bindings.len() {
        return;
    }
    if let Some(binding) = app.focused_binding() {
        binding.suggestions.clear();
    }
    app.focus = index;
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
