//! Suggestion list state
//!
//! Holds the items fetched for the current query and the keyboard selection
//! within them. The list is visible exactly when it has items; clearing it
//! is how a binding closes its dropdown.

/// State of one binding's suggestion dropdown
#[derive(Debug, Clone, Default)]
pub struct SuggestionList {
    items: Vec<String>,
    selected_index: Option<usize>,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list contents, dropping any previous selection
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.selected_index = None;
    }

    /// Remove all items and close the dropdown
    pub fn clear(&mut self) {
        self.items.clear();
        self.selected_index = None;
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The dropdown is shown exactly when there are items to show
    pub fn is_visible(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected_index.and_then(|i| self.get(i))
    }

    /// Move the selection to the next item, wrapping at the end
    pub fn navigate_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(current) => (current + 1) % self.items.len(),
            None => 0,
        });
    }

    /// Move the selection to the previous item, wrapping at the start
    pub fn navigate_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(0) | None => self.items.len() - 1,
            Some(current) => current - 1,
        });
    }
}
