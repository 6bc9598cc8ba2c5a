use ratatui::layout::Rect;

/// A clickable UI component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// An input field, by binding index
    Field(usize),
    /// One row of a suggestion dropdown
    SuggestionItem { field: usize, index: usize },
}

/// Where a suggestion dropdown was rendered
#[derive(Debug, Clone, Copy)]
pub struct PopupRegion {
    /// Binding index the dropdown belongs to
    pub field: usize,
    /// Full dropdown area including the border
    pub area: Rect,
    /// Number of suggestion rows actually shown
    pub item_count: usize,
}

/// Regions recorded during the last render pass
///
/// Cleared and refilled on every draw, so hit testing always reflects what
/// is currently on screen.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    fields: Vec<Rect>,
    popups: Vec<PopupRegion>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all recorded regions, called at the start of a render pass
    pub fn clear(&mut self) {
        self.fields.clear();
        self.popups.clear();
    }

    pub fn record_field(&mut self, area: Rect) {
        self.fields.push(area);
    }

    pub fn record_popup(&mut self, field: usize, area: Rect, item_count: usize) {
        self.popups.push(PopupRegion {
            field,
            area,
            item_count,
        });
    }

    pub fn fields(&self) -> &[Rect] {
        &self.fields
    }

    pub fn popups(&self) -> &[PopupRegion] {
        &self.popups
    }
}
