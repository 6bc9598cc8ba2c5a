use crate::binding::FieldBinding;
use crate::layout::LayoutRegions;

/// Application state
///
/// Holds the form's field bindings and the focus between them. Bindings are
/// passed in fully constructed; the app never looks anything up by name.
pub struct App {
    pub bindings: Vec<FieldBinding>,
    /// Index of the focused binding
    pub focus: usize,
    pub should_quit: bool,
    /// Set when the user accepts the form; controls stdout output on exit
    pub accepted: bool,
    /// Component positions from the last render, for mouse hit testing
    pub regions: LayoutRegions,
}

impl App {
    /// Create a new App instance over the given bindings
    pub fn new(bindings: Vec<FieldBinding>) -> Self {
        Self {
            bindings,
            focus: 0,
            should_quit: false,
            accepted: false,
            regions: LayoutRegions::new(),
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focused_binding(&mut self) -> Option<&mut FieldBinding> {
        self.bindings.get_mut(self.focus)
    }

    /// Move focus to the next field, closing the current dropdown
    pub fn focus_next(&mut self) {
        if self.bindings.is_empty() {
            return;
        }
        if let Some(binding) = self.focused_binding() {
            binding.suggestions.clear();
        }
        self.focus = (self.focus + 1) % self.bindings.len();
    }

    /// Move focus to the previous field, closing the current dropdown
    pub fn focus_previous(&mut self) {
        if self.bindings.is_empty() {
            return;
        }
        if let Some(binding) = self.focused_binding() {
            binding.suggestions.clear();
        }
        self.focus = if self.focus == 0 {
            self.bindings.len() - 1
        } else {
            self.focus - 1
        };
    }

    /// Accept the form: remember to emit the values and quit
    pub fn accept(&mut self) {
        self.accepted = true;
        self.should_quit = true;
    }

    /// Drain worker responses for all bindings
    ///
    /// Returns true if any binding changed visibly.
    pub fn drain_responses(&mut self) -> bool {
        let mut changed = false;
        for binding in &mut self.bindings {
            changed |= binding.poll_responses();
        }
        changed
    }

    /// The accepted field values, tab separated, in field order
    ///
    /// None when the form was dismissed rather than accepted.
    pub fn output(&self) -> Option<String> {
        self.accepted.then(|| {
            self.bindings
                .iter()
                .map(|binding| binding.text())
                .collect::<Vec<_>>()
                .join("\t")
        })
    }
}
