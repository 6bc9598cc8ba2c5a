use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::binding;

use super::state::App;

/// Height of one bordered input field
const FIELD_HEIGHT: u16 = 3;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.regions.clear();

        // One fixed-height row per field, filler, then the status line
        let mut constraints: Vec<Constraint> = self
            .bindings
            .iter()
            .map(|_| Constraint::Length(FIELD_HEIGHT))
            .collect();
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));
        let areas = Layout::vertical(constraints).split(frame.area());

        for (index, area) in areas.iter().take(self.bindings.len()).enumerate() {
            let focused = index == self.focus;
            binding::render_field(&mut self.bindings[index], focused, frame, *area);
            self.regions.record_field(*area);
        }

        self.render_status_line(frame, areas[areas.len() - 1]);

        // Dropdowns last so they overlay whatever sits below their anchor
        for index in 0..self.bindings.len() {
            let anchor = self.regions.fields()[index];
            binding::render_popup(
                &self.bindings[index],
                index,
                frame,
                anchor,
                &mut self.regions,
            );
        }
    }

    /// Render the key hint line at the bottom
    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let hint = Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" next field  "),
            Span::styled("↑/↓", Style::default().fg(Color::Cyan)),
            Span::raw(" choose  "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" accept  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]);

        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
