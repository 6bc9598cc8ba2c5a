//! Field and suggestion dropdown rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::layout::LayoutRegions;
use crate::widgets::popup;

use super::FieldBinding;

// Dropdown display constants
const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MAX_POPUP_WIDTH: usize = 60;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 6;
const POPUP_OFFSET_X: u16 = 2;

/// Render one input field
pub fn render_field(binding: &mut FieldBinding, focused: bool, frame: &mut Frame, area: Rect) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let mut title_spans = vec![Span::raw(format!(" {} ", binding.label))];
    if binding.loading {
        title_spans.push(Span::styled("… ", Style::default().fg(Color::Yellow)));
    }
    if binding.error.is_some() {
        title_spans.push(Span::styled(
            "⚠ fetch failed ",
            Style::default().fg(Color::Red),
        ));
    }

    binding.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title_spans))
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(&binding.textarea, area);
}

/// Render the suggestion dropdown under the field
///
/// Rendered after all fields so it overlays whatever sits below the anchor.
/// Records its area in `regions` so mouse clicks can hit suggestion rows.
pub fn render_popup(
    binding: &FieldBinding,
    field_index: usize,
    frame: &mut Frame,
    anchor: Rect,
    regions: &mut LayoutRegions,
) {
    let items = binding.suggestions.items();
    if items.is_empty() {
        return;
    }

    let visible_count = items.len().min(MAX_VISIBLE_SUGGESTIONS);
    let popup_height = (visible_count as u16) + POPUP_BORDER_HEIGHT;

    let max_text_width = items
        .iter()
        .take(MAX_VISIBLE_SUGGESTIONS)
        .map(|item| item.width())
        .max()
        .unwrap_or(0)
        .min(MAX_POPUP_WIDTH);
    let popup_width = (max_text_width as u16) + POPUP_PADDING;

    let popup_area = popup::popup_below_anchor(
        anchor,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        // No room under the anchor
        return;
    }

    let list_items: Vec<ListItem> = items
        .iter()
        .take(visible_count)
        .enumerate()
        .map(|(i, item)| {
            let line = if Some(i) == binding.suggestions.selected_index() {
                Line::from(Span::styled(
                    format!("► {item}"),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {item}"),
                    Style::default().fg(Color::White),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    popup::clear_area(frame, popup_area);
    frame.render_widget(list, popup_area);

    let shown = visible_count.min(popup_area.height.saturating_sub(POPUP_BORDER_HEIGHT) as usize);
    regions.record_popup(field_index, popup_area, shown);
}

#[cfg(test)]
#[path = "binding_render_tests.rs"]
mod binding_render_tests;
