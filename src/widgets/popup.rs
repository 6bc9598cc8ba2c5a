use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly below an anchor rect, clamped to the frame
///
/// The popup is shifted right by `x_offset` and never extends past the
/// frame's right or bottom edge. When the anchor sits on the last row the
/// returned rect has zero height.
pub fn popup_below_anchor(
    anchor: Rect,
    frame_area: Rect,
    width: u16,
    height: u16,
    x_offset: u16,
) -> Rect {
    let popup_x = (anchor.x + x_offset).min(frame_area.right());
    let popup_y = anchor.bottom().min(frame_area.bottom());

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(frame_area.right().saturating_sub(popup_x)),
        height: height.min(frame_area.bottom().saturating_sub(popup_y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
