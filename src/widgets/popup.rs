use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn popup_below_anchor(anchor: Rect, frame_area: Rect, height: u16, x_offset: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let frame_bottom = frame_area.y.saturating_add(frame_area.height);

    Rect {
        x: anchor.x + x_offset,
        y: popup_y,
        width: anchor.width.saturating_sub(x_offset * 2),
        height: height.min(frame_bottom.saturating_sub(popup_y)),
    }
}

pub fn popup_above_anchor(anchor: Rect, height: u16, x_offset: u16) -> Rect {
    Rect {
        x: anchor.x + x_offset,
        y: anchor.y.saturating_sub(height),
        width: anchor.width.saturating_sub(x_offset * 2),
        height: height.min(anchor.y),
    }
}

/// Place a dropdown under `anchor`, flipping above it when the rows below
/// cannot hold `height` but the rows above hold more
pub fn dropdown_area(anchor: Rect, frame_area: Rect, height: u16, x_offset: u16) -> Rect {
    let below = popup_below_anchor(anchor, frame_area, height, x_offset);
    if below.height >= height {
        return below;
    }

    let above = popup_above_anchor(anchor, height, x_offset);
    if above.height > below.height {
        above
    } else {
        below
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
