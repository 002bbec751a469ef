//! Terminal view of a combobox
//!
//! Draws the tag row (multiple mode), the input box with icon and trigger,
//! and the suggestion popup, recording every clickable area in the widget's
//! `layout_regions` so pointer events can be routed back.

mod input_render;
mod list_render;
mod tags_render;

use ratatui::{Frame, layout::Rect};

use crate::combobox::Combobox;

/// Rows of the bordered input box
pub const INPUT_HEIGHT: u16 = 3;

/// Rows the widget occupies, not counting the popup
pub fn widget_height(combo: &Combobox) -> u16 {
    if combo.is_multiple() {
        INPUT_HEIGHT + 1
    } else {
        INPUT_HEIGHT
    }
}

/// Draw the widget into `area` and its popup anywhere in the frame
///
/// Returns the input box area, the anchor of the popup.
pub fn render_combobox(combo: &mut Combobox, frame: &mut Frame, area: Rect) -> Rect {
    combo.layout_regions.clear();

    let mut input_area = area;
    if combo.is_multiple() && area.height > INPUT_HEIGHT {
        let tags_area = Rect { height: 1, ..area };
        tags_render::render_tags(combo, frame, tags_area);
        input_area = Rect {
            y: area.y + 1,
            height: area.height - 1,
            ..area
        };
    }
    input_area.height = input_area.height.min(INPUT_HEIGHT);

    input_render::render_input(combo, frame, input_area);
    list_render::render_list(combo, frame, input_area);
    input_area
}
