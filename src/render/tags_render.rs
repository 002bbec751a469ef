//! Tag row rendering (multiple mode)

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::combobox::{Combobox, FocusTarget};
use crate::layout::TagRegion;

const REMOVE_MARK: &str = "×";

/// Draw tags left to right; tags that do not fit are not drawn
pub fn render_tags(combo: &mut Combobox, frame: &mut Frame, area: Rect) {
    let locked = combo.tags().disabled;
    let tag_style = if combo.real_focus() == FocusTarget::Tags {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    };
    let mark_style = if locked {
        tag_style.fg(Color::Gray)
    } else {
        tag_style.fg(Color::Red)
    };

    let right = area.x.saturating_add(area.width);
    let mut x = area.x;
    let mut spans = Vec::new();
    let mut regions = Vec::new();

    for tag in combo.tags().iter() {
        let label_width = tag.label.width() as u16;
        // " label × "
        let width = label_width + 4;
        if x.saturating_add(width) > right {
            break;
        }

        if !spans.is_empty() {
            spans.push(Span::raw(" "));
            x += 1;
            if x.saturating_add(width) > right {
                break;
            }
        }
        spans.push(Span::styled(format!(" {} ", tag.label), tag_style));
        spans.push(Span::styled(format!("{} ", REMOVE_MARK), mark_style));

        regions.push(TagRegion {
            value: tag.value.clone(),
            area: Rect::new(x, area.y, width, 1),
            remove: Rect::new(x + label_width + 2, area.y, 1, 1),
        });
        x += width;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    combo.layout_regions.tags = regions;
}
