//! Suggestion popup rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::combobox::Combobox;
use crate::suggestions::SuggestionItem;
use crate::widgets::popup;

const MAX_VISIBLE_ROWS: usize = 8;
const POPUP_BORDER_HEIGHT: u16 = 2;
const LOADING_TEXT: &str = "Loading…";

/// Draw the open list under (or above) `anchor`
pub fn render_list(combo: &mut Combobox, frame: &mut Frame, anchor: Rect) {
    let rows = combo.list_rows();
    if !combo.is_open() || rows == 0 {
        return;
    }

    let height = rows.min(MAX_VISIBLE_ROWS) as u16 + POPUP_BORDER_HEIGHT;
    let popup_area = popup::dropdown_area(anchor, frame.area(), height, 0);
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);

    combo.list_scroll_mut().update_bounds(rows, inner.height);
    let offset = combo.list_scroll().offset as usize;
    let focused = combo.focused_suggestion();

    let items = combo.suggestions();
    let mut lines: Vec<ListItem> = items
        .iter()
        .skip(offset)
        .take(inner.height as usize)
        .map(|item| ListItem::new(suggestion_line(item, focused == Some(item.id))))
        .collect();
    if combo.is_loading() && lines.len() < inner.height as usize {
        lines.push(ListItem::new(Line::from(Span::styled(
            format!("  {}", LOADING_TEXT),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))));
    }

    popup::clear_area(frame, popup_area);
    frame.render_widget(List::new(lines).block(block), popup_area);
    combo.layout_regions.suggestion_list = Some(inner);
}

fn suggestion_line(item: &SuggestionItem, focused: bool) -> Line<'static> {
    let label = match &item.icon {
        Some(icon) => format!("{} {}", icon, item.text),
        None => item.text.clone(),
    };

    if item.is_placeholder() {
        return Line::from(Span::styled(
            format!("  {}", label),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ));
    }
    if focused {
        return Line::from(Span::styled(
            format!("► {}", label),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let style = if item.disabled {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    } else {
        Style::default().fg(Color::White).bg(Color::Black)
    };
    Line::from(Span::styled(format!("  {}", label), style))
}
