//! Input box rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::combobox::{Combobox, FocusTarget};

const TRIGGER_WIDTH: u16 = 3;

pub fn render_input(combo: &mut Combobox, frame: &mut Frame, area: Rect) {
    let focused = combo.real_focus() == FocusTarget::Input;

    let border_color = if combo.is_disabled() {
        Color::DarkGray
    } else if combo.is_invalid() {
        Color::Red
    } else if focused {
        Color::Cyan
    } else {
        Color::Gray
    };

    let mut title = String::new();
    if !combo.name().is_empty() {
        title = format!(" {}{} ", combo.name(), if combo.is_required() { "*" } else { "" });
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));
    if focused {
        let label = Line::from(Span::styled(
            format!(" {} ", combo.trigger_label()),
            Style::default().fg(Color::DarkGray),
        ));
        block = block.title_top(label.alignment(Alignment::Right));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let mut text_area = inner;

    let icon_width = if combo.icon().is_empty() {
        0
    } else {
        (combo.icon().width() as u16 + 1).min(inner.width)
    };
    if icon_width > 0 {
        let icon = Paragraph::new(Span::styled(
            combo.icon().to_string(),
            Style::default().fg(Color::Yellow),
        ));
        frame.render_widget(icon, Rect { width: icon_width, ..inner });
        text_area.x += icon_width;
        text_area.width -= icon_width;
    }

    let trigger_width = TRIGGER_WIDTH.min(text_area.width);
    let trigger = Rect {
        x: text_area.x + text_area.width - trigger_width,
        width: trigger_width,
        ..text_area
    };
    text_area.width -= trigger_width;

    let glyph = if combo.is_open() { " ▲ " } else { " ▼ " };
    let trigger_style = if combo.real_focus() == FocusTarget::Trigger {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else if combo.is_disabled() || combo.is_read_only() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };
    frame.render_widget(Paragraph::new(Span::styled(glyph, trigger_style)), trigger);

    let cursor_style = if focused && !combo.is_disabled() {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    combo.input_mut().set_cursor_style(cursor_style);
    frame.render_widget(combo.input(), text_area);

    combo.layout_regions.input_field = Some(area);
    combo.layout_regions.trigger = Some(trigger);
}
