use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::{App, Focus};
use crate::render::{render_combobox, widget_height};

const DONE_LABEL: &str = " Done ";
const HINT: &str = "Tab: next  Ctrl+D: accept  Ctrl+C: cancel";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(widget_height(&self.combo)),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let done_area = Rect {
            width: (DONE_LABEL.len() as u16).min(layout[1].width),
            ..layout[1]
        };
        let done_style = if self.focus == Focus::DoneButton {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        frame.render_widget(Paragraph::new(Span::styled(DONE_LABEL, done_style)), done_area);

        let status = match &self.warning {
            Some(warning) => Line::from(Span::styled(warning.clone(), Style::default().fg(Color::Yellow))),
            None => Line::from(Span::styled(HINT, Style::default().fg(Color::DarkGray))),
        };
        frame.render_widget(Paragraph::new(status), layout[3]);

        // Drawn last so the popup covers the rows below the widget
        render_combobox(&mut self.combo, frame, layout[0]);
        self.combo.layout_regions.done_button = Some(done_area);
    }
}
