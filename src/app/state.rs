use std::time::Instant;

use crate::combobox::{ComboEvent, Combobox, FocusTarget};
use crate::provider::RemoteResponses;

use super::output::OutputFormat;

/// Which host element has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Widget,
    DoneButton,
}

/// How the program ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitAction {
    /// Print the committed values
    Accept,
    /// Leave without output
    Cancel,
}

/// Application state
pub struct App {
    pub combo: Combobox,
    pub focus: Focus,
    pub format: OutputFormat,
    /// Config problem shown in the status line
    pub warning: Option<String>,
    remote: Option<RemoteResponses>,
    exit: Option<ExitAction>,
}

impl App {
    pub fn new(mut combo: Combobox, format: OutputFormat) -> Self {
        combo.focus(FocusTarget::Input);
        Self {
            combo,
            focus: Focus::Widget,
            format,
            warning: None,
            remote: None,
            exit: None,
        }
    }

    /// Feed pages from a remote provider installed in the widget
    pub fn with_remote(mut self, remote: RemoteResponses) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.exit.is_some()
    }

    pub fn exit_action(&self) -> Option<ExitAction> {
        self.exit
    }

    pub(super) fn quit(&mut self, action: ExitAction) {
        if action == ExitAction::Accept && self.focus == Focus::Widget {
            // Let single mode resolve pending text before the values are read
            self.combo.focus(FocusTarget::Outside);
        }
        self.exit = Some(action);
    }

    /// Text printed on exit, if any
    pub fn output(&self) -> Option<String> {
        match self.exit? {
            ExitAction::Accept => Some(self.format.format(&self.combo)),
            ExitAction::Cancel => None,
        }
    }

    /// Work due before the next frame: provider pages, timers and option
    /// edits
    pub fn update(&mut self, now: Instant) {
        if let Some(remote) = &self.remote {
            remote.drain_into(&mut self.combo);
        }
        self.combo.tick(now);
        self.combo.flush_mutations();

        for event in self.combo.drain_events() {
            match event {
                ComboEvent::Change { values } => log::debug!("values changed: {:?}", values),
                ComboEvent::SuggestionsRequested { request, claimed } => {
                    log::debug!("round {} requested, claimed: {}", request.round, claimed)
                }
                ComboEvent::SuggestionsHidden => log::debug!("suggestions hidden"),
            }
        }
    }

    /// Deferred widget work, run once the frame is drawn
    pub fn after_draw(&mut self, now: Instant) {
        self.combo.flush_frame(now);
    }

    /// Earliest widget timer, for the event poll timeout
    pub fn next_deadline(&self) -> Option<Instant> {
        self.combo.next_deadline()
    }
}
