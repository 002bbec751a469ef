//! Suggestion rounds, pagination and the list lifecycle

use std::time::Instant;

use super::events::ComboEvent;
use super::state::Combobox;
use crate::frame::FrameTask;
use crate::matcher::{matches, matches_exact};
use crate::options::OptionEntry;
use crate::scroll::NEAR_BOTTOM_ROWS;
use crate::suggestions::{Claim, Suggestion, SuggestionRequest};

/// How `get_matches` compares options against a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MatchKind {
    /// The configured match mode, for filtering suggestions
    Filter,
    /// Trimmed, case-insensitive equality, for commit resolution
    Exact,
}

impl Combobox {
    /// Run a fresh suggestion round for the current input and open the list
    pub fn show_suggestions(&mut self) {
        let query = self.normalized_query();
        self.clear_suggestions();

        let request = self.session.begin_round(&query);
        let claimed = self.claim(request);

        if claimed {
            self.session.mark_claimed();
            self.open_list();
        } else {
            self.open_list();
            let local: Vec<Suggestion> = self
                .get_matches(&query, MatchKind::Filter)
                .iter()
                .map(Suggestion::from)
                .collect();
            self.add_suggestions(local, true);
        }
    }

    /// Close the list; `SuggestionsHidden` is only signalled if it was open
    pub fn hide_suggestions(&mut self) {
        let was_open = self.session.is_open();
        self.session.close();
        self.focus.clear();
        self.list_scroll.reset();
        if was_open {
            self.events.push(ComboEvent::SuggestionsHidden);
        }
    }

    /// Hide the list and give keyboard focus back to the input
    pub fn hide_suggestions_and_focus(&mut self) {
        self.hide_suggestions();
        self.real_focus = super::focus::FocusTarget::Input;
    }

    pub fn clear_suggestions(&mut self) {
        self.session.clear();
        self.focus.clear();
        self.list_scroll.reset();
        self.update_trigger_label(None);
    }

    /// Add suggestions to the list and leave loading mode
    ///
    /// With `clear` the existing entries are replaced. A fresh batch that
    /// belongs to a round the user already dismissed is discarded.
    pub fn add_suggestions(&mut self, suggestions: Vec<Suggestion>, clear: bool) {
        if self.session.is_stale(clear) {
            log::debug!("dropping {} suggestion(s) for a dismissed round", suggestions.len());
            self.session.drop_stale();
            return;
        }

        if clear {
            self.clear_suggestions();
        }

        let suppressed = if self.multiple {
            self.selection.values().to_vec()
        } else {
            Vec::new()
        };
        let outcome = self.session.append(suggestions, &suppressed);

        if outcome.placeholder {
            self.focus.clear();
            self.update_trigger_label(None);
        } else {
            self.update_trigger_label(Some(self.session.items().len()));
        }
    }

    /// Enter or leave loading mode
    ///
    /// Entering it while the list sits at the bottom keeps the loading row in
    /// view after the next render.
    pub fn set_loading(&mut self, loading: bool) {
        let at_bottom = self.list_scroll.is_at_bottom();
        self.session.set_loading(loading);
        if loading && at_bottom {
            self.frame.schedule(FrameTask::ScrollToBottom);
        }
    }

    /// Advance timers: the typing debounce and the scroll debounce
    pub fn tick(&mut self, now: Instant) {
        if self.session.typing().fire(now) {
            self.show_suggestions();
        }
        if self.session.scroll().fire(now) {
            self.handle_scroll_bottom();
        }
    }

    /// The list was scrolled by the user or by the engine
    pub fn on_list_scroll(&mut self, now: Instant) {
        self.session.scroll().schedule(now);
    }

    /// Text in the input changed through typing
    pub(super) fn handle_input_event(&mut self, now: Instant) {
        self.invalid = false;

        if self.session.typing_delay().is_zero() {
            self.show_suggestions();
        } else {
            self.session.typing().schedule(now);
        }
    }

    /// Ask for the next page once the list is scrolled near its end
    pub(super) fn handle_scroll_bottom(&mut self) {
        if !self.session.is_open() || !self.list_scroll.is_near_bottom(NEAR_BOTTOM_ROWS) {
            return;
        }

        let request = self.session.page_request(&self.normalized_query());
        if self.claim(request) {
            self.set_loading(true);
        }
    }

    /// Options matching `query`, falling back to the rendered suggestions when
    /// no declared option matches
    pub(super) fn get_matches(&self, query: &str, kind: MatchKind) -> Vec<OptionEntry> {
        let is_match = |entry: &OptionEntry| match kind {
            MatchKind::Filter => matches(entry, query, &self.match_mode),
            MatchKind::Exact => matches_exact(entry, query),
        };

        let from_options: Vec<OptionEntry> = self
            .index
            .options()
            .iter()
            .filter(|entry| is_match(*entry))
            .cloned()
            .collect();
        if !from_options.is_empty() {
            return from_options;
        }

        self.session
            .candidates()
            .map(|item| OptionEntry::new(item.value.clone(), item.text.clone()))
            .filter(is_match)
            .collect()
    }

    pub(super) fn update_trigger_label(&mut self, count: Option<usize>) {
        self.trigger_label = match count {
            Some(1) => "Show suggestion".to_string(),
            Some(n) if n > 1 => format!("Show {} suggestions", n),
            _ => "Show suggestions".to_string(),
        };
    }

    pub(super) fn open_list(&mut self) {
        if self.session.open() {
            log::debug!("suggestions opened");
        }
    }

    fn normalized_query(&self) -> String {
        self.input_text().trim().to_lowercase()
    }

    /// Offer `request` to the provider and report it to the host
    fn claim(&mut self, request: SuggestionRequest) -> bool {
        let claimed = match self.provider.as_mut() {
            Some(provider) => provider.request(&request) == Claim::Claimed,
            None => false,
        };
        log::debug!(
            "suggestions requested for `{}` from {} (round {}), claimed: {}",
            request.query,
            request.start,
            request.round,
            claimed
        );
        self.events
            .push(ComboEvent::SuggestionsRequested { request, claimed });
        claimed
    }
}
