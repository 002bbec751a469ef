use std::time::{Duration, Instant};

use super::debouncer::Debouncer;
use super::item::{Suggestion, SuggestionId, SuggestionItem};
use super::request::SuggestionRequest;

/// Quiet period after the last list scroll before pagination is considered
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(100);

/// Result of merging a batch of suggestions into the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    pub added: usize,
    /// The list ended up empty and now shows the no-results entry
    pub placeholder: bool,
}

#[derive(Debug)]
pub struct SuggestionSession {
    items: Vec<SuggestionItem>,
    open: bool,
    loading: bool,
    next_id: u64,
    round: u64,
    /// A claimed fresh round has not delivered yet
    awaiting_fresh: bool,
    /// The list was closed while a claimed fresh round was in flight
    fresh_cancelled: bool,
    /// The list was closed since the last fresh round began
    dismissed: bool,
    typing: Debouncer,
    scroll: Debouncer,
}

impl SuggestionSession {
    pub fn new(delay: Duration) -> Self {
        Self {
            items: Vec::new(),
            open: false,
            loading: false,
            next_id: 0,
            round: 0,
            awaiting_fresh: false,
            fresh_cancelled: false,
            dismissed: false,
            typing: Debouncer::new(delay),
            scroll: Debouncer::new(SCROLL_DEBOUNCE),
        }
    }

    pub fn items(&self) -> &[SuggestionItem] {
        &self.items
    }

    pub fn item(&self, id: SuggestionId) -> Option<&SuggestionItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: SuggestionId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Entries that came from a round, without the no-results placeholder
    pub fn candidates(&self) -> impl Iterator<Item = &SuggestionItem> {
        self.items.iter().filter(|item| !item.is_placeholder())
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates().count()
    }

    /// The only selectable entry, if exactly one exists
    pub fn sole_selectable(&self) -> Option<&SuggestionItem> {
        let mut selectable = self.items.iter().filter(|item| item.is_selectable());
        match (selectable.next(), selectable.next()) {
            (Some(item), None) => Some(item),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        if !loading {
            self.awaiting_fresh = false;
        }
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn typing_delay(&self) -> Duration {
        self.typing.delay()
    }

    pub fn typing(&mut self) -> &mut Debouncer {
        &mut self.typing
    }

    pub fn scroll(&mut self) -> &mut Debouncer {
        &mut self.scroll
    }

    pub fn is_typing_pending(&self) -> bool {
        self.typing.is_pending()
    }

    /// Earliest deadline among the pending timers
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.typing.deadline(), self.scroll.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Start a fresh round for `query`
    pub fn begin_round(&mut self, query: &str) -> SuggestionRequest {
        self.round += 1;
        self.fresh_cancelled = false;
        self.dismissed = false;
        self.awaiting_fresh = false;
        SuggestionRequest {
            query: query.to_string(),
            start: 0,
            round: self.round,
        }
    }

    /// Record that a provider took over the current fresh round
    pub fn mark_claimed(&mut self) {
        self.awaiting_fresh = true;
        self.loading = true;
    }

    /// Request for the page after the entries already shown
    pub fn page_request(&self, query: &str) -> SuggestionRequest {
        SuggestionRequest {
            query: query.to_string(),
            start: self.candidate_count(),
            round: self.round,
        }
    }

    /// Returns true if the list was closed before
    pub fn open(&mut self) -> bool {
        let opened = !self.open;
        self.open = true;
        opened
    }

    pub fn close(&mut self) {
        self.open = false;
        self.dismissed = true;
        self.typing.cancel();
        self.scroll.cancel();
        if self.awaiting_fresh {
            self.awaiting_fresh = false;
            self.fresh_cancelled = true;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether a batch must be discarded because its round was dismissed
    pub fn is_stale(&self, clear: bool) -> bool {
        clear && !self.open && self.fresh_cancelled
    }

    /// Merge `batch` into the list
    ///
    /// Values in `suppressed` are skipped. When the list ends up with nothing
    /// to show, a disabled no-results entry is added, unless the list was
    /// closed since the round began.
    pub fn append(&mut self, batch: Vec<Suggestion>, suppressed: &[String]) -> AppendOutcome {
        self.loading = false;
        self.awaiting_fresh = false;

        let mut added = 0;
        for suggestion in batch {
            if suppressed.iter().any(|value| *value == suggestion.value) {
                continue;
            }
            if added == 0 {
                self.items.retain(|item| !item.is_placeholder());
            }
            let id = self.allocate_id();
            self.items.push(SuggestionItem::candidate(id, suggestion));
            added += 1;
        }

        let placeholder = self.items.is_empty() && (self.open || !self.dismissed);
        if placeholder {
            let id = self.allocate_id();
            self.items.push(SuggestionItem::no_results(id));
        }

        AppendOutcome { added, placeholder }
    }

    /// Consume the cancellation left by a dismissed fresh round
    pub fn drop_stale(&mut self) {
        self.fresh_cancelled = false;
        self.loading = false;
    }

    fn allocate_id(&mut self) -> SuggestionId {
        let id = SuggestionId(self.next_id);
        self.next_id += 1;
        id
    }
}
