//! Paginated suggestion source backed by a worker thread
//!
//! `spawn_remote` starts a worker that answers `SuggestionRequest`s one page
//! at a time after a simulated latency. The returned `RemoteClient` is
//! installed into the widget as its provider and claims every request it
//! forwards; `RemoteResponses` is polled by the host loop and feeds pages back
//! through `add_suggestions`.

mod worker;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Duration;

use crate::combobox::Combobox;
use crate::matcher::MatchMode;
use crate::options::OptionEntry;
use crate::suggestions::{Claim, Suggestion, SuggestionProvider, SuggestionRequest};

pub use worker::spawn_worker;

/// Remote provider tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteSettings {
    pub page_size: usize,
    pub latency: Duration,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            latency: Duration::from_millis(150),
        }
    }
}

/// One page of results for a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    pub round: u64,
    pub start: usize,
    pub suggestions: Vec<Suggestion>,
    /// More matches exist past this page
    pub has_more: bool,
}

/// Round whose matches have all been delivered; 0 means none
type Exhausted = Arc<AtomicU64>;

/// Provider half: forwards requests to the worker
pub struct RemoteClient {
    request_tx: Sender<SuggestionRequest>,
    exhausted: Exhausted,
}

impl SuggestionProvider for RemoteClient {
    fn request(&mut self, request: &SuggestionRequest) -> Claim {
        if request.is_page() && self.exhausted.load(Ordering::Relaxed) == request.round {
            return Claim::Declined;
        }
        match self.request_tx.send(request.clone()) {
            Ok(()) => Claim::Claimed,
            Err(_) => {
                log::warn!("suggestion worker is gone, filtering locally");
                Claim::Declined
            }
        }
    }
}

/// Host half: collects pages from the worker
pub struct RemoteResponses {
    response_rx: Receiver<PageResponse>,
    exhausted: Exhausted,
}

impl RemoteResponses {
    /// Feed every page that arrived into `combo`
    ///
    /// Pages of superseded rounds are dropped. Returns the number of pages
    /// applied.
    pub fn drain_into(&self, combo: &mut Combobox) -> usize {
        let mut applied = 0;
        loop {
            match self.response_rx.try_recv() {
                Ok(page) => {
                    if self.apply(page, combo) {
                        applied += 1;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::debug!("suggestion worker disconnected");
                    break;
                }
            }
        }
        applied
    }

    /// Block until one page arrives and apply it
    pub fn recv_into(&self, combo: &mut Combobox) -> bool {
        match self.response_rx.recv() {
            Ok(page) => self.apply(page, combo),
            Err(_) => false,
        }
    }

    fn apply(&self, page: PageResponse, combo: &mut Combobox) -> bool {
        if page.round != combo.suggestion_round() {
            log::debug!(
                "dropping page of round {} (current {})",
                page.round,
                combo.suggestion_round()
            );
            return false;
        }
        if !page.has_more {
            self.exhausted.store(page.round, Ordering::Relaxed);
        }
        combo.add_suggestions(page.suggestions, page.start == 0);
        true
    }
}

/// Start the worker over a snapshot of the declared options
pub fn spawn_remote(
    options: Vec<OptionEntry>,
    match_mode: MatchMode,
    settings: RemoteSettings,
) -> (RemoteClient, RemoteResponses) {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(options, match_mode, settings, request_rx, response_tx);

    let exhausted = Exhausted::default();
    (
        RemoteClient {
            request_tx,
            exhausted: exhausted.clone(),
        },
        RemoteResponses {
            response_rx,
            exhausted,
        },
    )
}

#[cfg(test)]
#[path = "provider/provider_tests.rs"]
mod provider_tests;
