//! Suggestion worker thread
//!
//! Receives requests over a channel, filters the option snapshot and answers
//! with one page per request. When several requests are queued only the
//! newest round is served.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::{PageResponse, RemoteSettings};
use crate::matcher::{self, MatchMode};
use crate::options::OptionEntry;
use crate::suggestions::{Suggestion, SuggestionRequest};

pub fn spawn_worker(
    options: Vec<OptionEntry>,
    match_mode: MatchMode,
    settings: RemoteSettings,
    request_rx: Receiver<SuggestionRequest>,
    response_tx: Sender<PageResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(&options, &match_mode, settings, request_rx, response_tx);
    });
}

/// Process requests until either channel closes
pub(super) fn worker_loop(
    options: &[OptionEntry],
    match_mode: &MatchMode,
    settings: RemoteSettings,
    request_rx: Receiver<SuggestionRequest>,
    response_tx: Sender<PageResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let request = newest_request(request, &request_rx);
        if !settings.latency.is_zero() {
            std::thread::sleep(settings.latency);
        }

        let page = build_page(options, match_mode, settings.page_size, &request);
        log::debug!(
            "serving {} suggestion(s) for `{}` from {} (round {})",
            page.suggestions.len(),
            request.query,
            request.start,
            request.round
        );
        if response_tx.send(page).is_err() {
            break;
        }
    }

    log::debug!("suggestion worker shutting down");
}

/// Skip queued requests that belong to older rounds
fn newest_request(
    mut current: SuggestionRequest,
    request_rx: &Receiver<SuggestionRequest>,
) -> SuggestionRequest {
    loop {
        match request_rx.try_recv() {
            Ok(next) if next.round > current.round => {
                log::debug!("skipping request of round {}", current.round);
                current = next;
            }
            Ok(next) if next.round == current.round && next.start > current.start => {
                current = next;
            }
            Ok(_) => {}
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return current,
        }
    }
}

pub(super) fn build_page(
    options: &[OptionEntry],
    match_mode: &MatchMode,
    page_size: usize,
    request: &SuggestionRequest,
) -> PageResponse {
    let matching: Vec<&OptionEntry> = options
        .iter()
        .filter(|option| matcher::matches(option, &request.query, match_mode))
        .collect();

    let suggestions: Vec<Suggestion> = matching
        .iter()
        .skip(request.start)
        .take(page_size)
        .map(|option| Suggestion::from(*option))
        .collect();
    let has_more = request.start + suggestions.len() < matching.len();

    PageResponse {
        round: request.round,
        start: request.start,
        suggestions,
        has_more,
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
