//! Tests for the remote provider halves

use super::*;
use crate::combobox::{ComboEvent, Settings};
use crate::options::OptionElement;

fn options(count: usize) -> Vec<OptionElement> {
    (0..count)
        .map(|i| OptionElement::new(format!("v{}", i), format!("Item {}", i)))
        .collect()
}

fn remote_combo(count: usize, page_size: usize) -> (Combobox, RemoteResponses) {
    let mut combo = Combobox::new(options(count), Settings::default());
    let (client, responses) = spawn_remote(
        combo.index().options().to_vec(),
        MatchMode::Contains,
        RemoteSettings {
            page_size,
            latency: Duration::ZERO,
        },
    );
    combo.set_provider(client);
    (combo, responses)
}

fn shown(combo: &Combobox) -> Vec<String> {
    combo.suggestions().iter().map(|item| item.value.clone()).collect()
}

#[test]
fn test_fresh_round_is_claimed_and_delivered() {
    let (mut combo, responses) = remote_combo(5, 3);

    combo.show_suggestions();
    assert!(combo.is_loading());
    assert!(combo.suggestions().is_empty());
    assert!(combo.drain_events().iter().any(|event| matches!(
        event,
        ComboEvent::SuggestionsRequested { claimed: true, .. }
    )));

    assert!(responses.recv_into(&mut combo));
    assert_eq!(shown(&combo), vec!["v0", "v1", "v2"]);
    assert!(!combo.is_loading());
}

#[test]
fn test_superseded_round_is_dropped() {
    let (mut combo, responses) = remote_combo(5, 10);

    combo.show_suggestions();
    combo.show_suggestions();

    // The worker may serve only the newest round; any page of round 1 is dropped
    let mut applied = false;
    while !applied {
        applied = responses.recv_into(&mut combo);
    }
    assert_eq!(combo.suggestion_round(), 2);
    assert_eq!(shown(&combo).len(), 5);
}

#[test]
fn test_exhausted_round_declines_further_pages() {
    let (mut combo, responses) = remote_combo(2, 5);
    combo.show_suggestions();
    assert!(responses.recv_into(&mut combo));

    let mut client = RemoteClient {
        request_tx: mpsc::channel().0,
        exhausted: responses.exhausted.clone(),
    };
    let page = SuggestionRequest {
        query: String::new(),
        start: 2,
        round: combo.suggestion_round(),
    };
    assert_eq!(client.request(&page), Claim::Declined);
}

#[test]
fn test_disconnected_worker_falls_back_to_local_filtering() {
    let (request_tx, request_rx) = mpsc::channel();
    drop(request_rx);
    let mut combo = Combobox::new(options(3), Settings::default());
    combo.set_provider(RemoteClient {
        request_tx,
        exhausted: Exhausted::default(),
    });

    combo.show_suggestions();

    assert!(!combo.is_loading());
    assert_eq!(shown(&combo), vec!["v0", "v1", "v2"]);
}
