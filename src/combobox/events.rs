use crate::suggestions::SuggestionRequest;

/// Notifications for the host, collected until `drain_events`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboEvent {
    /// A user gesture committed a different value
    Change { values: Vec<String> },
    /// A suggestion round or page was requested
    SuggestionsRequested {
        request: SuggestionRequest,
        /// A provider took the request over
        claimed: bool,
    },
    SuggestionsHidden,
}
