/// A request for suggestions, fresh (`start == 0`) or a further page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    /// Typed text, lowercased and trimmed
    pub query: String,
    /// Number of suggestions already shown
    pub start: usize,
    /// Fresh round this request belongs to; pages share their round's id
    pub round: u64,
}

impl SuggestionRequest {
    pub fn is_page(&self) -> bool {
        self.start > 0
    }
}

/// Answer of a provider to a suggestion request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// Use local filtering of the declared options
    Declined,
    /// The provider will deliver results later through `add_suggestions`
    Claimed,
}

/// External source of suggestions
///
/// A provider that claims a request takes over population of the list; the
/// widget stays in loading mode until results arrive.
pub trait SuggestionProvider {
    fn request(&mut self, request: &SuggestionRequest) -> Claim;
}

impl<F> SuggestionProvider for F
where
    F: FnMut(&SuggestionRequest) -> Claim,
{
    fn request(&mut self, request: &SuggestionRequest) -> Claim {
        self(request)
    }
}
