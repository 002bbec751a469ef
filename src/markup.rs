//! Plain-text view of option content
//!
//! Option content flagged as markup (`<b>United</b> States`) is HTML. The engine
//! matches and displays against the plain text, while tags and suggestions keep
//! the original content around for hosts that can render it.

use scraper::Html;

/// Text content of a markup fragment, with character references decoded
pub fn to_plain_text(content: &str) -> String {
    if !content.contains(['<', '&']) {
        return content.to_string();
    }

    let fragment = Html::parse_fragment(content);
    fragment.root_element().text().collect()
}

/// Collapse runs of whitespace into single spaces and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Plain display text for a label that may or may not be markup
pub fn display_text(content: &str, is_markup: bool) -> String {
    if is_markup {
        collapse_whitespace(&to_plain_text(content))
    } else {
        content.trim().to_string()
    }
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod markup_tests;
