//! Keyword search over the fixed corpus.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::data::SEARCH_CORPUS;

/// Placeholder rendered when a non-empty query matches nothing.
pub const NO_RESULTS_TEXT: &str = "No results found";

/// A corpus entry split around its first case-insensitive match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight<'a> {
    pub before: &'a str,
    pub matched: &'a str,
    pub after: &'a str,
}

impl<'a> Highlight<'a> {
    fn split(text: &'a str, range: Range<usize>) -> Self {
        Self { before: &text[..range.start], matched: &text[range.clone()], after: &text[range.end..] }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResults<'a> {
    /// Empty query; the panel is not shown.
    Hidden,
    /// Non-empty query with no matches.
    NoMatches,
    /// Matches in corpus order.
    Matches(Vec<Highlight<'a>>),
}

/// Literal, case-insensitive matcher for `query`.
fn highlighter(query: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(query)).case_insensitive(true).build().ok()
}

/// Byte range of the first case-insensitive occurrence of `needle`.
#[must_use]
pub fn find_case_insensitive(haystack: &str, needle: &str) -> Option<Range<usize>> {
    highlighter(needle)?.find(haystack).map(|m| m.range())
}

/// Filter `corpus` by containment of the lowercased `query` in each
/// lowercased entry.
///
/// The highlight covers the first case-insensitive occurrence in the entry's
/// own text. An entry that only matches after lowercasing (`"İstanbul"` for
/// `"i"`) is listed whole with an empty highlight.
#[must_use]
pub fn search<'a>(corpus: &[&'a str], query: &str) -> SearchResults<'a> {
    if query.is_empty() {
        return SearchResults::Hidden;
    }
    let needle = query.to_lowercase();
    let highlighter = highlighter(query);
    let matches = corpus
        .iter()
        .copied()
        .filter(|item| item.to_lowercase().contains(&needle))
        .map(|item| {
            let range = highlighter.as_ref().and_then(|re| re.find(item)).map(|m| m.range());
            Highlight::split(item, range.unwrap_or(item.len()..item.len()))
        })
        .collect::<Vec<_>>();
    if matches.is_empty() {
        SearchResults::NoMatches
    } else {
        SearchResults::Matches(matches)
    }
}

/// Query text and results-panel visibility.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub open: bool,
}

impl SearchState {
    /// Input handler: store the query and show results unless it is empty.
    pub fn handle_search(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.open = !self.query.is_empty();
    }

    /// Focus handler: reopen the panel for an existing query.
    pub fn focus(&mut self) {
        self.open = !self.query.is_empty();
    }

    /// Click outside the input and the panel.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn results(&self) -> SearchResults<'static> {
        search(SEARCH_CORPUS, &self.query)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.open && self.results() != SearchResults::Hidden
    }
}
