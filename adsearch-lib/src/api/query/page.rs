//! Page types for paginated search results.

use crate::model::SearchRecord;

/// Opaque continuation cursor returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageToken(String);

impl PageToken {
    /// Wraps a token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A page of search results with pagination information.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    records: Vec<SearchRecord>,
    next_page_token: Option<PageToken>,
    total_results_count: Option<u64>,
}

impl SearchPage {
    /// Creates a page holding the given records and no continuation.
    pub fn new(records: Vec<SearchRecord>) -> Self {
        Self {
            records,
            next_page_token: None,
            total_results_count: None,
        }
    }

    /// Sets the token for the next page.
    ///
    /// An empty token means there are no further pages.
    pub fn with_next_page_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.next_page_token = if token.is_empty() {
            None
        } else {
            Some(PageToken(token))
        };
        self
    }

    /// Sets the total number of rows matching the query.
    pub fn with_total_results_count(mut self, count: u64) -> Self {
        self.total_results_count = Some(count);
        self
    }

    /// Returns a reference to the records in this page.
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<SearchRecord> {
        self.records
    }

    /// Returns the token for fetching the next page, if any.
    pub fn next_page_token(&self) -> Option<&PageToken> {
        self.next_page_token.as_ref()
    }

    /// Returns the total row count, if the service reported it.
    pub fn total_results_count(&self) -> Option<u64> {
        self.total_results_count
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are more pages available.
    pub fn has_more(&self) -> bool {
        self.next_page_token.is_some()
    }
}
