//! Async iterator over result pages.

use std::collections::HashSet;

use crate::api::PageRequest;
use crate::api::SearchService;
use crate::error::Error;

use super::PageToken;
use super::Query;
use super::SearchPage;

/// Async iterator that yields pages of search results.
///
/// Follows the service's page tokens until one comes back empty. A token seen
/// before ends the iteration with [`Error::DataIntegrity`]. Each call to
/// [`next`](Self::next) is at most one fetch. After a failure the iterator is
/// finished; there is no retry.
///
/// # Example
///
/// ```ignore
/// let mut pages = client.search_pages(query);
///
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     println!("{} rows", page.len());
/// }
/// ```
pub struct SearchPages<'a, S: SearchService + ?Sized> {
    service: &'a S,
    query: Query,
    /// Token for the next fetch; `None` before the first fetch.
    next_token: Option<PageToken>,
    seen_tokens: HashSet<PageToken>,
    pages_fetched: usize,
    done: bool,
}

impl<'a, S: SearchService + ?Sized> SearchPages<'a, S> {
    /// Creates a page iterator. Nothing is fetched until the first `next`.
    pub fn new(service: &'a S, query: Query) -> Self {
        Self {
            service,
            query,
            next_token: None,
            seen_tokens: HashSet::new(),
            pages_fetched: 0,
            done: false,
        }
    }

    /// Fetches the next page of results.
    ///
    /// Returns `None` when all pages have been consumed.
    pub async fn next(&mut self) -> Option<Result<SearchPage, Error>> {
        if self.done {
            return None;
        }

        let request = PageRequest {
            customer_id: self.query.customer_id(),
            query: self.query.text(),
            page_size: self.query.page_size(),
            page_token: self.next_token.as_ref(),
        };

        log::debug!(
            "Fetching page {} for customer {} (page size {}, resuming: {})",
            self.pages_fetched + 1,
            request.customer_id,
            request.page_size,
            request.page_token.is_some()
        );

        let result = self.service.fetch_page(request).await;
        self.pages_fetched += 1;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                log::debug!("Page {} failed: {}", self.pages_fetched, e);
                self.done = true;
                return Some(Err(e));
            }
        };

        log::trace!(
            "Page {} returned {} records (more: {})",
            self.pages_fetched,
            page.len(),
            page.has_more()
        );

        match page.next_page_token() {
            Some(token) if self.seen_tokens.contains(token) => {
                self.done = true;
                return Some(Err(Error::data_integrity(format!(
                    "service returned page token '{}' more than once",
                    token.as_str()
                ))));
            }
            Some(token) => {
                self.seen_tokens.insert(token.clone());
                self.next_token = Some(token.clone());
            }
            None => {
                self.next_token = None;
                self.done = true;
            }
        }

        Some(Ok(page))
    }

    /// Returns how many fetches have been issued so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Returns the query being paged.
    pub fn query(&self) -> &Query {
        &self.query
    }
}
