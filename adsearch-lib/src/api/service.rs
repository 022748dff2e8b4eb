//! The remote search boundary.

use async_trait::async_trait;

use crate::api::query::PageToken;
use crate::api::query::SearchPage;
use crate::error::Error;
use crate::model::CustomerId;

/// One page request: the query, where it runs, and where to resume.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest<'a> {
    /// The account the query runs against.
    pub customer_id: CustomerId,
    /// The query text.
    pub query: &'a str,
    /// The page size hint.
    pub page_size: u32,
    /// The cursor returned with the previous page; `None` for the first page.
    pub page_token: Option<&'a PageToken>,
}

/// A remote service that answers paginated search requests.
///
/// [`AdsClient`](crate::AdsClient) implements this over HTTP. Anything that
/// can return pages of records for a query satisfies it, which is how the
/// paging logic is tested without a network.
///
/// Implementations must not retry; each call is exactly one page fetch.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Fetches one page of results.
    async fn fetch_page(&self, request: PageRequest<'_>) -> Result<SearchPage, Error>;
}
