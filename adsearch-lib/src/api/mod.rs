//! Search API operations

pub mod query;
mod service;

pub use service::*;

use query::Query;
use query::SearchPages;
use query::SearchRows;

/// Starts a lazy row search against `service`.
///
/// Nothing is fetched until the first row is pulled. Each call starts an
/// independent server-side cursor.
pub fn search<S: SearchService + ?Sized>(service: &S, query: Query) -> SearchRows<'_, S> {
    SearchRows::new(service, query)
}

/// Starts a lazy page-by-page search against `service`.
pub fn search_pages<S: SearchService + ?Sized>(service: &S, query: Query) -> SearchPages<'_, S> {
    SearchPages::new(service, query)
}
