//! The keyword criteria query.

use crate::error::Error;
use crate::model::CustomerId;

use super::Condition;
use super::DEFAULT_PAGE_SIZE;
use super::Literal;
use super::Query;
use super::SearchQuery;

/// Fields selected by the keyword query, in the order rows report them.
pub const KEYWORD_FIELDS: [&str; 5] = [
    "ad_group.id",
    "ad_group_criterion.type",
    "ad_group_criterion.criterion_id",
    "ad_group_criterion.keyword.text",
    "ad_group_criterion.keyword.match_type",
];

/// Builds the query listing keyword criteria of an account, optionally
/// restricted to one ad group.
///
/// # Example
///
/// ```
/// use adsearch_lib::api::query::KeywordQuery;
///
/// let query = KeywordQuery::new(2323295773)
///     .ad_group(Some(42))
///     .build()
///     .unwrap();
/// assert!(query.text().ends_with("AND ad_group.id = 42"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordQuery {
    customer_id: i64,
    ad_group_id: Option<i64>,
    page_size: u32,
}

impl KeywordQuery {
    /// Starts a keyword query for an account.
    pub fn new(customer_id: i64) -> Self {
        Self {
            customer_id,
            ad_group_id: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Restricts the query to one ad group, or lifts the restriction with `None`.
    pub fn ad_group(mut self, ad_group_id: Option<i64>) -> Self {
        self.ad_group_id = ad_group_id;
        self
    }

    /// Sets the page size hint.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Builds the query.
    ///
    /// Fails with [`Error::InvalidArgument`] if the account id or the ad group
    /// id is not positive, or the page size is zero.
    pub fn build(self) -> Result<Query, Error> {
        let customer_id = CustomerId::new(self.customer_id)?;

        let mut search = SearchQuery::from("ad_group_criterion")
            .select(&KEYWORD_FIELDS)
            .filter(Condition::eq(
                "ad_group_criterion.type",
                Literal::constant("KEYWORD"),
            ));

        if let Some(ad_group_id) = self.ad_group_id {
            if ad_group_id <= 0 {
                return Err(Error::invalid_argument(format!(
                    "ad group id must be a positive integer, got {}",
                    ad_group_id
                )));
            }
            search = search.filter(Condition::eq("ad_group.id", ad_group_id));
        }

        search
            .into_query(customer_id)?
            .with_page_size(self.page_size)
    }
}

/// Builds the keyword criteria query with the default page size.
///
/// Shorthand for `KeywordQuery::new(customer_id).ad_group(ad_group_id).build()`.
pub fn build_keyword_query(customer_id: i64, ad_group_id: Option<i64>) -> Result<Query, Error> {
    KeywordQuery::new(customer_id).ad_group(ad_group_id).build()
}
