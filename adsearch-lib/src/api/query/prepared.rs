//! A query ready to be sent.

use std::num::NonZeroU32;

use crate::error::Error;
use crate::model::CustomerId;

/// Page size hint used when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 1_000;

const DEFAULT_PAGE_SIZE_NZ: NonZeroU32 = match NonZeroU32::new(DEFAULT_PAGE_SIZE) {
    Some(size) => size,
    None => panic!("default page size must be non-zero"),
};

/// An immutable search query: the text, the account it runs against, and the
/// page size hint sent with every page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    customer_id: CustomerId,
    text: String,
    page_size: NonZeroU32,
}

impl Query {
    /// Creates a query with the default page size.
    ///
    /// Fails with [`Error::InvalidArgument`] if the text is blank.
    pub fn new(customer_id: CustomerId, text: impl Into<String>) -> Result<Self, Error> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::invalid_argument("query text is empty"));
        }
        Ok(Self {
            customer_id,
            text,
            page_size: DEFAULT_PAGE_SIZE_NZ,
        })
    }

    /// Returns a copy of this query with a different page size hint.
    ///
    /// Fails with [`Error::InvalidArgument`] if `page_size` is zero.
    pub fn with_page_size(self, page_size: u32) -> Result<Self, Error> {
        let page_size = NonZeroU32::new(page_size)
            .ok_or_else(|| Error::invalid_argument("page size must be greater than zero"))?;
        Ok(Self { page_size, ..self })
    }

    /// The account the query runs against.
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// The query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The page size hint.
    pub fn page_size(&self) -> u32 {
        self.page_size.get()
    }
}
