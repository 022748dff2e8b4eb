//! Query building and paginated result iteration.
//!
//! # Building
//!
//! - [`KeywordQuery`] / [`build_keyword_query`] - the keyword criteria query
//! - [`SearchQuery`] - general builder (`SELECT`, `FROM`, `WHERE`, `ORDER BY`, `LIMIT`)
//! - [`Condition`] / [`Literal`] - `WHERE` conditions, joined with `AND`
//! - [`Query`] - rendered text bound to an account and a page size
//!
//! # Iterating
//!
//! - [`SearchPages`] - one [`SearchPage`] per fetch
//! - [`SearchRows`] - typed rows across all pages

mod builder;
mod condition;
pub mod gaql;
mod keyword;
mod order;
mod page;
mod pages;
mod prepared;
mod rows;

pub use builder::SearchQuery;
pub use condition::Condition;
pub use condition::Literal;
pub use keyword::KEYWORD_FIELDS;
pub use keyword::KeywordQuery;
pub use keyword::build_keyword_query;
pub use order::Direction;
pub use order::OrderBy;
pub use order::OrderField;
pub use page::PageToken;
pub use page::SearchPage;
pub use pages::SearchPages;
pub use prepared::DEFAULT_PAGE_SIZE;
pub use prepared::Query;
pub use rows::MismatchPolicy;
pub use rows::SearchRows;
