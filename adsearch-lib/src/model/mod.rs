//! Data model types

mod customer;
mod record;
mod row;
mod types;

pub use customer::CustomerId;
pub use record::AdGroup;
pub use record::AdGroupCriterion;
pub use record::KeywordInfo;
pub use record::SearchRecord;
pub(crate) use record::int64_text;
pub use row::KeywordRow;
pub use types::CriterionType;
pub use types::KeywordMatchType;
