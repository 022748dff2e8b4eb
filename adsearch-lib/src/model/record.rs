//! Wire shape of a search result row.
//!
//! The service returns one JSON object per row containing only the fields
//! named in the query's `SELECT` clause, grouped by resource:
//!
//! ```json
//! {
//!   "adGroup": { "resourceName": "customers/1/adGroups/2", "id": "2" },
//!   "adGroupCriterion": {
//!     "resourceName": "customers/1/adGroupCriteria/2~3",
//!     "type": "KEYWORD",
//!     "criterionId": "3",
//!     "keyword": { "text": "mars cruise", "matchType": "EXACT" }
//!   }
//! }
//! ```
//!
//! 64-bit integers arrive as JSON strings; numbers are accepted too. They are
//! kept as text here and validated when the record becomes a
//! [`KeywordRow`](super::KeywordRow), so a bad id is a data integrity failure
//! for that row rather than a decode failure for the whole page.

use serde::Deserialize;
use serde::Deserializer;

/// One raw result row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    /// The `ad_group` resource, if selected.
    #[serde(default)]
    pub ad_group: Option<AdGroup>,
    /// The `ad_group_criterion` resource, if selected.
    #[serde(default)]
    pub ad_group_criterion: Option<AdGroupCriterion>,
}

/// The `ad_group` part of a row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdGroup {
    #[serde(default)]
    pub resource_name: Option<String>,
    #[serde(default, deserialize_with = "int64_text")]
    pub id: Option<String>,
}

/// The `ad_group_criterion` part of a row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdGroupCriterion {
    #[serde(default)]
    pub resource_name: Option<String>,
    #[serde(default, rename = "type")]
    pub criterion_type: Option<String>,
    #[serde(default, deserialize_with = "int64_text")]
    pub criterion_id: Option<String>,
    #[serde(default)]
    pub keyword: Option<KeywordInfo>,
}

/// The keyword payload of a keyword criterion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordInfo {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub match_type: Option<String>,
}

impl SearchRecord {
    /// Builds a keyword row record, as the service would return it.
    pub fn keyword(
        ad_group_id: i64,
        criterion_id: i64,
        text: impl Into<String>,
        match_type: impl Into<String>,
    ) -> Self {
        Self {
            ad_group: Some(AdGroup {
                resource_name: None,
                id: Some(ad_group_id.to_string()),
            }),
            ad_group_criterion: Some(AdGroupCriterion {
                resource_name: None,
                criterion_type: Some("KEYWORD".to_string()),
                criterion_id: Some(criterion_id.to_string()),
                keyword: Some(KeywordInfo {
                    text: Some(text.into()),
                    match_type: Some(match_type.into()),
                }),
            }),
        }
    }

    /// Returns the criterion type name, if present.
    pub fn criterion_type(&self) -> Option<&str> {
        self.ad_group_criterion
            .as_ref()
            .and_then(|c| c.criterion_type.as_deref())
    }

    /// Returns `true` if this row is a keyword criterion carrying its keyword payload.
    pub fn is_keyword(&self) -> bool {
        self.criterion_type() == Some("KEYWORD")
            && self
                .ad_group_criterion
                .as_ref()
                .is_some_and(|c| c.keyword.is_some())
    }
}

pub(crate) fn int64_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Int64 {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(Option::<Int64>::deserialize(deserializer)?.map(|v| match v {
        Int64::Text(s) => s,
        Int64::Signed(n) => n.to_string(),
        Int64::Unsigned(n) => n.to_string(),
    }))
}
