//! Typed keyword result row

use crate::error::Error;

use super::CriterionType;
use super::KeywordMatchType;
use super::SearchRecord;

/// One keyword criterion, extracted from a search result row.
///
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRow {
    text: String,
    match_type: KeywordMatchType,
    criterion_type: CriterionType,
    criterion_id: i64,
    ad_group_id: i64,
}

impl KeywordRow {
    /// Creates a row from already-typed values.
    pub fn new(
        text: impl Into<String>,
        match_type: KeywordMatchType,
        criterion_type: CriterionType,
        criterion_id: i64,
        ad_group_id: i64,
    ) -> Self {
        Self {
            text: text.into(),
            match_type,
            criterion_type,
            criterion_id,
            ad_group_id,
        }
    }

    /// The keyword text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// How the keyword matches search terms.
    pub fn match_type(&self) -> &KeywordMatchType {
        &self.match_type
    }

    /// The criterion type (always [`CriterionType::Keyword`] for rows built from records).
    pub fn criterion_type(&self) -> &CriterionType {
        &self.criterion_type
    }

    /// The criterion id.
    pub fn criterion_id(&self) -> i64 {
        self.criterion_id
    }

    /// The id of the ad group owning the criterion.
    pub fn ad_group_id(&self) -> i64 {
        self.ad_group_id
    }
}

impl TryFrom<SearchRecord> for KeywordRow {
    type Error = Error;

    /// Extracts a keyword row.
    ///
    /// Fails with [`Error::DataIntegrity`] if the record is not a keyword
    /// criterion, lacks the keyword payload, or is missing either id.
    fn try_from(record: SearchRecord) -> Result<Self, Self::Error> {
        let ad_group = record
            .ad_group
            .ok_or_else(|| Error::data_integrity("row has no ad_group"))?;
        let criterion = record
            .ad_group_criterion
            .ok_or_else(|| Error::data_integrity("row has no ad_group_criterion"))?;

        let criterion_type = criterion
            .criterion_type
            .as_deref()
            .map(CriterionType::from_wire)
            .unwrap_or_default();
        if criterion_type != CriterionType::Keyword {
            return Err(Error::data_integrity(format!(
                "expected a KEYWORD criterion, got {}",
                criterion_type
            )));
        }
        let keyword = criterion
            .keyword
            .ok_or_else(|| Error::data_integrity("KEYWORD criterion has no keyword payload"))?;

        let ad_group_id = parse_id("ad_group.id", ad_group.id.as_deref())?;
        let criterion_id = parse_id(
            "ad_group_criterion.criterion_id",
            criterion.criterion_id.as_deref(),
        )?;

        // Empty strings and zero enums are omitted on the wire.
        let match_type = keyword
            .match_type
            .as_deref()
            .map(KeywordMatchType::from_wire)
            .unwrap_or_default();

        Ok(Self {
            text: keyword.text.unwrap_or_default(),
            match_type,
            criterion_type,
            criterion_id,
            ad_group_id,
        })
    }
}

fn parse_id(field: &str, value: Option<&str>) -> Result<i64, Error> {
    let value = value.ok_or_else(|| Error::data_integrity(format!("row has no {}", field)))?;
    value
        .parse()
        .map_err(|_| Error::data_integrity(format!("{} '{}' is not an integer", field, value)))
}
