//! Search query builder.

use crate::error::Error;
use crate::model::CustomerId;

use super::Condition;
use super::OrderBy;
use super::Query;
use super::gaql::condition_to_gaql;
use super::gaql::order_to_gaql;

/// Builder for query text.
///
/// Conditions added with [`filter`](Self::filter) are joined with `AND`.
///
/// # Example
///
/// ```
/// use adsearch_lib::api::query::{Condition, Literal, SearchQuery};
///
/// let text = SearchQuery::from("ad_group_criterion")
///     .select(&["ad_group.id", "ad_group_criterion.keyword.text"])
///     .filter(Condition::eq("ad_group_criterion.type", Literal::constant("KEYWORD")))
///     .to_gaql();
///
/// assert_eq!(
///     text,
///     "SELECT ad_group.id, ad_group_criterion.keyword.text FROM ad_group_criterion \
///      WHERE ad_group_criterion.type = KEYWORD"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    resource: String,
    select: Vec<String>,
    conditions: Vec<Condition>,
    order_by: Option<OrderBy>,
    limit: Option<u32>,
}

impl SearchQuery {
    /// Starts a query against the given resource.
    pub fn from(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            select: Vec::new(),
            conditions: Vec::new(),
            order_by: None,
            limit: None,
        }
    }

    /// Specifies which fields to select.
    pub fn select(mut self, fields: &[&str]) -> Self {
        self.select = fields.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Adds a condition.
    pub fn filter(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Sets the ordering of results.
    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order_by = Some(order);
        self
    }

    /// Limits the total number of rows returned across all pages.
    pub fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    /// Renders the query text.
    pub fn to_gaql(&self) -> String {
        let mut text = format!("SELECT {} FROM {}", self.select.join(", "), self.resource);

        let conditions = condition_to_gaql(&Condition::And(self.conditions.clone()));
        if !conditions.is_empty() {
            text.push_str(" WHERE ");
            text.push_str(&conditions);
        }

        if let Some(ref order) = self.order_by {
            text.push_str(" ORDER BY ");
            text.push_str(&order_to_gaql(order));
        }

        if let Some(limit) = self.limit {
            text.push_str(&format!(" LIMIT {}", limit));
        }

        text
    }

    /// Renders the query and binds it to an account.
    ///
    /// Fails with [`Error::InvalidArgument`] if no fields are selected or the
    /// resource is blank.
    pub fn into_query(self, customer_id: CustomerId) -> Result<Query, Error> {
        if self.select.is_empty() {
            return Err(Error::invalid_argument("query selects no fields"));
        }
        if self.resource.trim().is_empty() {
            return Err(Error::invalid_argument("query has no resource"));
        }
        Query::new(customer_id, self.to_gaql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::query::Literal;

    #[test]
    fn test_select_only() {
        let text = SearchQuery::from("campaign")
            .select(&["campaign.id", "campaign.name"])
            .to_gaql();
        assert_eq!(text, "SELECT campaign.id, campaign.name FROM campaign");
    }

    #[test]
    fn test_all_clauses() {
        let text = SearchQuery::from("ad_group_criterion")
            .select(&["ad_group.id"])
            .filter(Condition::eq("ad_group_criterion.type", Literal::constant("KEYWORD")))
            .filter(Condition::gt("ad_group.id", 10i64))
            .order_by(OrderBy::asc("ad_group.id"))
            .limit(5)
            .to_gaql();
        assert_eq!(
            text,
            "SELECT ad_group.id FROM ad_group_criterion \
             WHERE ad_group_criterion.type = KEYWORD AND ad_group.id > 10 \
             ORDER BY ad_group.id ASC LIMIT 5"
        );
    }

    #[test]
    fn test_into_query_requires_fields() {
        let customer = CustomerId::new(1).unwrap();
        assert!(matches!(
            SearchQuery::from("campaign").into_query(customer),
            Err(Error::InvalidArgument(_))
        ));
    }
}
