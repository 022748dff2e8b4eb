//! `ORDER BY` clauses.

use std::fmt;

/// Sort direction of one ordering field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// The query keyword for this direction.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One field of an ordering with its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderField {
    pub field: String,
    pub direction: Direction,
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction.keyword())
    }
}

/// Ordering of query results. Later fields break ties in earlier ones.
///
/// # Example
///
/// ```
/// use adsearch_lib::api::query::OrderBy;
///
/// let order = OrderBy::asc("ad_group.id")
///     .then_desc("ad_group_criterion.criterion_id");
/// assert_eq!(order.fields().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    fields: Vec<OrderField>,
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        Self::by(field, Direction::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::by(field, Direction::Desc)
    }

    /// Orders on a single field.
    pub fn by(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            fields: vec![OrderField {
                field: field.into(),
                direction,
            }],
        }
    }

    pub fn then_asc(self, field: impl Into<String>) -> Self {
        self.then(field, Direction::Asc)
    }

    pub fn then_desc(self, field: impl Into<String>) -> Self {
        self.then(field, Direction::Desc)
    }

    /// Adds a tie-breaking field.
    pub fn then(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.fields.push(OrderField {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn fields(&self) -> &[OrderField] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_insertion_order() {
        let order = OrderBy::desc("metrics.clicks").then("ad_group.id", Direction::default());
        let rendered: Vec<_> = order.fields().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["metrics.clicks DESC", "ad_group.id ASC"]);
    }
}
