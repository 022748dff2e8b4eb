//! `WHERE` conditions for search queries.

/// A literal value on the right-hand side of a condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Integer literal, rendered bare: `42`.
    Int(i64),
    /// String literal, rendered quoted: `'mars cruise'`.
    String(String),
    /// Enum constant, rendered bare: `KEYWORD`.
    Enum(String),
    /// Boolean literal: `TRUE` / `FALSE`.
    Bool(bool),
}

impl Literal {
    /// Creates an enum constant literal.
    pub fn constant(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// A condition in a query's `WHERE` clause.
///
/// The query language only joins conditions with `AND`; there is no `OR`.
///
/// # Example
///
/// ```
/// use adsearch_lib::api::query::{Condition, Literal};
///
/// let condition = Condition::eq("ad_group_criterion.type", Literal::constant("KEYWORD"))
///     .and_also(Condition::eq("ad_group.id", 12345i64));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `field = value`
    Eq(String, Literal),
    /// `field != value`
    Ne(String, Literal),
    /// `field > value`
    Gt(String, Literal),
    /// `field >= value`
    Ge(String, Literal),
    /// `field < value`
    Lt(String, Literal),
    /// `field <= value`
    Le(String, Literal),
    /// `field IN (a, b, ...)`
    In(String, Vec<Literal>),
    /// `field NOT IN (a, b, ...)`
    NotIn(String, Vec<Literal>),
    /// `field LIKE 'pattern'`
    Like(String, String),
    /// `field IS NULL`
    IsNull(String),
    /// `field IS NOT NULL`
    IsNotNull(String),
    /// Conjunction of conditions.
    And(Vec<Condition>),
    /// Raw condition text, passed through as-is.
    Raw(String),
}

impl Condition {
    /// Creates an equality condition.
    pub fn eq(field: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::Eq(field.into(), value.into())
    }

    /// Creates a not-equal condition.
    pub fn ne(field: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::Ne(field.into(), value.into())
    }

    /// Creates a greater-than condition.
    pub fn gt(field: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::Gt(field.into(), value.into())
    }

    /// Creates a greater-than-or-equal condition.
    pub fn ge(field: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::Ge(field.into(), value.into())
    }

    /// Creates a less-than condition.
    pub fn lt(field: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::Lt(field.into(), value.into())
    }

    /// Creates a less-than-or-equal condition.
    pub fn le(field: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::Le(field.into(), value.into())
    }

    /// Creates an `IN` condition.
    pub fn in_list<V: Into<Literal>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self::In(field.into(), values.into_iter().map(Into::into).collect())
    }

    /// Creates a `NOT IN` condition.
    pub fn not_in_list<V: Into<Literal>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self::NotIn(field.into(), values.into_iter().map(Into::into).collect())
    }

    /// Creates a `LIKE` condition.
    pub fn like(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::Like(field.into(), pattern.into())
    }

    /// Creates an `IS NULL` condition.
    pub fn is_null(field: impl Into<String>) -> Self {
        Self::IsNull(field.into())
    }

    /// Creates an `IS NOT NULL` condition.
    pub fn is_not_null(field: impl Into<String>) -> Self {
        Self::IsNotNull(field.into())
    }

    /// Creates a conjunction of conditions.
    pub fn and(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::And(conditions.into_iter().collect())
    }

    /// Creates a raw condition (escape hatch).
    pub fn raw(condition: impl Into<String>) -> Self {
        Self::Raw(condition.into())
    }

    /// Combines this condition with another using `AND`.
    pub fn and_also(self, other: Condition) -> Self {
        match self {
            Self::And(mut conditions) => {
                conditions.push(other);
                Self::And(conditions)
            }
            _ => Self::And(vec![self, other]),
        }
    }
}
