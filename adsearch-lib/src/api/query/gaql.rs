//! Query text generation.

use super::Condition;
use super::Literal;
use super::OrderBy;

/// Renders a condition as query text.
pub fn condition_to_gaql(condition: &Condition) -> String {
    match condition {
        Condition::Eq(field, value) => format!("{} = {}", field, literal_to_gaql(value)),
        Condition::Ne(field, value) => format!("{} != {}", field, literal_to_gaql(value)),
        Condition::Gt(field, value) => format!("{} > {}", field, literal_to_gaql(value)),
        Condition::Ge(field, value) => format!("{} >= {}", field, literal_to_gaql(value)),
        Condition::Lt(field, value) => format!("{} < {}", field, literal_to_gaql(value)),
        Condition::Le(field, value) => format!("{} <= {}", field, literal_to_gaql(value)),
        Condition::In(field, values) => format!("{} IN ({})", field, list_to_gaql(values)),
        Condition::NotIn(field, values) => {
            format!("{} NOT IN ({})", field, list_to_gaql(values))
        }
        Condition::Like(field, pattern) => format!("{} LIKE {}", field, escape_string(pattern)),
        Condition::IsNull(field) => format!("{} IS NULL", field),
        Condition::IsNotNull(field) => format!("{} IS NOT NULL", field),
        Condition::And(conditions) => conditions
            .iter()
            .map(condition_to_gaql)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" AND "),
        Condition::Raw(raw) => raw.clone(),
    }
}

/// Renders a literal value.
pub fn literal_to_gaql(value: &Literal) -> String {
    match value {
        Literal::Int(n) => n.to_string(),
        Literal::String(s) => escape_string(s),
        Literal::Enum(name) => name.clone(),
        Literal::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
    }
}

fn list_to_gaql(values: &[Literal]) -> String {
    values
        .iter()
        .map(literal_to_gaql)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders an `ORDER BY` clause body.
pub fn order_to_gaql(order: &OrderBy) -> String {
    order
        .fields()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quotes a string literal.
///
/// Backslashes and single quotes are backslash-escaped.
pub fn escape_string(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_conditions() {
        assert_eq!(
            condition_to_gaql(&Condition::eq("ad_group.id", 12i64)),
            "ad_group.id = 12"
        );
        assert_eq!(
            condition_to_gaql(&Condition::eq(
                "ad_group_criterion.type",
                Literal::constant("KEYWORD")
            )),
            "ad_group_criterion.type = KEYWORD"
        );
        assert_eq!(
            condition_to_gaql(&Condition::ne("ad_group.name", "Test")),
            "ad_group.name != 'Test'"
        );
        assert_eq!(
            condition_to_gaql(&Condition::is_not_null("ad_group.id")),
            "ad_group.id IS NOT NULL"
        );
    }

    #[test]
    fn test_list_conditions() {
        assert_eq!(
            condition_to_gaql(&Condition::in_list(
                "ad_group_criterion.keyword.match_type",
                [Literal::constant("EXACT"), Literal::constant("PHRASE")]
            )),
            "ad_group_criterion.keyword.match_type IN (EXACT, PHRASE)"
        );
        assert_eq!(
            condition_to_gaql(&Condition::not_in_list("ad_group.id", [1i64, 2i64])),
            "ad_group.id NOT IN (1, 2)"
        );
    }

    #[test]
    fn test_combined_conditions() {
        let condition = Condition::eq("ad_group_criterion.type", Literal::constant("KEYWORD"))
            .and_also(Condition::eq("ad_group.id", 7i64))
            .and_also(Condition::like("ad_group_criterion.keyword.text", "%cruise%"));
        assert_eq!(
            condition_to_gaql(&condition),
            "ad_group_criterion.type = KEYWORD AND ad_group.id = 7 AND ad_group_criterion.keyword.text LIKE '%cruise%'"
        );
    }

    #[test]
    fn test_empty_and_renders_nothing() {
        assert_eq!(condition_to_gaql(&Condition::and([])), "");
    }

    #[test]
    fn test_order_by() {
        let order = OrderBy::desc("metrics.clicks").then_asc("ad_group.id");
        assert_eq!(order_to_gaql(&order), "metrics.clicks DESC, ad_group.id ASC");
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("O'Brien"), r"'O\'Brien'");
        assert_eq!(escape_string(r"a\b"), r"'a\\b'");
    }
}
