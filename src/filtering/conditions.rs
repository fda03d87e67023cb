use sea_orm::{
    ColumnTrait, Condition, Value,
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
};
use std::collections::HashMap;

use crate::core::CrudResource;

const MAX_FIELD_VALUE_LENGTH: usize = 10_000;

/// Split a comparison suffix off a filter key: `person_id_gte` -> (`person_id`, `>=`).
fn parse_comparison_operator(field_name: &str) -> Option<(&str, &'static str)> {
    const SUFFIXES: [(&str, &str); 5] = [
        ("_gte", ">="),
        ("_lte", "<="),
        ("_gt", ">"),
        ("_lt", "<"),
        ("_neq", "!="),
    ];
    SUFFIXES.iter().find_map(|(suffix, operator)| {
        field_name
            .strip_suffix(suffix)
            .map(|base_field| (base_field, *operator))
    })
}

fn compare<C, V>(column: C, operator: &str, value: V) -> SimpleExpr
where
    C: ColumnTrait,
    V: Into<Value>,
{
    let column = Expr::col(column);
    let value: Value = value.into();
    match operator {
        ">=" => column.gte(value),
        "<=" => column.lte(value),
        ">" => column.gt(value),
        "<" => column.lt(value),
        "!=" => column.ne(value),
        _ => column.eq(value),
    }
}

/// Escape `\`, `%` and `_` so a value matches literally inside `LIKE ... ESCAPE '\'`.
fn escape_like_wildcards(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn parse_filter_json(filter_str: Option<&str>) -> HashMap<String, serde_json::Value> {
    filter_str.map_or_else(HashMap::new, |filter| {
        serde_json::from_str(filter).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Ignoring invalid JSON in filter string");
            HashMap::new()
        })
    })
}

fn process_string_filter<T: CrudResource>(
    key: &str,
    string_value: &str,
    column: T::ColumnType,
    operator: &str,
) -> Option<SimpleExpr> {
    if string_value.len() > MAX_FIELD_VALUE_LENGTH {
        return None;
    }
    let trimmed_value = string_value.trim();
    if trimmed_value.is_empty() {
        return None;
    }

    if operator == "=" && T::like_filterable_columns().contains(&key) {
        let escaped_value = escape_like_wildcards(trimmed_value);
        let pattern = LikeExpr::new(format!("%{}%", escaped_value.to_uppercase())).escape('\\');
        return Some(SimpleExpr::FunctionCall(Func::upper(Expr::col(column))).like(pattern));
    }
    Some(compare(column, operator, trimmed_value.to_string()))
}

fn process_number_filter(
    number: &serde_json::Number,
    column: impl ColumnTrait,
    operator: &str,
) -> Option<SimpleExpr> {
    if let Some(int_value) = number.as_i64() {
        Some(compare(column, operator, int_value))
    } else {
        number
            .as_f64()
            .map(|float_value| compare(column, operator, float_value))
    }
}

fn process_array_filter(
    array_values: &[serde_json::Value],
    column: impl ColumnTrait,
) -> Option<SimpleExpr> {
    let values: Vec<Value> = array_values
        .iter()
        .filter_map(|value| match value {
            serde_json::Value::String(s) => Some(Value::from(s.clone())),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::from)
                .or_else(|| n.as_f64().map(Value::from)),
            serde_json::Value::Bool(b) => Some(Value::from(*b)),
            _ => None,
        })
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(Expr::col(column).is_in(values))
    }
}

/// Build a `Condition` from the JSON `filter` query parameter.
///
/// Keys not in `T::filterable_columns()` are ignored, as are malformed filters.
/// A key may carry a comparison suffix (`_gte`, `_lte`, `_gt`, `_lt`, `_neq`).
#[must_use]
pub fn apply_filters<T: CrudResource>(filter_str: Option<&str>) -> Condition {
    let filters = parse_filter_json(filter_str);
    let filterable = T::filterable_columns();
    let mut condition = Condition::all();

    for (key, value) in &filters {
        let (field, operator) = parse_comparison_operator(key).unwrap_or((key.as_str(), "="));
        let Some(column) = filterable
            .iter()
            .find(|(col_name, _)| *col_name == field)
            .map(|(_, col)| *col)
        else {
            continue;
        };

        let filter_condition = match value {
            serde_json::Value::String(string_value) => {
                process_string_filter::<T>(field, string_value, column, operator)
            }
            serde_json::Value::Number(number) => process_number_filter(number, column, operator),
            serde_json::Value::Bool(bool_value) => Some(compare(column, operator, *bool_value)),
            serde_json::Value::Array(array_values) if operator == "=" => {
                process_array_filter(array_values, column)
            }
            serde_json::Value::Null if operator == "=" => Some(Expr::col(column).is_null()),
            _ => None,
        };

        if let Some(filter_expr) = filter_condition {
            condition = condition.add(filter_expr);
        }
    }

    condition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comparison_operator() {
        assert_eq!(parse_comparison_operator("person_id_gte"), Some(("person_id", ">=")));
        assert_eq!(parse_comparison_operator("person_id_lte"), Some(("person_id", "<=")));
        assert_eq!(parse_comparison_operator("person_id_gt"), Some(("person_id", ">")));
        assert_eq!(parse_comparison_operator("person_id_lt"), Some(("person_id", "<")));
        assert_eq!(parse_comparison_operator("active_neq"), Some(("active", "!=")));
        assert_eq!(parse_comparison_operator("name"), None);
    }

    #[test]
    fn test_invalid_json_yields_empty_map() {
        assert!(parse_filter_json(Some("{not json")).is_empty());
        assert!(parse_filter_json(None).is_empty());
    }

    #[test]
    fn test_array_filter_skips_objects() {
        use crate::entities::person;
        let values = vec![serde_json::json!({"a": 1}), serde_json::json!(null)];
        assert!(process_array_filter(&values, person::Column::Id).is_none());
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like_wildcards("gomez"), "gomez");
        assert_eq!(escape_like_wildcards("100%"), r"100\%");
        assert_eq!(escape_like_wildcards("o_neil"), r"o\_neil");
        assert_eq!(escape_like_wildcards(r"a\b"), r"a\\b");
        assert_eq!(escape_like_wildcards(r"\%"), r"\\\%");
    }

    #[test]
    fn test_like_filter_escapes_wildcards() {
        use crate::entities::{Person, person};
        use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

        let sql = person::Entity::find()
            .filter(apply_filters::<Person>(Some(r#"{"last_name": "%"}"#)))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains("ESCAPE"), "{sql}");
        assert!(!sql.contains("'%%%'"), "{sql}");

        let sql = person::Entity::find()
            .filter(apply_filters::<Person>(Some(r#"{"last_name": "_"}"#)))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains("ESCAPE"), "{sql}");
        assert!(!sql.contains("'%_%'"), "{sql}");
    }

    #[test]
    fn test_apply_filters_for_person() {
        use crate::entities::{Person, person};
        use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

        let condition = apply_filters::<Person>(Some(
            r#"{"last_name": "gom", "active": true, "id_gte": 3, "password": "x"}"#,
        ));
        let sql = person::Entity::find()
            .filter(condition)
            .build(DbBackend::Sqlite)
            .to_string();

        assert!(sql.contains(r#"UPPER("last_name") LIKE '%GOM%' ESCAPE"#), "{sql}");
        assert!(sql.contains(r#""active" ="#), "{sql}");
        assert!(sql.contains(r#""id" >= 3"#), "{sql}");
        assert!(!sql.contains("password"), "{sql}");
    }
}
