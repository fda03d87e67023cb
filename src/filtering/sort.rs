use sea_orm::{ColumnTrait, sea_query::Order};

use crate::models::FilterOptions;

const DEFAULT_SORT_COLUMN: &str = "id";
const DEFAULT_SORT_ORDER: &str = "ASC";

/// Parse sort column and order from JSON array format
fn parse_json_sort(json: &str) -> (String, String) {
    let sort_vec: Vec<String> = serde_json::from_str(json).unwrap_or_default();
    (
        sort_vec
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_SORT_COLUMN.to_string()),
        sort_vec
            .get(1)
            .cloned()
            .unwrap_or_else(|| DEFAULT_SORT_ORDER.to_string()),
    )
}

fn parse_order(sort_order: &str) -> Order {
    if sort_order.eq_ignore_ascii_case("ASC") {
        Order::Asc
    } else {
        Order::Desc
    }
}

/// Find column by name or return default
fn find_column<C>(column_name: &str, columns: &[(&str, C)], default: C) -> C
where
    C: ColumnTrait + Copy,
{
    columns
        .iter()
        .find(|&&(col_name, _)| col_name == column_name)
        .map_or(default, |&(_, col)| col)
}

/// Parse sorting from `FilterOptions`, supporting both React Admin and standard REST formats.
///
/// Unknown columns fall back to `default_column`.
pub fn parse_sorting<C>(
    params: &FilterOptions,
    order_column_logic: &[(&str, C)],
    default_column: C,
) -> (C, Order)
where
    C: ColumnTrait + Copy,
{
    let rest_order = || {
        params
            .order
            .as_deref()
            .unwrap_or(DEFAULT_SORT_ORDER)
            .to_string()
    };

    let (sort_column, sort_order) = if let Some(sort_by) = &params.sort_by {
        // sort_by=column&order=ASC/DESC
        (sort_by.clone(), rest_order())
    } else if let Some(sort) = &params.sort {
        if sort.starts_with('[') {
            // sort=["column", "ASC"]
            parse_json_sort(sort)
        } else {
            (sort.clone(), rest_order())
        }
    } else {
        (DEFAULT_SORT_COLUMN.to_string(), DEFAULT_SORT_ORDER.to_string())
    };

    let order_direction = parse_order(&sort_order);
    let order_column = find_column(&sort_column, order_column_logic, default_column);

    (order_column, order_direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::person;

    fn columns() -> Vec<(&'static str, person::Column)> {
        vec![
            ("id", person::Column::Id),
            ("last_name", person::Column::LastName),
        ]
    }

    fn is_desc(order: &Order) -> bool {
        matches!(order, Order::Desc)
    }

    #[test]
    fn test_default_sort_is_id_ascending() {
        let params = FilterOptions::default();
        let (column, order) = parse_sorting(&params, &columns(), person::Column::Id);
        assert!(matches!(column, person::Column::Id));
        assert!(!is_desc(&order));
    }

    #[test]
    fn test_react_admin_format() {
        let params = FilterOptions {
            sort: Some(r#"["last_name", "DESC"]"#.to_string()),
            ..Default::default()
        };
        let (column, order) = parse_sorting(&params, &columns(), person::Column::Id);
        assert!(matches!(column, person::Column::LastName));
        assert!(is_desc(&order));
    }

    #[test]
    fn test_rest_format() {
        let params = FilterOptions {
            sort_by: Some("last_name".to_string()),
            order: Some("desc".to_string()),
            ..Default::default()
        };
        let (column, order) = parse_sorting(&params, &columns(), person::Column::Id);
        assert!(matches!(column, person::Column::LastName));
        assert!(is_desc(&order));
    }

    #[test]
    fn test_unknown_column_falls_back_to_default() {
        let params = FilterOptions {
            sort: Some(r#"["password", "ASC"]"#.to_string()),
            ..Default::default()
        };
        let (column, _) = parse_sorting(&params, &columns(), person::Column::Id);
        assert!(matches!(column, person::Column::Id));
    }

    #[test]
    fn test_malformed_json_uses_defaults() {
        let params = FilterOptions {
            sort: Some("[not json".to_string()),
            ..Default::default()
        };
        let (column, order) = parse_sorting(&params, &columns(), person::Column::Id);
        assert!(matches!(column, person::Column::Id));
        assert!(!is_desc(&order));
    }
}
