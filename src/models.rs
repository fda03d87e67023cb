use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Query parameters for filtering, pagination, and sorting list endpoints.
///
/// # Filtering
/// `filter` is a JSON object keyed by filterable column:
/// - exact match: `{"active": true}`, `{"person_id": 4}`
/// - substring match on text columns: `{"last_name": "gom"}`
/// - set membership: `{"id": [1, 2, 3]}`
/// - comparisons via suffix: `{"id_gte": 10, "id_lt": 20}`
///
/// # Pagination
/// - React Admin: `range=[0,9]`
/// - REST: `page=1&per_page=10`
///
/// # Sorting
/// - React Admin: `sort=["last_name","DESC"]`
/// - REST: `sort_by=last_name&order=DESC`
#[derive(Debug, Deserialize, IntoParams, ToSchema, Default)]
#[into_params(parameter_in = Query)]
pub struct FilterOptions {
    /// JSON-encoded filter object.
    #[param(example = r#"{"active": true, "last_name": "gom"}"#)]
    pub filter: Option<String>,
    /// Inclusive range `[start, end]`.
    #[param(example = "[0,9]")]
    pub range: Option<String>,
    /// Page number (1-based).
    #[param(example = 1)]
    pub page: Option<u64>,
    /// Items per page.
    #[param(example = 10)]
    pub per_page: Option<u64>,
    /// `["column", "order"]` or a bare column name.
    #[param(example = r#"["id", "ASC"]"#)]
    pub sort: Option<String>,
    /// Sort column for the REST format.
    pub sort_by: Option<String>,
    /// `ASC` or `DESC` for the REST format.
    pub order: Option<String>,
}
