use axum::http::header::HeaderMap;

use crate::models::FilterOptions;

/// Rows returned when the request names no range.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Upper bound on a single page, whatever the client asks for.
pub const MAX_PAGE_SIZE: u64 = 1000;
/// Largest offset the SQL drivers accept; they bind `OFFSET` as a signed 64-bit integer.
pub const MAX_OFFSET: u64 = i64::MAX.unsigned_abs();

/// Parse a React Admin range `"[start, end]"` (inclusive).
#[must_use]
pub fn parse_range(range_str: Option<&str>) -> (u64, u64) {
    range_str.map_or((0, DEFAULT_PAGE_SIZE - 1), |r| {
        serde_json::from_str::<[u64; 2]>(r)
            .map(|range| (range[0], range[1]))
            .unwrap_or((0, DEFAULT_PAGE_SIZE - 1))
    })
}

/// Resolve `(offset, limit)` from either `page`/`per_page` or `range`.
#[must_use]
pub fn parse_pagination(params: &FilterOptions) -> (u64, u64) {
    let (offset, limit) = if let (Some(page), Some(per_page)) = (params.page, params.per_page) {
        // 1-based page numbers
        let per_page = per_page.clamp(1, MAX_PAGE_SIZE);
        (page.saturating_sub(1).saturating_mul(per_page), per_page)
    } else if let Some(range) = &params.range {
        let (start, end) = parse_range(Some(range));
        (start, end.saturating_sub(start).saturating_add(1))
    } else {
        (0, DEFAULT_PAGE_SIZE)
    };
    (offset.min(MAX_OFFSET), limit.min(MAX_PAGE_SIZE))
}

/// Sanitize resource name by removing control characters for HTTP headers
fn sanitize_resource_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control())
        .collect()
}

/// Build the `Content-Range` header: `"{resource} {start}-{end}/{total}"`.
#[must_use]
pub fn calculate_content_range(
    offset: u64,
    limit: u64,
    total_count: u64,
    resource_name: &str,
) -> HeaderMap {
    let max_offset_limit = offset
        .saturating_add(limit)
        .saturating_sub(1)
        .min(total_count.saturating_sub(1));
    let safe_name = sanitize_resource_name(resource_name);
    let content_range = format!("{safe_name} {offset}-{max_offset_limit}/{total_count}");

    let mut headers = HeaderMap::new();
    if let Ok(value) = content_range.parse() {
        headers.insert("Content-Range", value);
    }
    headers
}
