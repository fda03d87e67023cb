//! # Filtering, sorting and pagination for list endpoints
//!
//! Translates the `FilterOptions` query parameters into Sea-ORM conditions:
//!
//! ```text
//! GET /api/person?filter={"active":true,"last_name":"gom"}
//! GET /api/person?filter={"id_gte":10}&sort=["last_name","DESC"]&range=[0,24]
//! GET /api/person?page=2&per_page=50&sort_by=first_name&order=ASC
//! ```
//!
//! Only columns an entity declares filterable or sortable are honoured; anything
//! else is ignored rather than rejected.

pub mod conditions;
pub mod pagination;
pub mod sort;

pub use conditions::apply_filters;
pub use pagination::{calculate_content_range, parse_pagination, parse_range};
pub use sort::parse_sorting;
