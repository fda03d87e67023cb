pub mod crud_models;
pub mod crud_operations;
pub mod traits;

pub use traits::{CrudResource, MergeIntoActiveModel, named_columns};
