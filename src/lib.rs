//! # training-registry
//!
//! CRUD backend for a training-program registry: people, users, roles, forms,
//! regional offices, enterprises, instructors, apprentices, programs and the
//! join tables between them.
//!
//! Every entity is served by the same three layers:
//!
//! - [`CrudResource`](crate::core::CrudResource): generic repository over a Sea-ORM entity
//! - [`operations::CrudOperations`]: business layer with `before_*`/`after_*` hooks
//! - [`crud_handlers!`]: axum handlers documented with utoipa
//!
//! Partial updates use [`Patch<T>`](patch::Patch), which keeps "field omitted",
//! "field set to null" and "field set to a value" apart:
//!
//! ```text
//! PATCH /api/person/1  {}                  -> nothing changes
//! PATCH /api/person/1  {"email": null}     -> email cleared
//! PATCH /api/person/1  {"last_name": null} -> 422, last_name is required
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod entities;
pub mod errors;
pub mod filtering;
pub mod models;
pub mod operations;
pub mod patch;

pub use crate::core::{CrudResource, MergeIntoActiveModel};
pub use errors::ApiError;
pub use operations::{CrudOperations, DefaultOperations};
pub use patch::{Patch, PatchError};
