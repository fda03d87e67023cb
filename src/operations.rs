//! # CRUD Operations (business layer)
//!
//! [`CrudOperations`] sits between the HTTP handlers and the repository
//! ([`CrudResource`]). Every method defaults to a straight pass-through, so
//! [`DefaultOperations`] is the whole business layer for most entities. An
//! entity that needs a rule overrides the matching `before_*`/`after_*` hook:
//!
//! ```rust,ignore
//! #[derive(Default)]
//! pub struct UserOperations;
//!
//! #[async_trait]
//! impl CrudOperations for UserOperations {
//!     type Resource = User;
//!
//!     async fn before_create(&self, _db: &DatabaseConnection, data: &UserCreate) -> Result<(), ApiError> {
//!         if data.username.trim().is_empty() {
//!             return Err(ApiError::bad_request("Username cannot be blank"));
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use async_trait::async_trait;
use sea_orm::{Condition, DatabaseConnection, Order};

use crate::core::CrudResource;
use crate::errors::ApiError;

type Create<R> = <R as CrudResource>::CreateModel;
type Update<R> = <R as CrudResource>::UpdateModel;
type PatchOf<R> = <R as CrudResource>::PatchModel;
type Column<R> = <R as CrudResource>::ColumnType;

#[async_trait]
pub trait CrudOperations: Send + Sync {
    type Resource: CrudResource;

    // ---- hooks ----

    async fn before_create(
        &self,
        _db: &DatabaseConnection,
        _data: &Create<Self::Resource>,
    ) -> Result<(), ApiError> {
        Ok(())
    }

    async fn before_update(
        &self,
        _db: &DatabaseConnection,
        _id: i32,
        _data: &Update<Self::Resource>,
    ) -> Result<(), ApiError> {
        Ok(())
    }

    async fn before_patch(
        &self,
        _db: &DatabaseConnection,
        _id: i32,
        _data: &PatchOf<Self::Resource>,
    ) -> Result<(), ApiError> {
        Ok(())
    }

    async fn before_delete(&self, _db: &DatabaseConnection, _id: i32) -> Result<(), ApiError> {
        Ok(())
    }

    async fn before_soft_delete(&self, _db: &DatabaseConnection, _id: i32) -> Result<(), ApiError> {
        Ok(())
    }

    /// Runs after every successful write that returns the entity (create, update, patch).
    async fn after_write(
        &self,
        _db: &DatabaseConnection,
        _entity: &mut Self::Resource,
    ) -> Result<(), ApiError> {
        Ok(())
    }

    // ---- operations ----

    async fn get_all(
        &self,
        db: &DatabaseConnection,
        condition: &Condition,
        order_column: Column<Self::Resource>,
        order_direction: Order,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self::Resource>, ApiError> {
        Self::Resource::get_all(db, condition, order_column, order_direction, offset, limit).await
    }

    async fn get_one(&self, db: &DatabaseConnection, id: i32) -> Result<Self::Resource, ApiError> {
        Self::Resource::get_one(db, id).await
    }

    async fn create(
        &self,
        db: &DatabaseConnection,
        data: Create<Self::Resource>,
    ) -> Result<Self::Resource, ApiError> {
        self.before_create(db, &data).await?;
        let mut entity = Self::Resource::create(db, data).await?;
        self.after_write(db, &mut entity).await?;
        Ok(entity)
    }

    async fn update(
        &self,
        db: &DatabaseConnection,
        id: i32,
        data: Update<Self::Resource>,
    ) -> Result<Self::Resource, ApiError> {
        self.before_update(db, id, &data).await?;
        let mut entity = Self::Resource::update(db, id, data).await?;
        self.after_write(db, &mut entity).await?;
        Ok(entity)
    }

    async fn patch(
        &self,
        db: &DatabaseConnection,
        id: i32,
        data: PatchOf<Self::Resource>,
    ) -> Result<Self::Resource, ApiError> {
        self.before_patch(db, id, &data).await?;
        let mut entity = Self::Resource::patch(db, id, data).await?;
        self.after_write(db, &mut entity).await?;
        Ok(entity)
    }

    async fn delete(&self, db: &DatabaseConnection, id: i32) -> Result<i32, ApiError> {
        self.before_delete(db, id).await?;
        Self::Resource::delete(db, id).await
    }

    async fn soft_delete(&self, db: &DatabaseConnection, id: i32) -> Result<i32, ApiError> {
        self.before_soft_delete(db, id).await?;
        Self::Resource::soft_delete(db, id).await
    }

    async fn total_count(
        &self,
        db: &DatabaseConnection,
        condition: &Condition,
    ) -> Result<u64, ApiError> {
        Self::Resource::total_count(db, condition).await
    }
}

/// Pass-through operations for resources without business rules.
pub struct DefaultOperations<T: CrudResource> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T: CrudResource> DefaultOperations<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T: CrudResource> Default for DefaultOperations<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: CrudResource> CrudOperations for DefaultOperations<T> {
    type Resource = T;
}
