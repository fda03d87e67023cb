use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    Condition, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Order, PaginatorTrait,
    QueryOrder, QuerySelect, entity::prelude::*,
};

use crate::errors::ApiError;

pub trait MergeIntoActiveModel<ActiveModelType> {
    /// Merge this request model into an existing active model
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidPatch` if a field cannot take the requested value.
    fn merge_into_activemodel(self, existing: ActiveModelType) -> Result<ActiveModelType, ApiError>;
}

/// Generic repository over one Sea-ORM entity.
///
/// Every method has a default implementation; an entity only supplies its
/// associated types, column constants and the filter/sort column tables.
#[async_trait]
pub trait CrudResource: Sized + Send + Sync
where
    Self::EntityType: EntityTrait + Sync,
    Self::ActiveModelType: ActiveModelTrait + ActiveModelBehavior + Send + Sync,
    <Self::EntityType as EntityTrait>::Model: Sync + IntoActiveModel<Self::ActiveModelType>,
    <<Self::EntityType as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    Self: From<<Self::EntityType as EntityTrait>::Model>,
{
    type EntityType: EntityTrait<Column = Self::ColumnType> + Sync;
    type ColumnType: ColumnTrait + Copy + std::fmt::Debug;
    type ActiveModelType: ActiveModelTrait<Entity = Self::EntityType>;
    type CreateModel: Into<Self::ActiveModelType> + Send;
    type UpdateModel: Send + Sync + MergeIntoActiveModel<Self::ActiveModelType>;
    type PatchModel: Send + Sync + MergeIntoActiveModel<Self::ActiveModelType>;

    const ID_COLUMN: Self::ColumnType;
    const ACTIVE_COLUMN: Self::ColumnType;
    const UPDATE_DATE_COLUMN: Self::ColumnType;
    const DELETE_DATE_COLUMN: Self::ColumnType;
    const RESOURCE_NAME_SINGULAR: &'static str;
    const RESOURCE_NAME_PLURAL: &'static str;
    const RESOURCE_DESCRIPTION: &'static str = "";

    async fn get_all(
        db: &DatabaseConnection,
        condition: &Condition,
        order_column: Self::ColumnType,
        order_direction: Order,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self>, ApiError> {
        tracing::debug!(resource = Self::RESOURCE_NAME_PLURAL, offset, limit, "get_all");
        let models = Self::EntityType::find()
            .filter(condition.clone())
            .order_by(order_column, order_direction)
            .offset(offset)
            .limit(limit)
            .all(db)
            .await
            .map_err(|err| Self::db_error("get_all", err))?;
        Ok(models.into_iter().map(Self::from).collect())
    }

    async fn get_one(db: &DatabaseConnection, id: i32) -> Result<Self, ApiError> {
        tracing::debug!(resource = Self::RESOURCE_NAME_SINGULAR, id, "get_one");
        Self::find_model(db, id, "get_one").await.map(Self::from)
    }

    async fn create(
        db: &DatabaseConnection,
        create_model: Self::CreateModel,
    ) -> Result<Self, ApiError> {
        tracing::debug!(resource = Self::RESOURCE_NAME_SINGULAR, "create");
        let active_model: Self::ActiveModelType = create_model.into();
        let model = active_model
            .insert(db)
            .await
            .map_err(|err| Self::db_error("create", err))?;
        Ok(Self::from(model))
    }

    /// Full replacement of the writable fields (PUT).
    async fn update(
        db: &DatabaseConnection,
        id: i32,
        update_model: Self::UpdateModel,
    ) -> Result<Self, ApiError> {
        tracing::debug!(resource = Self::RESOURCE_NAME_SINGULAR, id, "update");
        Self::merge_and_save(db, id, update_model, "update").await
    }

    /// Partial update (PATCH): only fields present in the body are written.
    async fn patch(
        db: &DatabaseConnection,
        id: i32,
        patch_model: Self::PatchModel,
    ) -> Result<Self, ApiError> {
        tracing::debug!(resource = Self::RESOURCE_NAME_SINGULAR, id, "patch");
        Self::merge_and_save(db, id, patch_model, "patch").await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<i32, ApiError> {
        tracing::debug!(resource = Self::RESOURCE_NAME_SINGULAR, id, "delete");
        let res = Self::EntityType::delete_by_id(id)
            .exec(db)
            .await
            .map_err(|err| Self::db_error("delete", err))?;
        match res.rows_affected {
            0 => Err(ApiError::not_found(
                Self::RESOURCE_NAME_SINGULAR,
                Some(id.to_string()),
            )),
            _ => Ok(id),
        }
    }

    /// Marks the row inactive and stamps `delete_date`; the row stays readable.
    async fn soft_delete(db: &DatabaseConnection, id: i32) -> Result<i32, ApiError> {
        tracing::debug!(resource = Self::RESOURCE_NAME_SINGULAR, id, "soft_delete");
        let model = Self::find_model(db, id, "soft_delete").await?;
        let mut active_model: Self::ActiveModelType = model.into_active_model();
        active_model.set(Self::ACTIVE_COLUMN, false.into());
        active_model.set(Self::DELETE_DATE_COLUMN, Some(Utc::now()).into());
        active_model
            .update(db)
            .await
            .map_err(|err| Self::db_error("soft_delete", err))?;
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns `ApiError::Persistence` if the count query fails.
    async fn total_count(db: &DatabaseConnection, condition: &Condition) -> Result<u64, ApiError> {
        let query = Self::EntityType::find().filter(condition.clone());
        PaginatorTrait::count(query, db)
            .await
            .map_err(|err| Self::db_error("total_count", err))
    }

    async fn find_model(
        db: &DatabaseConnection,
        id: i32,
        operation: &'static str,
    ) -> Result<<Self::EntityType as EntityTrait>::Model, ApiError> {
        Self::EntityType::find_by_id(id)
            .one(db)
            .await
            .map_err(|err| Self::db_error(operation, err))?
            .ok_or_else(|| ApiError::not_found(Self::RESOURCE_NAME_SINGULAR, Some(id.to_string())))
    }

    /// Loads the row, merges `changes` into it and writes it back.
    ///
    /// A merge that touches nothing skips the write, so `update_date` only
    /// moves when a column actually changed.
    async fn merge_and_save<M>(
        db: &DatabaseConnection,
        id: i32,
        changes: M,
        operation: &'static str,
    ) -> Result<Self, ApiError>
    where
        M: MergeIntoActiveModel<Self::ActiveModelType> + Send,
    {
        let model = Self::find_model(db, id, operation).await?;
        let existing: Self::ActiveModelType = model.clone().into_active_model();
        let mut merged = changes.merge_into_activemodel(existing)?;
        if !merged.is_changed() {
            return Ok(Self::from(model));
        }
        merged.set(Self::UPDATE_DATE_COLUMN, Some(Utc::now()).into());
        let updated = merged
            .update(db)
            .await
            .map_err(|err| Self::db_error(operation, err))?;
        Ok(Self::from(updated))
    }

    /// Logs a store failure with its resource and operation, then converts it.
    fn db_error(operation: &'static str, err: DbErr) -> ApiError {
        if !matches!(err, DbErr::RecordNotFound(_)) {
            tracing::error!(
                resource = Self::RESOURCE_NAME_SINGULAR,
                operation,
                error = ?err,
                "Persistence error"
            );
        }
        ApiError::persistence(err)
    }

    #[must_use]
    fn default_index_column() -> Self::ColumnType {
        Self::ID_COLUMN
    }

    #[must_use]
    fn sortable_columns() -> Vec<(&'static str, Self::ColumnType)> {
        vec![("id", Self::ID_COLUMN)]
    }

    #[must_use]
    fn filterable_columns() -> Vec<(&'static str, Self::ColumnType)> {
        vec![("id", Self::ID_COLUMN), ("active", Self::ACTIVE_COLUMN)]
    }

    /// Filterable string columns matched with a case-insensitive `LIKE`.
    #[must_use]
    fn like_filterable_columns() -> Vec<&'static str> {
        vec![]
    }
}

/// Resolve snake_case field names to their columns, skipping unknown names.
///
/// Used by the generated resource impls to build sortable/filterable tables
/// from the same field lists that define the request models.
#[must_use]
pub fn named_columns<C: ColumnTrait>(names: &[&'static str]) -> Vec<(&'static str, C)> {
    names
        .iter()
        .filter_map(|name| C::from_str(name).ok().map(|column| (*name, column)))
        .collect()
}
