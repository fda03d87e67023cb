//! Login accounts. Each user belongs to one person; usernames are unique
//! and may not be blank.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ApiError;
use crate::operations::CrudOperations;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "users")]
#[schema(as = User)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub person_id: i32,
    pub email: Option<String>,
    pub active: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub delete_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::PersonId",
        to = "super::person::Column::Id"
    )]
    Person,
}

impl ActiveModelBehavior for ActiveModel {}

crate::crud_models! {
    resource: User,
    singular: "user",
    plural: "users",
    description: "Login accounts, each tied to one person.",
    create: UserCreate,
    update: UserUpdate,
    patch: UserPatch,
    required { username: String, person_id: i32 }
    nullable { email: String }
    like [username, email]
}

/// Rejects blank usernames on every write that carries one.
#[derive(Debug, Default)]
pub struct UserOperations;

fn check_username(username: &str) -> Result<(), ApiError> {
    if username.trim().is_empty() {
        return Err(ApiError::bad_request("Username cannot be blank"));
    }
    Ok(())
}

#[async_trait]
impl CrudOperations for UserOperations {
    type Resource = User;

    async fn before_create(
        &self,
        _db: &DatabaseConnection,
        data: &UserCreate,
    ) -> Result<(), ApiError> {
        check_username(&data.username)
    }

    async fn before_update(
        &self,
        _db: &DatabaseConnection,
        _id: i32,
        data: &UserUpdate,
    ) -> Result<(), ApiError> {
        check_username(&data.username)
    }

    async fn before_patch(
        &self,
        _db: &DatabaseConnection,
        _id: i32,
        data: &UserPatch,
    ) -> Result<(), ApiError> {
        match &data.username {
            Patch::Value(username) => check_username(username),
            Patch::Null | Patch::Absent => Ok(()),
        }
    }
}

crate::crud_handlers!(User, UserCreate, UserUpdate, UserPatch, UserOperations);
