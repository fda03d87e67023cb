//! Join table between users and roles.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "user_rol")]
#[schema(as = UserRol)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub rol_id: i32,
    pub active: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub delete_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::rol::Entity",
        from = "Column::RolId",
        to = "super::rol::Column::Id"
    )]
    Rol,
}

impl ActiveModelBehavior for ActiveModel {}

crate::crud_models! {
    resource: UserRol,
    singular: "user_rol",
    plural: "user_roles",
    description: "Role assignments of users.",
    create: UserRolCreate,
    update: UserRolUpdate,
    patch: UserRolPatch,
    required { user_id: i32, rol_id: i32 }
    nullable {}
    like []
}

crate::crud_handlers!(UserRol, UserRolCreate, UserRolUpdate, UserRolPatch);
