//! Join table between roles and forms.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "rol_form")]
#[schema(as = RolForm)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rol_id: i32,
    pub form_id: i32,
    pub permission: Option<String>,
    pub active: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub delete_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rol::Entity",
        from = "Column::RolId",
        to = "super::rol::Column::Id"
    )]
    Rol,
    #[sea_orm(
        belongs_to = "super::form::Entity",
        from = "Column::FormId",
        to = "super::form::Column::Id"
    )]
    Form,
}

impl ActiveModelBehavior for ActiveModel {}

crate::crud_models! {
    resource: RolForm,
    singular: "rol_form",
    plural: "rol_forms",
    description: "Forms a role may open, with an optional permission string.",
    create: RolFormCreate,
    update: RolFormUpdate,
    patch: RolFormPatch,
    required { rol_id: i32, form_id: i32 }
    nullable { permission: String }
    like [permission]
}

crate::crud_handlers!(RolForm, RolFormCreate, RolFormUpdate, RolFormPatch);
