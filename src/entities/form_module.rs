use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "form_module")]
#[schema(as = FormModule)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub form_id: i32,
    pub module_id: i32,
    pub active: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub delete_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::form::Entity",
        from = "Column::FormId",
        to = "super::form::Column::Id"
    )]
    Form,
    #[sea_orm(
        belongs_to = "super::module::Entity",
        from = "Column::ModuleId",
        to = "super::module::Column::Id"
    )]
    Module,
}

impl ActiveModelBehavior for ActiveModel {}

crate::crud_models! {
    resource: FormModule,
    singular: "form_module",
    plural: "form_modules",
    description: "Forms listed under each module.",
    create: FormModuleCreate,
    update: FormModuleUpdate,
    patch: FormModulePatch,
    required { form_id: i32, module_id: i32 }
    nullable {}
    like []
}

crate::crud_handlers!(FormModule, FormModuleCreate, FormModuleUpdate, FormModulePatch);
