use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "module")]
#[schema(as = Module)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub delete_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

crate::crud_models! {
    resource: Module,
    singular: "module",
    plural: "modules",
    description: "Groups of forms shown together in the console menu.",
    create: ModuleCreate,
    update: ModuleUpdate,
    patch: ModulePatch,
    required { name: String }
    nullable { description: String }
    like [name, description]
}

crate::crud_handlers!(Module, ModuleCreate, ModuleUpdate, ModulePatch);
