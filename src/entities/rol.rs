use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "rol")]
#[schema(as = Rol)]
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
    resource: Rol,
    singular: "rol",
    plural: "roles",
    description: "Named permission sets assigned to users.",
    create: RolCreate,
    update: RolUpdate,
    patch: RolPatch,
    required { name: String }
    nullable { description: String }
    like [name, description]
}

crate::crud_handlers!(Rol, RolCreate, RolUpdate, RolPatch);
