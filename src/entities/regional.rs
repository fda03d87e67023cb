use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "regional")]
#[schema(as = Regional)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    pub address: Option<String>,
    pub active: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub delete_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

crate::crud_models! {
    resource: Regional,
    singular: "regional",
    plural: "regionals",
    description: "Regional offices that host training.",
    create: RegionalCreate,
    update: RegionalUpdate,
    patch: RegionalPatch,
    required { name: String, code: String }
    nullable { address: String }
    like [name, code, address]
}

crate::crud_handlers!(Regional, RegionalCreate, RegionalUpdate, RegionalPatch);
