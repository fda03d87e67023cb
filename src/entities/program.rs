use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "program")]
#[schema(as = Program)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
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
    resource: Program,
    singular: "program",
    plural: "programs",
    description: "Training programs offered by the registry.",
    create: ProgramCreate,
    update: ProgramUpdate,
    patch: ProgramPatch,
    required { name: String, code: String }
    nullable { description: String }
    like [name, code, description]
}

crate::crud_handlers!(Program, ProgramCreate, ProgramUpdate, ProgramPatch);
