//! Administrative processes. `started_at` stays empty until the process is opened.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "process")]
#[schema(as = Process)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub active: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub delete_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

crate::crud_models! {
    resource: Process,
    singular: "process",
    plural: "processes",
    description: "Administrative processes tracked by the registry.",
    create: ProcessCreate,
    update: ProcessUpdate,
    patch: ProcessPatch,
    required { name: String }
    nullable { description: String, started_at: DateTime<Utc> }
    like [name, description]
}

crate::crud_handlers!(Process, ProcessCreate, ProcessUpdate, ProcessPatch);
