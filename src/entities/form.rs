//! Console forms. `path` is the client-side route the form lives at.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "form")]
#[schema(as = Form)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub path: Option<String>,
    pub active: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub delete_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

crate::crud_models! {
    resource: Form,
    singular: "form",
    plural: "forms",
    description: "Screens of the admin console that a role may open.",
    create: FormCreate,
    update: FormUpdate,
    patch: FormPatch,
    required { name: String }
    nullable { description: String, path: String }
    like [name, description, path]
}

crate::crud_handlers!(Form, FormCreate, FormUpdate, FormPatch);
