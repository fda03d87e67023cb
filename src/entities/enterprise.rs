//! Sponsoring companies, keyed by their tax id (`nit`).

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "enterprise")]
#[schema(as = Enterprise)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub nit: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub active: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub delete_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

crate::crud_models! {
    resource: Enterprise,
    singular: "enterprise",
    plural: "enterprises",
    description: "Companies sponsoring apprentices.",
    create: EnterpriseCreate,
    update: EnterpriseUpdate,
    patch: EnterprisePatch,
    required { name: String, nit: String }
    nullable { address: String, phone: String, email: String }
    like [name, nit, address, email]
}

crate::crud_handlers!(Enterprise, EnterpriseCreate, EnterpriseUpdate, EnterprisePatch);
