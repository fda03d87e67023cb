//! People known to the registry.
//!
//! `document` is the national id number and is unique.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "person")]
#[schema(as = Person)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub document: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub delete_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

crate::crud_models! {
    resource: Person,
    singular: "person",
    plural: "people",
    description: "Natural persons; users, instructors and apprentices all point here.",
    create: PersonCreate,
    update: PersonUpdate,
    patch: PersonPatch,
    required { first_name: String, last_name: String, document: String }
    nullable { email: String, phone: String }
    like [first_name, last_name, document, email]
}

crate::crud_handlers!(Person, PersonCreate, PersonUpdate, PersonPatch);
