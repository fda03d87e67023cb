use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "aprendiz")]
#[schema(as = Aprendiz)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub person_id: i32,
    pub enterprise_id: Option<i32>,
    pub active: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub delete_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::PersonId",
        to = "super::person::Column::Id"
    )]
    Person,
    #[sea_orm(
        belongs_to = "super::enterprise::Entity",
        from = "Column::EnterpriseId",
        to = "super::enterprise::Column::Id"
    )]
    Enterprise,
}

impl ActiveModelBehavior for ActiveModel {}

crate::crud_models! {
    resource: Aprendiz,
    singular: "aprendiz",
    plural: "aprendices",
    description: "Apprentices enrolled in programs, optionally sponsored by an enterprise.",
    create: AprendizCreate,
    update: AprendizUpdate,
    patch: AprendizPatch,
    required { person_id: i32 }
    nullable { enterprise_id: i32 }
    like []
}

crate::crud_handlers!(Aprendiz, AprendizCreate, AprendizUpdate, AprendizPatch);
