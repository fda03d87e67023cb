use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "instructor")]
#[schema(as = Instructor)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub person_id: i32,
    pub specialty: Option<String>,
    pub regional_id: Option<i32>,
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
        belongs_to = "super::regional::Entity",
        from = "Column::RegionalId",
        to = "super::regional::Column::Id"
    )]
    Regional,
}

impl ActiveModelBehavior for ActiveModel {}

crate::crud_models! {
    resource: Instructor,
    singular: "instructor",
    plural: "instructors",
    description: "Persons who teach programs.",
    create: InstructorCreate,
    update: InstructorUpdate,
    patch: InstructorPatch,
    required { person_id: i32 }
    nullable { specialty: String, regional_id: i32 }
    like [specialty]
}

crate::crud_handlers!(Instructor, InstructorCreate, InstructorUpdate, InstructorPatch);
