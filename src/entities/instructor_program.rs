use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "instructor_program")]
#[schema(as = InstructorProgram)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub instructor_id: i32,
    pub program_id: i32,
    pub active: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub delete_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::instructor::Entity",
        from = "Column::InstructorId",
        to = "super::instructor::Column::Id"
    )]
    Instructor,
    #[sea_orm(
        belongs_to = "super::program::Entity",
        from = "Column::ProgramId",
        to = "super::program::Column::Id"
    )]
    Program,
}

impl ActiveModelBehavior for ActiveModel {}

crate::crud_models! {
    resource: InstructorProgram,
    singular: "instructor_program",
    plural: "instructor_programs",
    description: "Programs each instructor teaches.",
    create: InstructorProgramCreate,
    update: InstructorProgramUpdate,
    patch: InstructorProgramPatch,
    required { instructor_id: i32, program_id: i32 }
    nullable {}
    like []
}

crate::crud_handlers!(InstructorProgram, InstructorProgramCreate, InstructorProgramUpdate, InstructorProgramPatch);
