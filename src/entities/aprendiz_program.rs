//! Join table between apprentices and programs.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "aprendiz_program")]
#[schema(as = AprendizProgram)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub aprendiz_id: i32,
    pub program_id: i32,
    pub active: bool,
    pub create_date: DateTime<Utc>,
    pub update_date: Option<DateTime<Utc>>,
    pub delete_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aprendiz::Entity",
        from = "Column::AprendizId",
        to = "super::aprendiz::Column::Id"
    )]
    Aprendiz,
    #[sea_orm(
        belongs_to = "super::program::Entity",
        from = "Column::ProgramId",
        to = "super::program::Column::Id"
    )]
    Program,
}

impl ActiveModelBehavior for ActiveModel {}

crate::crud_models! {
    resource: AprendizProgram,
    singular: "aprendiz_program",
    plural: "aprendiz_programs",
    description: "Program enrolments of apprentices.",
    create: AprendizProgramCreate,
    update: AprendizProgramUpdate,
    patch: AprendizProgramPatch,
    required { aprendiz_id: i32, program_id: i32 }
    nullable {}
    like []
}

crate::crud_handlers!(AprendizProgram, AprendizProgramCreate, AprendizProgramUpdate, AprendizProgramPatch);
