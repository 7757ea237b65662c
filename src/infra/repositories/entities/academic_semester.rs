//! Academic semester database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{AcademicSemester, SemesterName};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "academic_semesters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// Two-digit code, consistent with `name`
    pub code: String,
    pub year: i32,
    pub start_month: String,
    pub end_month: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student::Entity")]
    Student,
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for AcademicSemester {
    fn from(model: Model) -> Self {
        AcademicSemester {
            id: model.id,
            name: SemesterName::from(model.name.as_str()),
            code: model.code,
            year: model.year,
            start_month: model.start_month,
            end_month: model.end_month,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
