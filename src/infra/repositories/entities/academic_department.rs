//! Academic department database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::AcademicDepartment;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "academic_departments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    /// Owning faculty reference
    pub academic_faculty_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::academic_faculty::Entity",
        from = "Column::AcademicFacultyId",
        to = "super::academic_faculty::Column::Id"
    )]
    AcademicFaculty,
}

impl Related<super::academic_faculty::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademicFaculty.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for AcademicDepartment {
    fn from(model: Model) -> Self {
        AcademicDepartment {
            id: model.id,
            name: model.name,
            academic_faculty: model.academic_faculty_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
