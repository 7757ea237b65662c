//! Faculty profile database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Faculty, Gender, PersonName};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "faculties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Same identifier as the paired account
    #[sea_orm(unique)]
    pub identifier: String,
    #[sea_orm(unique)]
    pub account_id: Uuid,
    pub designation: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub gender: String,
    #[sea_orm(unique)]
    pub email: String,
    pub contact_no: String,
    pub profile_img: Option<String>,
    pub academic_department_id: Uuid,
    /// Copied from the department's owning faculty at creation
    pub academic_faculty_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,
    #[sea_orm(
        belongs_to = "super::academic_department::Entity",
        from = "Column::AcademicDepartmentId",
        to = "super::academic_department::Column::Id"
    )]
    AcademicDepartment,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Faculty {
    fn from(model: Model) -> Self {
        Faculty {
            id: model.id,
            identifier: model.identifier,
            account_id: model.account_id,
            designation: model.designation,
            name: PersonName {
                first_name: model.first_name,
                middle_name: model.middle_name,
                last_name: model.last_name,
            },
            gender: Gender::from(model.gender.as_str()),
            email: model.email,
            contact_no: model.contact_no,
            profile_img: model.profile_img,
            academic_department: model.academic_department_id,
            academic_faculty: model.academic_faculty_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
