//! Admin profile database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Admin, Gender, PersonName};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admins")]
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
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Admin {
    fn from(model: Model) -> Self {
        Admin {
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
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
