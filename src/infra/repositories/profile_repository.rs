//! Profile repository - read side for the three role profiles.
//!
//! Profile creation and the paired soft-delete live on the unit of work's
//! transaction-scoped repositories; everything here is a plain read.
//! Query methods exclude soft-deleted records.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::entities::{admin, faculty, student};
use crate::domain::{Account, Admin, Faculty, Student};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Profile repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find a student by identifier, joined with its account
    async fn find_student(&self, identifier: &str) -> AppResult<Option<(Student, Account)>>;

    /// List active students
    async fn list_students(&self) -> AppResult<Vec<Student>>;

    /// Find a faculty member by identifier, joined with its account
    async fn find_faculty(&self, identifier: &str) -> AppResult<Option<(Faculty, Account)>>;

    /// List active faculty members
    async fn list_faculties(&self) -> AppResult<Vec<Faculty>>;

    /// Find an admin by identifier, joined with its account
    async fn find_admin(&self, identifier: &str) -> AppResult<Option<(Admin, Account)>>;

    /// List active admins
    async fn list_admins(&self) -> AppResult<Vec<Admin>>;
}

/// SeaORM-backed profile store.
pub struct ProfileStore {
    db: DatabaseConnection,
}

impl ProfileStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileStore {
    async fn find_student(&self, identifier: &str) -> AppResult<Option<(Student, Account)>> {
        let result = student::Entity::find()
            .filter(student::Column::Identifier.eq(identifier))
            .filter(student::Column::DeletedAt.is_null())
            .find_also_related(super::entities::account::Entity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(join_account(result).map(|(m, a)| (Student::from(m), a)))
    }

    async fn list_students(&self) -> AppResult<Vec<Student>> {
        let models = student::Entity::find()
            .filter(student::Column::DeletedAt.is_null())
            .order_by_asc(student::Column::Identifier)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Student::from).collect())
    }

    async fn find_faculty(&self, identifier: &str) -> AppResult<Option<(Faculty, Account)>> {
        let result = faculty::Entity::find()
            .filter(faculty::Column::Identifier.eq(identifier))
            .filter(faculty::Column::DeletedAt.is_null())
            .find_also_related(super::entities::account::Entity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(join_account(result).map(|(m, a)| (Faculty::from(m), a)))
    }

    async fn list_faculties(&self) -> AppResult<Vec<Faculty>> {
        let models = faculty::Entity::find()
            .filter(faculty::Column::DeletedAt.is_null())
            .order_by_asc(faculty::Column::Identifier)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Faculty::from).collect())
    }

    async fn find_admin(&self, identifier: &str) -> AppResult<Option<(Admin, Account)>> {
        let result = admin::Entity::find()
            .filter(admin::Column::Identifier.eq(identifier))
            .filter(admin::Column::DeletedAt.is_null())
            .find_also_related(super::entities::account::Entity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(join_account(result).map(|(m, a)| (Admin::from(m), a)))
    }

    async fn list_admins(&self) -> AppResult<Vec<Admin>> {
        let models = admin::Entity::find()
            .filter(admin::Column::DeletedAt.is_null())
            .order_by_asc(admin::Column::Identifier)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Admin::from).collect())
    }
}

/// A profile whose account row is missing would violate the pairing
/// invariant; such a row is treated as not found rather than returned
/// half-joined.
fn join_account<M>(
    result: Option<(M, Option<super::entities::account::Model>)>,
) -> Option<(M, Account)> {
    match result {
        Some((profile, Some(account))) => Some((profile, Account::from(account))),
        _ => None,
    }
}
