//! Profile service - read side and paired deletion for role profiles.
//!
//! Deleting a profile soft-deletes its account in the same transaction:
//! the pairing invariant holds on the way out exactly as it does on the
//! way in. Identifiers stay pinned forever; a deleted profile's ordinal
//! is never reallocated.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    Admin, AdminView, Faculty, FacultyView, Student, StudentView,
};
use crate::errors::{AppResult, OptionExt};
use crate::infra::{TransactionContext, UnitOfWork};

/// Profile service trait for dependency injection.
#[async_trait]
pub trait ProfileService: Send + Sync {
    async fn get_student(&self, identifier: &str) -> AppResult<StudentView>;
    async fn list_students(&self) -> AppResult<Vec<Student>>;
    async fn delete_student(&self, identifier: &str) -> AppResult<Student>;

    async fn get_faculty(&self, identifier: &str) -> AppResult<FacultyView>;
    async fn list_faculties(&self) -> AppResult<Vec<Faculty>>;
    async fn delete_faculty(&self, identifier: &str) -> AppResult<Faculty>;

    async fn get_admin(&self, identifier: &str) -> AppResult<AdminView>;
    async fn list_admins(&self) -> AppResult<Vec<Admin>>;
    async fn delete_admin(&self, identifier: &str) -> AppResult<Admin>;
}

/// Concrete implementation of ProfileService using Unit of Work.
pub struct ProfileManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProfileManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProfileService for ProfileManager<U> {
    async fn get_student(&self, identifier: &str) -> AppResult<StudentView> {
        let (profile, account) = self
            .uow
            .profiles()
            .find_student(identifier)
            .await?
            .ok_or_not_found()?;

        Ok(StudentView {
            profile,
            account: account.into(),
        })
    }

    async fn list_students(&self) -> AppResult<Vec<Student>> {
        self.uow.profiles().list_students().await
    }

    async fn delete_student(&self, identifier: &str) -> AppResult<Student> {
        let identifier = identifier.to_string();
        self.uow
            .transaction(move |ctx: TransactionContext<'_>| {
                Box::pin(async move {
                    let student = ctx.profiles().soft_delete_student(&identifier).await?;
                    ctx.accounts().soft_delete(&identifier).await?;
                    Ok(student)
                })
            })
            .await
    }

    async fn get_faculty(&self, identifier: &str) -> AppResult<FacultyView> {
        let (profile, account) = self
            .uow
            .profiles()
            .find_faculty(identifier)
            .await?
            .ok_or_not_found()?;

        Ok(FacultyView {
            profile,
            account: account.into(),
        })
    }

    async fn list_faculties(&self) -> AppResult<Vec<Faculty>> {
        self.uow.profiles().list_faculties().await
    }

    async fn delete_faculty(&self, identifier: &str) -> AppResult<Faculty> {
        let identifier = identifier.to_string();
        self.uow
            .transaction(move |ctx: TransactionContext<'_>| {
                Box::pin(async move {
                    let faculty = ctx.profiles().soft_delete_faculty(&identifier).await?;
                    ctx.accounts().soft_delete(&identifier).await?;
                    Ok(faculty)
                })
            })
            .await
    }

    async fn get_admin(&self, identifier: &str) -> AppResult<AdminView> {
        let (profile, account) = self
            .uow
            .profiles()
            .find_admin(identifier)
            .await?
            .ok_or_not_found()?;

        Ok(AdminView {
            profile,
            account: account.into(),
        })
    }

    async fn list_admins(&self) -> AppResult<Vec<Admin>> {
        self.uow.profiles().list_admins().await
    }

    async fn delete_admin(&self, identifier: &str) -> AppResult<Admin> {
        let identifier = identifier.to_string();
        self.uow
            .transaction(move |ctx: TransactionContext<'_>| {
                Box::pin(async move {
                    let admin = ctx.profiles().soft_delete_admin(&identifier).await?;
                    ctx.accounts().soft_delete(&identifier).await?;
                    Ok(admin)
                })
            })
            .await
    }
}
