//! Account repository - reads and status updates outside transactions.
//!
//! Account creation is deliberately absent here: accounts only come into
//! existence inside a provisioning transaction (see the unit of work's
//! transaction-scoped repository).

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::entities::account::{self, Entity as AccountEntity};
use crate::domain::{Account, AccountStatus};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find active account by its human-readable identifier
    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<Account>>;

    /// Find account by email, including soft-deleted (email reuse
    /// prevention across the account lifecycle)
    async fn find_by_email_with_deleted(&self, email: &str) -> AppResult<Option<Account>>;

    /// Set account status (active/blocked)
    async fn update_status(&self, id: Uuid, status: AccountStatus) -> AppResult<Account>;
}

/// SeaORM-backed account store.
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::Identifier.eq(identifier))
            .filter(account::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn find_by_email_with_deleted(&self, email: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn update_status(&self, id: Uuid, status: AccountStatus) -> AppResult<Account> {
        let existing = AccountEntity::find_by_id(id)
            .filter(account::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: account::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;

        Ok(Account::from(model))
    }
}
