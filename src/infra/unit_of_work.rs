//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and manages transaction lifecycle:
//! scoped acquisition of a transaction handle, rollback on any error,
//! commit only on full success. The provisioning workflow relies on this
//! to guarantee that an account and its profile become visible together
//! or not at all.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, IsolationLevel, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::repositories::entities::{account, admin, faculty, student};
use super::repositories::{
    AccountRepository, AccountStore, ProfileRepository, ProfileStore,
};
use crate::domain::{
    Account, Admin, Faculty, IdScope, ProvisionRequest, ProvisionedProfile, Role, Student,
};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction
/// management. Note: this trait is not mockable directly due to generic
/// methods. For testing, mock at the repository or service level.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get account repository (non-transactional reads/updates)
    fn accounts(&self) -> Arc<dyn AccountRepository>;

    /// Get profile repository (non-transactional reads)
    fn profiles(&self) -> Arc<dyn ProfileRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    /// Uses ReadCommitted isolation level for balanced consistency and
    /// performance.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;

    /// Execute a closure within a transaction with serializable isolation.
    ///
    /// Provisioning runs under this variant: two concurrent ordinal
    /// allocations in the same identifier scope cannot both commit.
    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction. The context borrows the transaction
/// to ensure proper lifetime management.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    /// Create a new transaction context
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get account repository for this transaction
    pub fn accounts(&self) -> TxAccountRepository<'_> {
        TxAccountRepository::new(self.txn)
    }

    /// Get profile repository for this transaction
    pub fn profiles(&self) -> TxProfileRepository<'_> {
        TxProfileRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    account_repo: Arc<AccountStore>,
    profile_repo: Arc<ProfileStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let account_repo = Arc::new(AccountStore::new(db.clone()));
        let profile_repo = Arc::new(ProfileStore::new(db.clone()));
        Self {
            db,
            account_repo,
            profile_repo,
        }
    }

    /// Internal transaction execution with configurable isolation level
    async fn execute_transaction<F, T>(&self, isolation: IsolationLevel, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        // Begin transaction
        let txn = self
            .db
            .begin_with_config(Some(isolation), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        // Create context with borrowed transaction
        let ctx = TransactionContext::new(&txn);

        // Execute the closure
        match f(ctx).await {
            Ok(result) => {
                // Commit on success - txn is owned, so this always works
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                // Rollback on error. A failing rollback leaves the store
                // state unknown and must not be masked by the original
                // error.
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                    return Err(AppError::TransactionAbort(format!(
                        "{} (while aborting on: {})",
                        rollback_err, e
                    )));
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn accounts(&self) -> Arc<dyn AccountRepository> {
        self.account_repo.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileRepository> {
        self.profile_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        // Use ReadCommitted for balanced consistency/performance
        self.execute_transaction(IsolationLevel::ReadCommitted, f).await
    }

    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::Serializable, f).await
    }
}

/// Transaction-aware account repository.
///
/// Executes all operations within the provided transaction. Account
/// creation exists only here: accounts never come into existence outside
/// a provisioning transaction.
pub struct TxAccountRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxAccountRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Most recently created identifier in the given scope, if any.
    ///
    /// Soft-deleted accounts are included on purpose: identifiers are
    /// never reused, so a deleted account still pins its ordinal.
    pub async fn latest_identifier(&self, scope: &IdScope) -> AppResult<Option<String>> {
        let mut query = account::Entity::find()
            .filter(account::Column::Role.eq(scope.role().as_str()));

        if let IdScope::Student { .. } = scope {
            query = query.filter(account::Column::Identifier.starts_with(scope.prefix()));
        }

        let result = query
            .order_by_desc(account::Column::CreatedAt)
            .one(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(|model| model.identifier))
    }

    /// Create a new account
    pub async fn create(
        &self,
        identifier: String,
        email: String,
        password_hash: String,
        role: Role,
    ) -> AppResult<Account> {
        let now = Utc::now();
        let active_model = account::ActiveModel {
            id: Set(Uuid::new_v4()),
            identifier: Set(identifier),
            email: Set(email),
            password_hash: Set(password_hash),
            role: Set(role.as_str().to_string()),
            status: Set(crate::domain::AccountStatus::Active.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };

        let model = active_model
            .insert(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(Account::from(model))
    }

    /// Soft delete account by identifier (sets deleted_at timestamp)
    pub async fn soft_delete(&self, identifier: &str) -> AppResult<Account> {
        let existing = account::Entity::find()
            .filter(account::Column::Identifier.eq(identifier))
            .filter(account::Column::DeletedAt.is_null())
            .one(self.txn)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: account::ActiveModel = existing.into();
        let now = Utc::now();
        active.deleted_at = Set(Some(now));
        active.updated_at = Set(now);

        let model = active.update(self.txn).await.map_err(AppError::from)?;
        Ok(Account::from(model))
    }
}

/// Transaction-aware profile repository.
///
/// Creation dispatches on the provisioning request's role tag; the paired
/// soft-deletes exist so a profile and its account always disappear
/// together.
pub struct TxProfileRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxProfileRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Create the profile record paired with a freshly created account.
    pub async fn create(
        &self,
        request: ProvisionRequest,
        identifier: &str,
        account_id: Uuid,
        profile_img: Option<String>,
    ) -> AppResult<ProvisionedProfile> {
        let now = Utc::now();

        match request {
            ProvisionRequest::Student(draft) => {
                let academic_faculty = draft.academic_faculty.ok_or_else(|| {
                    AppError::internal("Student draft missing resolved faculty reference")
                })?;

                let active_model = student::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    identifier: Set(identifier.to_string()),
                    account_id: Set(account_id),
                    first_name: Set(draft.name.first_name),
                    middle_name: Set(draft.name.middle_name),
                    last_name: Set(draft.name.last_name),
                    gender: Set(draft.gender.as_str().to_string()),
                    date_of_birth: Set(draft.date_of_birth),
                    email: Set(draft.email),
                    contact_no: Set(draft.contact_no),
                    present_address: Set(draft.present_address),
                    profile_img: Set(profile_img),
                    admission_semester_id: Set(draft.admission_semester),
                    academic_department_id: Set(draft.academic_department),
                    academic_faculty_id: Set(academic_faculty),
                    created_at: Set(now),
                    updated_at: Set(now),
                    deleted_at: Set(None),
                };

                let model = active_model
                    .insert(self.txn)
                    .await
                    .map_err(AppError::from)?;

                Ok(ProvisionedProfile::Student(Student::from(model)))
            }
            ProvisionRequest::Faculty(draft) => {
                let academic_faculty = draft.academic_faculty.ok_or_else(|| {
                    AppError::internal("Faculty draft missing resolved faculty reference")
                })?;

                let active_model = faculty::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    identifier: Set(identifier.to_string()),
                    account_id: Set(account_id),
                    designation: Set(draft.designation),
                    first_name: Set(draft.name.first_name),
                    middle_name: Set(draft.name.middle_name),
                    last_name: Set(draft.name.last_name),
                    gender: Set(draft.gender.as_str().to_string()),
                    email: Set(draft.email),
                    contact_no: Set(draft.contact_no),
                    profile_img: Set(profile_img),
                    academic_department_id: Set(draft.academic_department),
                    academic_faculty_id: Set(academic_faculty),
                    created_at: Set(now),
                    updated_at: Set(now),
                    deleted_at: Set(None),
                };

                let model = active_model
                    .insert(self.txn)
                    .await
                    .map_err(AppError::from)?;

                Ok(ProvisionedProfile::Faculty(Faculty::from(model)))
            }
            ProvisionRequest::Admin(draft) => {
                let active_model = admin::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    identifier: Set(identifier.to_string()),
                    account_id: Set(account_id),
                    designation: Set(draft.designation),
                    first_name: Set(draft.name.first_name),
                    middle_name: Set(draft.name.middle_name),
                    last_name: Set(draft.name.last_name),
                    gender: Set(draft.gender.as_str().to_string()),
                    email: Set(draft.email),
                    contact_no: Set(draft.contact_no),
                    profile_img: Set(profile_img),
                    created_at: Set(now),
                    updated_at: Set(now),
                    deleted_at: Set(None),
                };

                let model = active_model
                    .insert(self.txn)
                    .await
                    .map_err(AppError::from)?;

                Ok(ProvisionedProfile::Admin(Admin::from(model)))
            }
        }
    }

    /// Soft delete student profile by identifier
    pub async fn soft_delete_student(&self, identifier: &str) -> AppResult<Student> {
        let existing = student::Entity::find()
            .filter(student::Column::Identifier.eq(identifier))
            .filter(student::Column::DeletedAt.is_null())
            .one(self.txn)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: student::ActiveModel = existing.into();
        let now = Utc::now();
        active.deleted_at = Set(Some(now));
        active.updated_at = Set(now);

        let model = active.update(self.txn).await.map_err(AppError::from)?;
        Ok(Student::from(model))
    }

    /// Soft delete faculty profile by identifier
    pub async fn soft_delete_faculty(&self, identifier: &str) -> AppResult<Faculty> {
        let existing = faculty::Entity::find()
            .filter(faculty::Column::Identifier.eq(identifier))
            .filter(faculty::Column::DeletedAt.is_null())
            .one(self.txn)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: faculty::ActiveModel = existing.into();
        let now = Utc::now();
        active.deleted_at = Set(Some(now));
        active.updated_at = Set(now);

        let model = active.update(self.txn).await.map_err(AppError::from)?;
        Ok(Faculty::from(model))
    }

    /// Soft delete admin profile by identifier
    pub async fn soft_delete_admin(&self, identifier: &str) -> AppResult<Admin> {
        let existing = admin::Entity::find()
            .filter(admin::Column::Identifier.eq(identifier))
            .filter(admin::Column::DeletedAt.is_null())
            .one(self.txn)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: admin::ActiveModel = existing.into();
        let now = Utc::now();
        active.deleted_at = Set(Some(now));
        active.updated_at = Set(now);

        let model = active.update(self.txn).await.map_err(AppError::from)?;
        Ok(Admin::from(model))
    }
}
