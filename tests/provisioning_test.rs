//! Provisioning and auth service tests against mocked repositories.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use campus_records::domain::{
    Account, AccountStatus, Admin, AdminDraft, Gender, PersonName, ProfileView, ProvisionRequest,
    Role, Student,
};
use campus_records::errors::{AppError, AppResult};
use campus_records::infra::{
    AccountRepository, MockAcademicRepository, MockAccountRepository, MockAssetUploader,
    MockProfileRepository, ProfileRepository, TransactionContext, UnitOfWork,
};
use campus_records::services::{
    AuthService, Authenticator, ProfileManager, ProfileService, Provisioner, ProvisioningService,
};
use campus_records::{Config, Password};

fn test_account(identifier: &str, role: Role, status: AccountStatus) -> Account {
    Account {
        id: Uuid::new_v4(),
        identifier: identifier.to_string(),
        email: "test@example.edu".to_string(),
        password_hash: "hashed".to_string(),
        role,
        status,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        deleted_at: None,
    }
}

fn test_student(identifier: &str) -> Student {
    Student {
        id: Uuid::new_v4(),
        identifier: identifier.to_string(),
        account_id: Uuid::new_v4(),
        name: PersonName {
            first_name: "Jamil".to_string(),
            middle_name: None,
            last_name: "Karim".to_string(),
        },
        gender: Gender::Male,
        date_of_birth: None,
        email: "student@example.edu".to_string(),
        contact_no: "01733334444".to_string(),
        present_address: None,
        profile_img: None,
        admission_semester: Uuid::new_v4(),
        academic_department: Uuid::new_v4(),
        academic_faculty: Uuid::new_v4(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
        deleted_at: None,
    }
}

fn test_admin(identifier: &str) -> Admin {
    Admin {
        id: Uuid::new_v4(),
        identifier: identifier.to_string(),
        account_id: Uuid::new_v4(),
        designation: "Registrar".to_string(),
        name: PersonName {
            first_name: "Rina".to_string(),
            middle_name: None,
            last_name: "Akter".to_string(),
        },
        gender: Gender::Female,
        email: "admin@example.edu".to_string(),
        contact_no: "01711112222".to_string(),
        profile_img: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        deleted_at: None,
    }
}

/// Test mock for UnitOfWork that wraps mocked repositories
struct TestUnitOfWork {
    accounts: Arc<MockAccountRepository>,
    profiles: Arc<MockProfileRepository>,
}

impl TestUnitOfWork {
    fn new(accounts: MockAccountRepository, profiles: MockProfileRepository) -> Self {
        Self {
            accounts: Arc::new(accounts),
            profiles: Arc::new(profiles),
        }
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn accounts(&self) -> Arc<dyn AccountRepository> {
        self.accounts.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileRepository> {
        self.profiles.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        // Transaction not supported in test mock
        Err(AppError::internal("Transactions not supported in test mock"))
    }

    async fn transaction_serializable<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        // Transaction not supported in test mock
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}

fn provisioner_with(
    accounts: MockAccountRepository,
    profiles: MockProfileRepository,
    academics: MockAcademicRepository,
) -> Provisioner<TestUnitOfWork> {
    Provisioner::new(
        Arc::new(TestUnitOfWork::new(accounts, profiles)),
        Arc::new(academics),
        Arc::new(MockAssetUploader::new()),
        "campus-pass-123".to_string(),
    )
}

// =============================================================================
// Provisioning preconditions
// =============================================================================

fn admin_draft() -> AdminDraft {
    AdminDraft {
        designation: "Registrar".to_string(),
        name: PersonName {
            first_name: "Rina".to_string(),
            middle_name: None,
            last_name: "Akter".to_string(),
        },
        gender: Gender::Female,
        email: "admin@example.edu".to_string(),
        contact_no: "01711112222".to_string(),
    }
}

#[tokio::test]
async fn test_provisioning_rejects_taken_email() {
    let mut accounts = MockAccountRepository::new();
    accounts
        .expect_find_by_email_with_deleted()
        .returning(|email| {
            let mut account = test_account("A-0001", Role::Admin, AccountStatus::Active);
            account.email = email.to_string();
            Ok(Some(account))
        });

    let service = provisioner_with(
        accounts,
        MockProfileRepository::new(),
        MockAcademicRepository::new(),
    );

    let result = service
        .provision(ProvisionRequest::Admin(admin_draft()), None, None)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

// =============================================================================
// get_me dispatch
// =============================================================================

#[tokio::test]
async fn test_get_me_dispatches_on_student_role() {
    let mut profiles = MockProfileRepository::new();
    profiles.expect_find_student().returning(|identifier| {
        Ok(Some((
            test_student(identifier),
            test_account(identifier, Role::Student, AccountStatus::Active),
        )))
    });

    let service = provisioner_with(
        MockAccountRepository::new(),
        profiles,
        MockAcademicRepository::new(),
    );

    let result = service.get_me("24010003", Role::Student).await.unwrap();
    match result {
        Some(ProfileView::Student(view)) => {
            assert_eq!(view.profile.identifier, "24010003");
            assert_eq!(view.account.identifier, "24010003");
        }
        other => panic!("expected student view, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_me_dispatches_on_admin_role() {
    let mut profiles = MockProfileRepository::new();
    profiles.expect_find_admin().returning(|identifier| {
        Ok(Some((
            test_admin(identifier),
            test_account(identifier, Role::Admin, AccountStatus::Active),
        )))
    });

    let service = provisioner_with(
        MockAccountRepository::new(),
        profiles,
        MockAcademicRepository::new(),
    );

    let result = service.get_me("A-0001", Role::Admin).await.unwrap();
    assert!(matches!(result, Some(ProfileView::Admin(_))));
}

#[tokio::test]
async fn test_get_me_unknown_identity_is_none() {
    let mut profiles = MockProfileRepository::new();
    profiles.expect_find_faculty().returning(|_| Ok(None));

    let service = provisioner_with(
        MockAccountRepository::new(),
        profiles,
        MockAcademicRepository::new(),
    );

    let result = service.get_me("F-9999", Role::Faculty).await.unwrap();
    assert!(result.is_none());
}

// =============================================================================
// change_status
// =============================================================================

#[tokio::test]
async fn test_change_status_blocks_account() {
    let account_id = Uuid::new_v4();

    let mut accounts = MockAccountRepository::new();
    accounts
        .expect_update_status()
        .with(eq(account_id), eq(AccountStatus::Blocked))
        .returning(|_, status| Ok(test_account("A-0001", Role::Admin, status)));

    let service = provisioner_with(
        accounts,
        MockProfileRepository::new(),
        MockAcademicRepository::new(),
    );

    let result = service
        .change_status(account_id, AccountStatus::Blocked)
        .await
        .unwrap();

    assert_eq!(result.status, AccountStatus::Blocked);
}

// =============================================================================
// Login
// =============================================================================

fn authenticator_with(accounts: MockAccountRepository) -> Authenticator<TestUnitOfWork> {
    Authenticator::new(
        Arc::new(TestUnitOfWork::new(accounts, MockProfileRepository::new())),
        Config::from_env(),
    )
}

#[tokio::test]
async fn test_login_with_valid_credentials_issues_token() {
    let password_hash = Password::new("SecurePass123!").unwrap().into_string();

    let mut accounts = MockAccountRepository::new();
    accounts.expect_find_by_identifier().returning(move |id| {
        let mut account = test_account(id, Role::Admin, AccountStatus::Active);
        account.password_hash = password_hash.clone();
        Ok(Some(account))
    });

    let service = authenticator_with(accounts);
    let token = service
        .login("A-0001".to_string(), "SecurePass123!".to_string())
        .await
        .unwrap();

    assert_eq!(token.token_type, "Bearer");
    assert!(!token.access_token.is_empty());

    let claims = service.verify_token(&token.access_token).unwrap();
    assert_eq!(claims.sub, "A-0001");
    assert_eq!(claims.role, "admin");
}

#[tokio::test]
async fn test_login_with_wrong_password_is_rejected() {
    let password_hash = Password::new("SecurePass123!").unwrap().into_string();

    let mut accounts = MockAccountRepository::new();
    accounts.expect_find_by_identifier().returning(move |id| {
        let mut account = test_account(id, Role::Admin, AccountStatus::Active);
        account.password_hash = password_hash.clone();
        Ok(Some(account))
    });

    let service = authenticator_with(accounts);
    let result = service
        .login("A-0001".to_string(), "WrongPass123!".to_string())
        .await;

    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_login_with_unknown_identifier_is_rejected() {
    let mut accounts = MockAccountRepository::new();
    accounts.expect_find_by_identifier().returning(|_| Ok(None));

    let service = authenticator_with(accounts);
    let result = service
        .login("A-9999".to_string(), "SecurePass123!".to_string())
        .await;

    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_login_on_blocked_account_is_rejected() {
    let password_hash = Password::new("SecurePass123!").unwrap().into_string();

    let mut accounts = MockAccountRepository::new();
    accounts.expect_find_by_identifier().returning(move |id| {
        let mut account = test_account(id, Role::Admin, AccountStatus::Blocked);
        account.password_hash = password_hash.clone();
        Ok(Some(account))
    });

    let service = authenticator_with(accounts);
    let result = service
        .login("A-0001".to_string(), "SecurePass123!".to_string())
        .await;

    assert!(matches!(result, Err(AppError::Blocked)));
}

// =============================================================================
// Profile reads
// =============================================================================

#[tokio::test]
async fn test_get_student_joins_account() {
    let mut profiles = MockProfileRepository::new();
    profiles.expect_find_student().returning(|identifier| {
        Ok(Some((
            test_student(identifier),
            test_account(identifier, Role::Student, AccountStatus::Active),
        )))
    });

    let uow = Arc::new(TestUnitOfWork::new(MockAccountRepository::new(), profiles));
    let service = ProfileManager::new(uow);

    let view = service.get_student("24010001").await.unwrap();
    assert_eq!(view.profile.identifier, "24010001");
    assert_eq!(view.account.identifier, "24010001");
}

#[tokio::test]
async fn test_get_student_not_found() {
    let mut profiles = MockProfileRepository::new();
    profiles.expect_find_student().returning(|_| Ok(None));

    let uow = Arc::new(TestUnitOfWork::new(MockAccountRepository::new(), profiles));
    let service = ProfileManager::new(uow);

    let result = service.get_student("24019999").await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_list_students() {
    let mut profiles = MockProfileRepository::new();
    profiles
        .expect_list_students()
        .returning(|| Ok(vec![test_student("24010001"), test_student("24010002")]));

    let uow = Arc::new(TestUnitOfWork::new(MockAccountRepository::new(), profiles));
    let service = ProfileManager::new(uow);

    let students = service.list_students().await.unwrap();
    assert_eq!(students.len(), 2);
}
