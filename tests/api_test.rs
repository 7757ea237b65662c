//! Integration tests for API-facing types.
//!
//! These tests use mock services to exercise API contracts without
//! requiring a database connection.

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use uuid::Uuid;

use campus_records::domain::{
    Account, AccountStatus, Admin, AdminDraft, Gender, IdScope, PersonName, ProfileView,
    ProvisionRequest, ProvisionedProfile, Role, SemesterName,
};
use campus_records::errors::{AppError, AppResult};
use campus_records::infra::ImageFile;
use campus_records::services::{Claims, ProvisioningService};

// =============================================================================
// Mock Services for Testing
// =============================================================================

/// Mock provisioning service that returns predefined responses
struct MockProvisioningService;

#[async_trait]
impl ProvisioningService for MockProvisioningService {
    async fn provision(
        &self,
        request: ProvisionRequest,
        _password: Option<String>,
        image: Option<ImageFile>,
    ) -> AppResult<ProvisionedProfile> {
        // Image supplied means an upload would run; simulate its failure
        // path separately via provision_failing below
        let ProvisionRequest::Admin(draft) = request else {
            return Err(AppError::internal("mock only provisions admins"));
        };

        Ok(ProvisionedProfile::Admin(Admin {
            id: Uuid::new_v4(),
            identifier: "A-0001".to_string(),
            account_id: Uuid::new_v4(),
            designation: draft.designation,
            name: draft.name,
            gender: draft.gender,
            email: draft.email,
            contact_no: draft.contact_no,
            profile_img: image.map(|f| format!("https://assets.example.edu/{}", f.file_name)),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }))
    }

    async fn get_me(&self, _identifier: &str, role: Role) -> AppResult<Option<ProfileView>> {
        match role {
            Role::SuperAdmin => Ok(None),
            _ => Err(AppError::internal("not wired in mock")),
        }
    }

    async fn change_status(
        &self,
        _account_id: Uuid,
        status: AccountStatus,
    ) -> AppResult<Account> {
        Ok(Account {
            id: Uuid::new_v4(),
            identifier: "A-0001".to_string(),
            email: "admin@example.edu".to_string(),
            password_hash: "hashed".to_string(),
            role: Role::Admin,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        })
    }
}

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
async fn test_mock_provisioning_returns_profile_with_identifier() {
    let service = MockProvisioningService;
    let result = service
        .provision(ProvisionRequest::Admin(admin_draft()), None, None)
        .await
        .unwrap();

    assert_eq!(result.identifier(), "A-0001");
}

#[tokio::test]
async fn test_mock_provisioning_attaches_image_url() {
    let service = MockProvisioningService;
    let result = service
        .provision(
            ProvisionRequest::Admin(admin_draft()),
            None,
            Some(ImageFile {
                file_name: "photo.jpg".to_string(),
                content: vec![0xFF, 0xD8],
            }),
        )
        .await
        .unwrap();

    assert_eq!(
        result.profile_img(),
        Some("https://assets.example.edu/photo.jpg")
    );
}

// =============================================================================
// Error Type Tests
// =============================================================================

#[tokio::test]
async fn test_app_error_status_codes() {
    let cases = [
        (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
        (AppError::InvalidCredentials, StatusCode::UNAUTHORIZED),
        (AppError::Forbidden, StatusCode::FORBIDDEN),
        (AppError::Blocked, StatusCode::FORBIDDEN),
        (AppError::NotFound, StatusCode::NOT_FOUND),
        (
            AppError::ReferencedEntityMissing("Admission semester".to_string()),
            StatusCode::BAD_REQUEST,
        ),
        (
            AppError::AssetUpload("unreachable".to_string()),
            StatusCode::BAD_GATEWAY,
        ),
        (
            AppError::IdentifierAllocation("bad suffix".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            AppError::TransactionAbort("rollback failed".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn test_app_error_variants_are_distinct() {
    // Every provisioning fault kind remains distinguishable by the caller
    let missing = AppError::ReferencedEntityMissing("Academic department".to_string());
    let allocation = AppError::IdentifierAllocation("non-numeric".to_string());
    let upload = AppError::AssetUpload("timeout".to_string());
    let abort = AppError::TransactionAbort("connection lost".to_string());

    assert!(matches!(missing, AppError::ReferencedEntityMissing(_)));
    assert!(matches!(allocation, AppError::IdentifierAllocation(_)));
    assert!(matches!(upload, AppError::AssetUpload(_)));
    assert!(matches!(abort, AppError::TransactionAbort(_)));
}

// =============================================================================
// Domain Model Tests
// =============================================================================

#[tokio::test]
async fn test_role_display() {
    assert_eq!(Role::Student.to_string(), "student");
    assert_eq!(Role::Faculty.to_string(), "faculty");
    assert_eq!(Role::Admin.to_string(), "admin");
    assert_eq!(Role::SuperAdmin.to_string(), "superAdmin");
}

#[tokio::test]
async fn test_semester_name_code_mapper() {
    assert_eq!(SemesterName::Autumn.code(), "01");
    assert_eq!(SemesterName::Summer.code(), "02");
    assert_eq!(SemesterName::Fall.code(), "03");
}

#[tokio::test]
async fn test_identifier_scopes_are_independent() {
    // The worked example: year "24", code "01", 3rd student
    let autumn_24 = IdScope::student(2024, "01");
    assert_eq!(autumn_24.synthesize(3).unwrap(), "24010003");

    // A different (semester, year) scope has its own first ordinal
    let autumn_25 = IdScope::student(2025, "01");
    assert_eq!(autumn_25.synthesize(1).unwrap(), "25010001");

    // Faculty and admin scopes are global
    assert_eq!(IdScope::Faculty.synthesize(12).unwrap(), "F-0012");
    assert_eq!(IdScope::Admin.synthesize(7).unwrap(), "A-0007");
}

#[tokio::test]
async fn test_identifier_width_overflow_is_an_error() {
    // The 10001st ordinal does not widen the format
    let scope = IdScope::student(2024, "01");
    assert!(matches!(
        scope.synthesize(10_001),
        Err(AppError::IdentifierAllocation(_))
    ));
}

// =============================================================================
// JWT Claims Tests
// =============================================================================

#[tokio::test]
async fn test_claims_structure() {
    let claims = Claims {
        sub: "24010003".to_string(),
        email: "student@example.edu".to_string(),
        role: "student".to_string(),
        exp: Utc::now().timestamp() + 3600,
        iat: Utc::now().timestamp(),
    };

    assert!(!claims.sub.is_empty());
    assert!(claims.exp > claims.iat);
}
