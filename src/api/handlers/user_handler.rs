//! User provisioning handlers.
//!
//! The create-* routes accept multipart bodies: a `data` field carrying
//! the JSON payload plus an optional `file` field with the profile
//! image. The role kind is fixed by the route, never by the payload.

use axum::{
    extract::{Extension, Multipart, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::{format_validation_errors, ValidatedJson};
use crate::api::middleware::{require_roles, CurrentUser, ADMIN_ROLES, ALL_ROLES, SUPER_ADMIN_ONLY};
use crate::api::AppState;
use crate::config::{PROVISION_DATA_FIELD, PROVISION_FILE_FIELD};
use crate::domain::{
    AccountResponse, AccountStatus, AdminDraft, FacultyDraft, ProfileView, ProvisionRequest,
    ProvisionedProfile, StudentDraft,
};
use crate::errors::{AppError, AppResult};
use crate::infra::ImageFile;

/// Student provisioning request (the `data` multipart field)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentRequest {
    /// Optional; the configured default applies when absent
    pub password: Option<String>,
    #[validate(nested)]
    pub student: StudentDraft,
}

/// Faculty provisioning request (the `data` multipart field)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFacultyRequest {
    pub password: Option<String>,
    #[validate(nested)]
    pub faculty: FacultyDraft,
}

/// Admin provisioning request (the `data` multipart field)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAdminRequest {
    pub password: Option<String>,
    #[validate(nested)]
    pub admin: AdminDraft,
}

/// Status change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangeStatusRequest {
    pub status: AccountStatus,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/create-student", post(create_student))
        .route("/create-faculty", post(create_faculty))
        .route("/create-admin", post(create_admin))
        .route("/change-status/:id", post(change_status))
        .route("/me", get(get_me))
}

/// Split a provisioning multipart body into its validated JSON payload
/// and optional image.
async fn read_provision_body<T>(mut multipart: Multipart) -> AppResult<(T, Option<ImageFile>)>
where
    T: DeserializeOwned + Validate,
{
    let mut data: Option<T> = None;
    let mut image: Option<ImageFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(PROVISION_DATA_FIELD) => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(e.to_string()))?;
                let value: T = serde_json::from_str(&text)
                    .map_err(|e| AppError::validation(format!("Invalid request payload: {}", e)))?;
                value
                    .validate()
                    .map_err(|e| AppError::validation(format_validation_errors(&e)))?;
                data = Some(value);
            }
            Some(PROVISION_FILE_FIELD) => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(e.to_string()))?;
                image = Some(ImageFile {
                    file_name,
                    content: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let data = data
        .ok_or_else(|| AppError::validation(format!("Missing {} field", PROVISION_DATA_FIELD)))?;

    Ok((data, image))
}

/// Provision a student account/profile pair
#[utoipa::path(
    post,
    path = "/users/create-student",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body(content = CreateStudentRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Student provisioned"),
        (status = 400, description = "Validation error or referenced entity not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_student(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ProvisionedProfile>)> {
    require_roles(&current_user, ADMIN_ROLES)?;

    let (payload, image) = read_provision_body::<CreateStudentRequest>(multipart).await?;

    let profile = state
        .provisioning_service
        .provision(
            ProvisionRequest::Student(payload.student),
            payload.password,
            image,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// Provision a faculty account/profile pair
#[utoipa::path(
    post,
    path = "/users/create-faculty",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body(content = CreateFacultyRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Faculty provisioned"),
        (status = 400, description = "Validation error or referenced entity not found"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_faculty(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ProvisionedProfile>)> {
    require_roles(&current_user, ADMIN_ROLES)?;

    let (payload, image) = read_provision_body::<CreateFacultyRequest>(multipart).await?;

    let profile = state
        .provisioning_service
        .provision(
            ProvisionRequest::Faculty(payload.faculty),
            payload.password,
            image,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// Provision an admin account/profile pair
#[utoipa::path(
    post,
    path = "/users/create-admin",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body(content = CreateAdminRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Admin provisioned"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Super admin only")
    )
)]
pub async fn create_admin(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ProvisionedProfile>)> {
    require_roles(&current_user, SUPER_ADMIN_ONLY)?;

    let (payload, image) = read_provision_body::<CreateAdminRequest>(multipart).await?;

    let profile = state
        .provisioning_service
        .provision(
            ProvisionRequest::Admin(payload.admin),
            payload.password,
            image,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// Block or unblock an account
#[utoipa::path(
    post,
    path = "/users/change-status/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Account storage-level id")),
    request_body = ChangeStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = AccountResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Account not found")
    )
)]
pub async fn change_status(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<ChangeStatusRequest>,
) -> AppResult<Json<AccountResponse>> {
    require_roles(&current_user, ADMIN_ROLES)?;

    let account = state
        .provisioning_service
        .change_status(id, payload.status)
        .await?;

    Ok(Json(AccountResponse::from(account)))
}

/// Get the authenticated caller's profile joined with its account
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile for the current identity, or null"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_me(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Option<ProfileView>>> {
    require_roles(&current_user, ALL_ROLES)?;

    let profile = state
        .provisioning_service
        .get_me(&current_user.identifier, current_user.role)
        .await?;

    Ok(Json(profile))
}
