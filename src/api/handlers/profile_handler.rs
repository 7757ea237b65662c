//! Profile read/delete handlers for students, faculties and admins.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::middleware::{require_roles, CurrentUser, ADMIN_ROLES, SUPER_ADMIN_ONLY};
use crate::api::AppState;
use crate::domain::{Admin, AdminView, Faculty, FacultyView, Role, Student, StudentView};
use crate::errors::AppResult;

/// Staff roles allowed to browse student records
const STUDENT_READERS: &[Role] = &[Role::Faculty, Role::Admin, Role::SuperAdmin];

/// Create student routes
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students))
        .route("/:identifier", get(get_student).delete(delete_student))
}

/// Create faculty routes
pub fn faculty_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_faculties))
        .route("/:identifier", get(get_faculty).delete(delete_faculty))
}

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_admins))
        .route("/:identifier", get(get_admin).delete(delete_admin))
}

/// List students
#[utoipa::path(
    get,
    path = "/students",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All students", body = Vec<Student>))
)]
pub async fn list_students(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Student>>> {
    require_roles(&current_user, STUDENT_READERS)?;
    Ok(Json(state.profile_service.list_students().await?))
}

/// Get student by identifier, joined with its account
#[utoipa::path(
    get,
    path = "/students/{identifier}",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    params(("identifier" = String, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Student", body = StudentView),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_student(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> AppResult<Json<StudentView>> {
    require_roles(&current_user, STUDENT_READERS)?;
    Ok(Json(state.profile_service.get_student(&identifier).await?))
}

/// Soft delete a student and its account together
#[utoipa::path(
    delete,
    path = "/students/{identifier}",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    params(("identifier" = String, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Student deleted", body = Student),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_student(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> AppResult<Json<Student>> {
    require_roles(&current_user, ADMIN_ROLES)?;
    Ok(Json(state.profile_service.delete_student(&identifier).await?))
}

/// List faculty members
#[utoipa::path(
    get,
    path = "/faculties",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All faculty members", body = Vec<Faculty>))
)]
pub async fn list_faculties(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Faculty>>> {
    require_roles(&current_user, ADMIN_ROLES)?;
    Ok(Json(state.profile_service.list_faculties().await?))
}

/// Get faculty member by identifier, joined with its account
#[utoipa::path(
    get,
    path = "/faculties/{identifier}",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    params(("identifier" = String, Path, description = "Faculty identifier")),
    responses(
        (status = 200, description = "Faculty member", body = FacultyView),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_faculty(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> AppResult<Json<FacultyView>> {
    require_roles(&current_user, ADMIN_ROLES)?;
    Ok(Json(state.profile_service.get_faculty(&identifier).await?))
}

/// Soft delete a faculty member and its account together
#[utoipa::path(
    delete,
    path = "/faculties/{identifier}",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    params(("identifier" = String, Path, description = "Faculty identifier")),
    responses(
        (status = 200, description = "Faculty member deleted", body = Faculty),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_faculty(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> AppResult<Json<Faculty>> {
    require_roles(&current_user, ADMIN_ROLES)?;
    Ok(Json(state.profile_service.delete_faculty(&identifier).await?))
}

/// List admins
#[utoipa::path(
    get,
    path = "/admins",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All admins", body = Vec<Admin>))
)]
pub async fn list_admins(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Admin>>> {
    require_roles(&current_user, ADMIN_ROLES)?;
    Ok(Json(state.profile_service.list_admins().await?))
}

/// Get admin by identifier, joined with its account
#[utoipa::path(
    get,
    path = "/admins/{identifier}",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    params(("identifier" = String, Path, description = "Admin identifier")),
    responses(
        (status = 200, description = "Admin", body = AdminView),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_admin(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> AppResult<Json<AdminView>> {
    require_roles(&current_user, ADMIN_ROLES)?;
    Ok(Json(state.profile_service.get_admin(&identifier).await?))
}

/// Soft delete an admin and its account together
#[utoipa::path(
    delete,
    path = "/admins/{identifier}",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    params(("identifier" = String, Path, description = "Admin identifier")),
    responses(
        (status = 200, description = "Admin deleted", body = Admin),
        (status = 403, description = "Forbidden - Super admin only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_admin(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> AppResult<Json<Admin>> {
    require_roles(&current_user, SUPER_ADMIN_ONLY)?;
    Ok(Json(state.profile_service.delete_admin(&identifier).await?))
}
