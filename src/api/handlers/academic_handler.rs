//! Academic structure handlers.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_roles, CurrentUser, ADMIN_ROLES, ALL_ROLES};
use crate::api::AppState;
use crate::domain::{
    AcademicDepartment, AcademicFaculty, AcademicSemester, CreateDepartment, CreateFaculty,
    CreateSemester, UpdateSemester,
};
use crate::errors::AppResult;

/// Create academic semester routes
pub fn academic_semester_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_semester).get(list_semesters))
        .route("/:id", get(get_semester).put(update_semester))
}

/// Create academic faculty routes
pub fn academic_faculty_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_faculty).get(list_faculties))
        .route("/:id", get(get_faculty))
}

/// Create academic department routes
pub fn academic_department_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_department).get(list_departments))
        .route("/:id", get(get_department))
}

/// Create an academic semester
#[utoipa::path(
    post,
    path = "/academic-semesters",
    tag = "Academic",
    security(("bearer_auth" = [])),
    request_body = CreateSemester,
    responses(
        (status = 201, description = "Semester created", body = AcademicSemester),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_semester(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSemester>,
) -> AppResult<(StatusCode, Json<AcademicSemester>)> {
    require_roles(&current_user, ADMIN_ROLES)?;
    let semester = state.academic_service.create_semester(payload).await?;
    Ok((StatusCode::CREATED, Json(semester)))
}

/// List academic semesters
#[utoipa::path(
    get,
    path = "/academic-semesters",
    tag = "Academic",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All semesters", body = Vec<AcademicSemester>))
)]
pub async fn list_semesters(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AcademicSemester>>> {
    require_roles(&current_user, ALL_ROLES)?;
    Ok(Json(state.academic_service.list_semesters().await?))
}

/// Get academic semester by id
#[utoipa::path(
    get,
    path = "/academic-semesters/{id}",
    tag = "Academic",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Semester id")),
    responses(
        (status = 200, description = "Semester", body = AcademicSemester),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_semester(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AcademicSemester>> {
    require_roles(&current_user, ALL_ROLES)?;
    Ok(Json(state.academic_service.get_semester(id).await?))
}

/// Update academic semester
#[utoipa::path(
    put,
    path = "/academic-semesters/{id}",
    tag = "Academic",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Semester id")),
    request_body = UpdateSemester,
    responses(
        (status = 200, description = "Semester updated", body = AcademicSemester),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_semester(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateSemester>,
) -> AppResult<Json<AcademicSemester>> {
    require_roles(&current_user, ADMIN_ROLES)?;
    Ok(Json(state.academic_service.update_semester(id, payload).await?))
}

/// Create an academic faculty
#[utoipa::path(
    post,
    path = "/academic-faculties",
    tag = "Academic",
    security(("bearer_auth" = [])),
    request_body = CreateFaculty,
    responses(
        (status = 201, description = "Faculty created", body = AcademicFaculty),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_faculty(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateFaculty>,
) -> AppResult<(StatusCode, Json<AcademicFaculty>)> {
    require_roles(&current_user, ADMIN_ROLES)?;
    let faculty = state.academic_service.create_faculty(payload).await?;
    Ok((StatusCode::CREATED, Json(faculty)))
}

/// List academic faculties
#[utoipa::path(
    get,
    path = "/academic-faculties",
    tag = "Academic",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All faculties", body = Vec<AcademicFaculty>))
)]
pub async fn list_faculties(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AcademicFaculty>>> {
    require_roles(&current_user, ALL_ROLES)?;
    Ok(Json(state.academic_service.list_faculties().await?))
}

/// Get academic faculty by id
#[utoipa::path(
    get,
    path = "/academic-faculties/{id}",
    tag = "Academic",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Faculty id")),
    responses(
        (status = 200, description = "Faculty", body = AcademicFaculty),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_faculty(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AcademicFaculty>> {
    require_roles(&current_user, ALL_ROLES)?;
    Ok(Json(state.academic_service.get_faculty(id).await?))
}

/// Create an academic department
#[utoipa::path(
    post,
    path = "/academic-departments",
    tag = "Academic",
    security(("bearer_auth" = [])),
    request_body = CreateDepartment,
    responses(
        (status = 201, description = "Department created", body = AcademicDepartment),
        (status = 400, description = "Owning faculty not found"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_department(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDepartment>,
) -> AppResult<(StatusCode, Json<AcademicDepartment>)> {
    require_roles(&current_user, ADMIN_ROLES)?;
    let department = state.academic_service.create_department(payload).await?;
    Ok((StatusCode::CREATED, Json(department)))
}

/// List academic departments
#[utoipa::path(
    get,
    path = "/academic-departments",
    tag = "Academic",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All departments", body = Vec<AcademicDepartment>))
)]
pub async fn list_departments(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AcademicDepartment>>> {
    require_roles(&current_user, ALL_ROLES)?;
    Ok(Json(state.academic_service.list_departments().await?))
}

/// Get academic department by id
#[utoipa::path(
    get,
    path = "/academic-departments/{id}",
    tag = "Academic",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Department id")),
    responses(
        (status = 200, description = "Department", body = AcademicDepartment),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_department(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AcademicDepartment>> {
    require_roles(&current_user, ALL_ROLES)?;
    Ok(Json(state.academic_service.get_department(id).await?))
}
