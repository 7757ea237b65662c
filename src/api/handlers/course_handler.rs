//! Course handlers.

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
use crate::domain::{Course, CreateCourse};
use crate::errors::AppResult;

/// Create course routes
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course).get(list_courses))
        .route("/:id", get(get_course).delete(delete_course))
}

/// Create a course
#[utoipa::path(
    post,
    path = "/courses",
    tag = "Courses",
    security(("bearer_auth" = [])),
    request_body = CreateCourse,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_course(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    require_roles(&current_user, ADMIN_ROLES)?;
    let course = state.course_service.create_course(payload).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// List courses
#[utoipa::path(
    get,
    path = "/courses",
    tag = "Courses",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All courses", body = Vec<Course>))
)]
pub async fn list_courses(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Course>>> {
    require_roles(&current_user, ALL_ROLES)?;
    Ok(Json(state.course_service.list_courses().await?))
}

/// Get course by id
#[utoipa::path(
    get,
    path = "/courses/{id}",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course", body = Course),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_course(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Course>> {
    require_roles(&current_user, ALL_ROLES)?;
    Ok(Json(state.course_service.get_course(id).await?))
}

/// Soft delete a course
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deleted", body = Course),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_course(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Course>> {
    require_roles(&current_user, ADMIN_ROLES)?;
    Ok(Json(state.course_service.delete_course(id).await?))
}
