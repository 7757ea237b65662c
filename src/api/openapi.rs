//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    academic_handler, auth_handler, course_handler, profile_handler, user_handler,
};
use crate::domain::{
    AcademicDepartment, AcademicFaculty, AcademicSemester, AccountResponse, AccountStatus, Admin,
    AdminDraft, AdminView, Course, CreateCourse, CreateDepartment, CreateFaculty, CreateSemester,
    Faculty, FacultyDraft, FacultyView, Gender, PersonName, Role, SemesterName, Student,
    StudentDraft, StudentView, UpdateSemester,
};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Campus Records API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus Records API",
        version = "0.1.0",
        description = "Academic records backend with transactional identity provisioning",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::login,
        // Provisioning endpoints
        user_handler::create_student,
        user_handler::create_faculty,
        user_handler::create_admin,
        user_handler::change_status,
        user_handler::get_me,
        // Academic structure endpoints
        academic_handler::create_semester,
        academic_handler::list_semesters,
        academic_handler::get_semester,
        academic_handler::update_semester,
        academic_handler::create_faculty,
        academic_handler::list_faculties,
        academic_handler::get_faculty,
        academic_handler::create_department,
        academic_handler::list_departments,
        academic_handler::get_department,
        // Course endpoints
        course_handler::create_course,
        course_handler::list_courses,
        course_handler::get_course,
        course_handler::delete_course,
        // Profile endpoints
        profile_handler::list_students,
        profile_handler::get_student,
        profile_handler::delete_student,
        profile_handler::list_faculties,
        profile_handler::get_faculty,
        profile_handler::delete_faculty,
        profile_handler::list_admins,
        profile_handler::get_admin,
        profile_handler::delete_admin,
    ),
    components(
        schemas(
            // Domain types
            Role,
            AccountStatus,
            AccountResponse,
            Gender,
            PersonName,
            Student,
            Faculty,
            Admin,
            StudentView,
            FacultyView,
            AdminView,
            StudentDraft,
            FacultyDraft,
            AdminDraft,
            SemesterName,
            AcademicSemester,
            AcademicFaculty,
            AcademicDepartment,
            CreateSemester,
            UpdateSemester,
            CreateFaculty,
            CreateDepartment,
            Course,
            CreateCourse,
            // Auth types
            auth_handler::LoginRequest,
            TokenResponse,
            // Provisioning request types
            user_handler::CreateStudentRequest,
            user_handler::CreateFacultyRequest,
            user_handler::CreateAdminRequest,
            user_handler::ChangeStatusRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and token issuance"),
        (name = "Users", description = "Identity provisioning and account management"),
        (name = "Academic", description = "Semesters, faculties and departments"),
        (name = "Courses", description = "Course management"),
        (name = "Profiles", description = "Student, faculty and admin records")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
