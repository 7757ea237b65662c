//! HTTP request handlers.

pub mod academic_handler;
pub mod auth_handler;
pub mod course_handler;
pub mod profile_handler;
pub mod user_handler;

pub use academic_handler::{
    academic_department_routes, academic_faculty_routes, academic_semester_routes,
};
pub use auth_handler::auth_routes;
pub use course_handler::course_routes;
pub use profile_handler::{admin_routes, faculty_routes, student_routes};
pub use user_handler::user_routes;
