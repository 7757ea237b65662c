//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod academic_repository;
mod account_repository;
mod course_repository;
pub(crate) mod entities;
mod profile_repository;

pub use academic_repository::{AcademicRepository, AcademicStore};
pub use account_repository::{AccountRepository, AccountStore};
pub use course_repository::{CourseRepository, CourseStore};
pub use profile_repository::{ProfileRepository, ProfileStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use academic_repository::MockAcademicRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use course_repository::MockCourseRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use profile_repository::MockProfileRepository;
