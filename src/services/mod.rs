//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! Multi-record mutations go through the Unit of Work for transaction
//! management; single-record reads use the repositories directly.

mod academic_service;
mod auth_service;
pub mod container;
mod course_service;
mod profile_service;
mod provisioning_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use academic_service::{AcademicManager, AcademicService};
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use course_service::{CourseManager, CourseService};
pub use profile_service::{ProfileManager, ProfileService};
pub use provisioning_service::{Provisioner, ProvisioningService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
