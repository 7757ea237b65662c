//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{AccountRepository, AccountStore, Database};
use crate::services::{
    AcademicService, AuthService, CourseService, ProfileService, ProvisioningService,
    ServiceContainer, Services,
};

/// Application state containing all services (DI container).
///
/// Use `from_config()` for recommended initialization with full
/// ServiceContainer and UnitOfWork support.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Provisioning service
    pub provisioning_service: Arc<dyn ProvisioningService>,
    /// Academic structure service
    pub academic_service: Arc<dyn AcademicService>,
    /// Course service
    pub course_service: Arc<dyn CourseService>,
    /// Profile service
    pub profile_service: Arc<dyn ProfileService>,
    /// Account lookups for the role gate
    pub accounts: Arc<dyn AccountRepository>,
    /// Database connection
    pub database: Arc<Database>,
    /// Internal service container (optional, only with from_config)
    service_container: Option<Arc<Services>>,
}

impl AppState {
    /// Create application state from database connection and config.
    ///
    /// This is the recommended way to create AppState as it uses
    /// the ServiceContainer for centralized service management.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let accounts = Arc::new(AccountStore::new(database.get_connection()));
        let container = Arc::new(Services::from_connection(
            database.get_connection(),
            config,
        ));

        Self {
            auth_service: container.auth(),
            provisioning_service: container.provisioning(),
            academic_service: container.academics(),
            course_service: container.courses(),
            profile_service: container.profiles(),
            accounts,
            database,
            service_container: Some(container),
        }
    }

    /// Create new application state with manually injected services.
    ///
    /// Note: This method does not provide ServiceContainer access.
    /// Use `from_config()` for full functionality.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        provisioning_service: Arc<dyn ProvisioningService>,
        academic_service: Arc<dyn AcademicService>,
        course_service: Arc<dyn CourseService>,
        profile_service: Arc<dyn ProfileService>,
        accounts: Arc<dyn AccountRepository>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            provisioning_service,
            academic_service,
            course_service,
            profile_service,
            accounts,
            database,
            service_container: None,
        }
    }

    /// Get the service container for centralized service access.
    ///
    /// Returns `Some` only if created via `from_config()`.
    pub fn services(&self) -> Option<&Arc<Services>> {
        self.service_container.as_ref()
    }
}
