//! Service Container - Centralized service access.
//!
//! Manages service lifecycle and wiring; depends on service traits,
//! not implementations. Thread-safe concurrent access via Arc.

use std::sync::Arc;

use super::{
    AcademicManager, AcademicService, AuthService, Authenticator, CourseManager, CourseService,
    ProfileManager, ProfileService, Provisioner, ProvisioningService,
};
use crate::config::Config;
use crate::infra::{
    AcademicStore, CourseStore, HttpAssetUploader, Persistence,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get provisioning service
    fn provisioning(&self) -> Arc<dyn ProvisioningService>;

    /// Get academic structure service
    fn academics(&self) -> Arc<dyn AcademicService>;

    /// Get course service
    fn courses(&self) -> Arc<dyn CourseService>;

    /// Get profile service
    fn profiles(&self) -> Arc<dyn ProfileService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    provisioning_service: Arc<dyn ProvisioningService>,
    academic_service: Arc<dyn AcademicService>,
    course_service: Arc<dyn CourseService>,
    profile_service: Arc<dyn ProfileService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        provisioning_service: Arc<dyn ProvisioningService>,
        academic_service: Arc<dyn AcademicService>,
        course_service: Arc<dyn CourseService>,
        profile_service: Arc<dyn ProfileService>,
    ) -> Self {
        Self {
            auth_service,
            provisioning_service,
            academic_service,
            course_service,
            profile_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let uow = Arc::new(Persistence::new(db.clone()));
        let academics = Arc::new(AcademicStore::new(db.clone()));
        let courses = Arc::new(CourseStore::new(db));
        let uploader = Arc::new(HttpAssetUploader::new(config.asset_upload_url.clone()));

        let auth_service = Arc::new(Authenticator::new(uow.clone(), config.clone()));
        let provisioning_service = Arc::new(Provisioner::new(
            uow.clone(),
            academics.clone(),
            uploader,
            config.default_password.clone(),
        ));
        let academic_service = Arc::new(AcademicManager::new(academics));
        let course_service = Arc::new(CourseManager::new(courses));
        let profile_service = Arc::new(ProfileManager::new(uow));

        Self {
            auth_service,
            provisioning_service,
            academic_service,
            course_service,
            profile_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn provisioning(&self) -> Arc<dyn ProvisioningService> {
        self.provisioning_service.clone()
    }

    fn academics(&self) -> Arc<dyn AcademicService> {
        self.academic_service.clone()
    }

    fn courses(&self) -> Arc<dyn CourseService> {
        self.course_service.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileService> {
        self.profile_service.clone()
    }
}
