//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - The external asset store client
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;
pub mod uploader;

pub use db::{Database, Migrator};
pub use repositories::{
    AcademicRepository, AcademicStore, AccountRepository, AccountStore, CourseRepository,
    CourseStore, ProfileRepository, ProfileStore,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxAccountRepository, TxProfileRepository, UnitOfWork,
};
pub use uploader::{AssetUploader, HttpAssetUploader, ImageFile, UploadedAsset};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockAcademicRepository, MockAccountRepository, MockCourseRepository, MockProfileRepository,
};
#[cfg(any(test, feature = "test-utils"))]
pub use uploader::MockAssetUploader;
