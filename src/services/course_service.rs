//! Course service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Course, CreateCourse};
use crate::errors::{AppResult, OptionExt};
use crate::infra::CourseRepository;

/// Course service trait for dependency injection.
#[async_trait]
pub trait CourseService: Send + Sync {
    async fn create_course(&self, data: CreateCourse) -> AppResult<Course>;
    async fn get_course(&self, id: Uuid) -> AppResult<Course>;
    async fn list_courses(&self) -> AppResult<Vec<Course>>;
    async fn delete_course(&self, id: Uuid) -> AppResult<Course>;
}

/// Concrete implementation of CourseService.
pub struct CourseManager {
    courses: Arc<dyn CourseRepository>,
}

impl CourseManager {
    pub fn new(courses: Arc<dyn CourseRepository>) -> Self {
        Self { courses }
    }
}

#[async_trait]
impl CourseService for CourseManager {
    async fn create_course(&self, data: CreateCourse) -> AppResult<Course> {
        self.courses.create(data).await
    }

    async fn get_course(&self, id: Uuid) -> AppResult<Course> {
        self.courses.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_courses(&self) -> AppResult<Vec<Course>> {
        self.courses.list().await
    }

    async fn delete_course(&self, id: Uuid) -> AppResult<Course> {
        self.courses.delete(id).await
    }
}
