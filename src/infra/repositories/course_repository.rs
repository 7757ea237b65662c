//! Course repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::course::{self, Entity as CourseEntity};
use crate::domain::{Course, CreateCourse};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Course repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, data: CreateCourse) -> AppResult<Course>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Course>>;
    async fn list(&self) -> AppResult<Vec<Course>>;

    /// Soft delete course by id
    async fn delete(&self, id: Uuid) -> AppResult<Course>;
}

/// SeaORM-backed course store.
pub struct CourseStore {
    db: DatabaseConnection,
}

impl CourseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepository for CourseStore {
    async fn create(&self, data: CreateCourse) -> AppResult<Course> {
        let now = Utc::now();
        let active_model = course::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            prefix: Set(data.prefix),
            code: Set(data.code),
            credits: Set(data.credits),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Course::from(model))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Course>> {
        let result = CourseEntity::find_by_id(id)
            .filter(course::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Course::from))
    }

    async fn list(&self) -> AppResult<Vec<Course>> {
        let models = CourseEntity::find()
            .filter(course::Column::DeletedAt.is_null())
            .order_by_asc(course::Column::Prefix)
            .order_by_asc(course::Column::Code)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Course::from).collect())
    }

    async fn delete(&self, id: Uuid) -> AppResult<Course> {
        let existing = CourseEntity::find_by_id(id)
            .filter(course::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: course::ActiveModel = existing.into();
        let now = Utc::now();
        active.deleted_at = Set(Some(now));
        active.updated_at = Set(now);

        let model = active.update(&self.db).await.map_err(AppError::from)?;

        Ok(Course::from(model))
    }
}
