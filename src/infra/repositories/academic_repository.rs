//! Academic structure repository - semesters, faculties, departments.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::entities::{academic_department, academic_faculty, academic_semester};
use crate::domain::{
    AcademicDepartment, AcademicFaculty, AcademicSemester, CreateDepartment, CreateFaculty,
    CreateSemester, UpdateSemester,
};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Academic structure repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AcademicRepository: Send + Sync {
    async fn create_semester(&self, data: CreateSemester) -> AppResult<AcademicSemester>;
    async fn find_semester(&self, id: Uuid) -> AppResult<Option<AcademicSemester>>;
    async fn list_semesters(&self) -> AppResult<Vec<AcademicSemester>>;
    async fn update_semester(&self, id: Uuid, data: UpdateSemester) -> AppResult<AcademicSemester>;

    async fn create_faculty(&self, data: CreateFaculty) -> AppResult<AcademicFaculty>;
    async fn find_faculty(&self, id: Uuid) -> AppResult<Option<AcademicFaculty>>;
    async fn list_faculties(&self) -> AppResult<Vec<AcademicFaculty>>;

    async fn create_department(&self, data: CreateDepartment) -> AppResult<AcademicDepartment>;
    async fn find_department(&self, id: Uuid) -> AppResult<Option<AcademicDepartment>>;
    async fn list_departments(&self) -> AppResult<Vec<AcademicDepartment>>;
}

/// SeaORM-backed academic structure store.
pub struct AcademicStore {
    db: DatabaseConnection,
}

impl AcademicStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AcademicRepository for AcademicStore {
    async fn create_semester(&self, data: CreateSemester) -> AppResult<AcademicSemester> {
        let now = Utc::now();
        let active_model = academic_semester::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name.as_str().to_string()),
            code: Set(data.code),
            year: Set(data.year),
            start_month: Set(data.start_month),
            end_month: Set(data.end_month),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(AcademicSemester::from(model))
    }

    async fn find_semester(&self, id: Uuid) -> AppResult<Option<AcademicSemester>> {
        let result = academic_semester::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(AcademicSemester::from))
    }

    async fn list_semesters(&self) -> AppResult<Vec<AcademicSemester>> {
        let models = academic_semester::Entity::find()
            .order_by_desc(academic_semester::Column::Year)
            .order_by_asc(academic_semester::Column::Code)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(AcademicSemester::from).collect())
    }

    async fn update_semester(&self, id: Uuid, data: UpdateSemester) -> AppResult<AcademicSemester> {
        let existing = academic_semester::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: academic_semester::ActiveModel = existing.into();

        if let Some(name) = data.name {
            active.name = Set(name.as_str().to_string());
        }
        if let Some(code) = data.code {
            active.code = Set(code);
        }
        if let Some(year) = data.year {
            active.year = Set(year);
        }
        if let Some(start_month) = data.start_month {
            active.start_month = Set(start_month);
        }
        if let Some(end_month) = data.end_month {
            active.end_month = Set(end_month);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;

        Ok(AcademicSemester::from(model))
    }

    async fn create_faculty(&self, data: CreateFaculty) -> AppResult<AcademicFaculty> {
        let now = Utc::now();
        let active_model = academic_faculty::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(AcademicFaculty::from(model))
    }

    async fn find_faculty(&self, id: Uuid) -> AppResult<Option<AcademicFaculty>> {
        let result = academic_faculty::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(AcademicFaculty::from))
    }

    async fn list_faculties(&self) -> AppResult<Vec<AcademicFaculty>> {
        let models = academic_faculty::Entity::find()
            .order_by_asc(academic_faculty::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(AcademicFaculty::from).collect())
    }

    async fn create_department(&self, data: CreateDepartment) -> AppResult<AcademicDepartment> {
        let now = Utc::now();
        let active_model = academic_department::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            academic_faculty_id: Set(data.academic_faculty),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(AcademicDepartment::from(model))
    }

    async fn find_department(&self, id: Uuid) -> AppResult<Option<AcademicDepartment>> {
        let result = academic_department::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(AcademicDepartment::from))
    }

    async fn list_departments(&self) -> AppResult<Vec<AcademicDepartment>> {
        let models = academic_department::Entity::find()
            .order_by_asc(academic_department::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(AcademicDepartment::from).collect())
    }
}
