//! Academic structure service - semesters, faculties, departments.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::academic::is_month;
use crate::domain::{
    AcademicDepartment, AcademicFaculty, AcademicSemester, CreateDepartment, CreateFaculty,
    CreateSemester, UpdateSemester,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::AcademicRepository;

/// Academic structure service trait for dependency injection.
#[async_trait]
pub trait AcademicService: Send + Sync {
    async fn create_semester(&self, data: CreateSemester) -> AppResult<AcademicSemester>;
    async fn get_semester(&self, id: Uuid) -> AppResult<AcademicSemester>;
    async fn list_semesters(&self) -> AppResult<Vec<AcademicSemester>>;
    async fn update_semester(&self, id: Uuid, data: UpdateSemester) -> AppResult<AcademicSemester>;

    async fn create_faculty(&self, data: CreateFaculty) -> AppResult<AcademicFaculty>;
    async fn get_faculty(&self, id: Uuid) -> AppResult<AcademicFaculty>;
    async fn list_faculties(&self) -> AppResult<Vec<AcademicFaculty>>;

    async fn create_department(&self, data: CreateDepartment) -> AppResult<AcademicDepartment>;
    async fn get_department(&self, id: Uuid) -> AppResult<AcademicDepartment>;
    async fn list_departments(&self) -> AppResult<Vec<AcademicDepartment>>;
}

/// Concrete implementation of AcademicService.
pub struct AcademicManager {
    academics: Arc<dyn AcademicRepository>,
}

impl AcademicManager {
    pub fn new(academics: Arc<dyn AcademicRepository>) -> Self {
        Self { academics }
    }
}

#[async_trait]
impl AcademicService for AcademicManager {
    async fn create_semester(&self, data: CreateSemester) -> AppResult<AcademicSemester> {
        // The stored code must always agree with the semester name
        if !data.name.matches_code(&data.code) {
            return Err(AppError::validation("Invalid semester code"));
        }
        if !is_month(&data.start_month) || !is_month(&data.end_month) {
            return Err(AppError::validation("Invalid semester month"));
        }

        self.academics.create_semester(data).await
    }

    async fn get_semester(&self, id: Uuid) -> AppResult<AcademicSemester> {
        self.academics.find_semester(id).await?.ok_or_not_found()
    }

    async fn list_semesters(&self) -> AppResult<Vec<AcademicSemester>> {
        self.academics.list_semesters().await
    }

    async fn update_semester(&self, id: Uuid, data: UpdateSemester) -> AppResult<AcademicSemester> {
        // Name/code consistency is checked whenever either changes
        let existing = self.academics.find_semester(id).await?.ok_or_not_found()?;
        let name = data.name.unwrap_or(existing.name);
        let code = data.code.clone().unwrap_or(existing.code);
        if !name.matches_code(&code) {
            return Err(AppError::validation("Invalid semester code"));
        }
        if let Some(month) = &data.start_month {
            if !is_month(month) {
                return Err(AppError::validation("Invalid semester month"));
            }
        }
        if let Some(month) = &data.end_month {
            if !is_month(month) {
                return Err(AppError::validation("Invalid semester month"));
            }
        }

        self.academics.update_semester(id, data).await
    }

    async fn create_faculty(&self, data: CreateFaculty) -> AppResult<AcademicFaculty> {
        self.academics.create_faculty(data).await
    }

    async fn get_faculty(&self, id: Uuid) -> AppResult<AcademicFaculty> {
        self.academics.find_faculty(id).await?.ok_or_not_found()
    }

    async fn list_faculties(&self) -> AppResult<Vec<AcademicFaculty>> {
        self.academics.list_faculties().await
    }

    async fn create_department(&self, data: CreateDepartment) -> AppResult<AcademicDepartment> {
        // The owning faculty must exist before a department can point at it
        self.academics
            .find_faculty(data.academic_faculty)
            .await?
            .ok_or_missing("Academic faculty")?;

        self.academics.create_department(data).await
    }

    async fn get_department(&self, id: Uuid) -> AppResult<AcademicDepartment> {
        self.academics.find_department(id).await?.ok_or_not_found()
    }

    async fn list_departments(&self) -> AppResult<Vec<AcademicDepartment>> {
        self.academics.list_departments().await
    }
}
