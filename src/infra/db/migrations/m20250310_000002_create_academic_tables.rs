//! Migration: Create academic structure tables.
//!
//! Semesters, faculties and departments; a department references its
//! owning faculty.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcademicSemesters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicSemesters::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AcademicSemesters::Name).string().not_null())
                    .col(ColumnDef::new(AcademicSemesters::Code).string().not_null())
                    .col(ColumnDef::new(AcademicSemesters::Year).integer().not_null())
                    .col(
                        ColumnDef::new(AcademicSemesters::StartMonth)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicSemesters::EndMonth)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicSemesters::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicSemesters::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One semester record per (name, year)
        manager
            .create_index(
                Index::create()
                    .name("idx_academic_semesters_name_year")
                    .table(AcademicSemesters::Table)
                    .col(AcademicSemesters::Name)
                    .col(AcademicSemesters::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AcademicFaculties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicFaculties::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AcademicFaculties::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(AcademicFaculties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicFaculties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AcademicDepartments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicDepartments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AcademicDepartments::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(AcademicDepartments::AcademicFacultyId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicDepartments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicDepartments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_academic_departments_faculty")
                            .from(
                                AcademicDepartments::Table,
                                AcademicDepartments::AcademicFacultyId,
                            )
                            .to(AcademicFaculties::Table, AcademicFaculties::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AcademicDepartments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AcademicFaculties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AcademicSemesters::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AcademicSemesters {
    Table,
    Id,
    Name,
    Code,
    Year,
    StartMonth,
    EndMonth,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum AcademicFaculties {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum AcademicDepartments {
    Table,
    Id,
    Name,
    AcademicFacultyId,
    CreatedAt,
    UpdatedAt,
}
