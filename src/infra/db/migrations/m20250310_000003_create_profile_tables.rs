//! Migration: Create profile tables (students, faculties, admins).
//!
//! Each profile row pairs with exactly one account and shares its
//! identifier.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Students::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Students::Identifier)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Students::AccountId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::FirstName).string().not_null())
                    .col(ColumnDef::new(Students::MiddleName).string().null())
                    .col(ColumnDef::new(Students::LastName).string().not_null())
                    .col(ColumnDef::new(Students::Gender).string().not_null())
                    .col(ColumnDef::new(Students::DateOfBirth).date().null())
                    .col(
                        ColumnDef::new(Students::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::ContactNo).string().not_null())
                    .col(ColumnDef::new(Students::PresentAddress).string().null())
                    .col(ColumnDef::new(Students::ProfileImg).string().null())
                    .col(
                        ColumnDef::new(Students::AdmissionSemesterId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::AcademicDepartmentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::AcademicFacultyId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_account")
                            .from(Students::Table, Students::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_admission_semester")
                            .from(Students::Table, Students::AdmissionSemesterId)
                            .to(AcademicSemesters::Table, AcademicSemesters::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_academic_department")
                            .from(Students::Table, Students::AcademicDepartmentId)
                            .to(AcademicDepartments::Table, AcademicDepartments::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_academic_faculty")
                            .from(Students::Table, Students::AcademicFacultyId)
                            .to(AcademicFaculties::Table, AcademicFaculties::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_deleted_at")
                    .table(Students::Table)
                    .col(Students::DeletedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Faculties::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Faculties::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Faculties::Identifier)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Faculties::AccountId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Faculties::Designation).string().not_null())
                    .col(ColumnDef::new(Faculties::FirstName).string().not_null())
                    .col(ColumnDef::new(Faculties::MiddleName).string().null())
                    .col(ColumnDef::new(Faculties::LastName).string().not_null())
                    .col(ColumnDef::new(Faculties::Gender).string().not_null())
                    .col(
                        ColumnDef::new(Faculties::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Faculties::ContactNo).string().not_null())
                    .col(ColumnDef::new(Faculties::ProfileImg).string().null())
                    .col(
                        ColumnDef::new(Faculties::AcademicDepartmentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Faculties::AcademicFacultyId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Faculties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Faculties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Faculties::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_faculties_account")
                            .from(Faculties::Table, Faculties::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_faculties_academic_department")
                            .from(Faculties::Table, Faculties::AcademicDepartmentId)
                            .to(AcademicDepartments::Table, AcademicDepartments::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_faculties_academic_faculty")
                            .from(Faculties::Table, Faculties::AcademicFacultyId)
                            .to(AcademicFaculties::Table, AcademicFaculties::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_faculties_deleted_at")
                    .table(Faculties::Table)
                    .col(Faculties::DeletedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Admins::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Admins::Identifier)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Admins::AccountId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Admins::Designation).string().not_null())
                    .col(ColumnDef::new(Admins::FirstName).string().not_null())
                    .col(ColumnDef::new(Admins::MiddleName).string().null())
                    .col(ColumnDef::new(Admins::LastName).string().not_null())
                    .col(ColumnDef::new(Admins::Gender).string().not_null())
                    .col(
                        ColumnDef::new(Admins::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Admins::ContactNo).string().not_null())
                    .col(ColumnDef::new(Admins::ProfileImg).string().null())
                    .col(
                        ColumnDef::new(Admins::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Admins::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Admins::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admins_account")
                            .from(Admins::Table, Admins::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_admins_deleted_at")
                    .table(Admins::Table)
                    .col(Admins::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faculties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
    Identifier,
    AccountId,
    FirstName,
    MiddleName,
    LastName,
    Gender,
    DateOfBirth,
    Email,
    ContactNo,
    PresentAddress,
    ProfileImg,
    AdmissionSemesterId,
    AcademicDepartmentId,
    AcademicFacultyId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Faculties {
    Table,
    Id,
    Identifier,
    AccountId,
    Designation,
    FirstName,
    MiddleName,
    LastName,
    Gender,
    Email,
    ContactNo,
    ProfileImg,
    AcademicDepartmentId,
    AcademicFacultyId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Admins {
    Table,
    Id,
    Identifier,
    AccountId,
    Designation,
    FirstName,
    MiddleName,
    LastName,
    Gender,
    Email,
    ContactNo,
    ProfileImg,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
}

#[derive(Iden)]
enum AcademicSemesters {
    Table,
    Id,
}

#[derive(Iden)]
enum AcademicDepartments {
    Table,
    Id,
}

#[derive(Iden)]
enum AcademicFaculties {
    Table,
    Id,
}
