//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod academic_department;
pub mod academic_faculty;
pub mod academic_semester;
pub mod account;
pub mod admin;
pub mod course;
pub mod faculty;
pub mod student;
