//! Academic structure domain entities.
//!
//! Semesters, faculties and departments form the lookup context for
//! student/faculty provisioning; departments carry the owning faculty
//! reference that gets copied onto profiles at creation time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Academic semester names (fixed enumeration)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SemesterName {
    Autumn,
    Summer,
    Fall,
}

impl SemesterName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SemesterName::Autumn => "Autumn",
            SemesterName::Summer => "Summer",
            SemesterName::Fall => "Fall",
        }
    }

    /// Two-digit code each semester name maps to
    pub fn code(&self) -> &'static str {
        match self {
            SemesterName::Autumn => "01",
            SemesterName::Summer => "02",
            SemesterName::Fall => "03",
        }
    }

    pub fn matches_code(&self, code: &str) -> bool {
        self.code() == code
    }
}

impl From<&str> for SemesterName {
    fn from(s: &str) -> Self {
        match s {
            "Summer" => SemesterName::Summer,
            "Fall" => SemesterName::Fall,
            _ => SemesterName::Autumn,
        }
    }
}

impl std::fmt::Display for SemesterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Calendar months accepted for semester boundaries
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn is_month(value: &str) -> bool {
    MONTHS.contains(&value)
}

/// Academic semester domain entity
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AcademicSemester {
    pub id: Uuid,
    pub name: SemesterName,
    /// Two-digit code, always consistent with `name`
    #[schema(example = "01")]
    pub code: String,
    #[schema(example = 2024)]
    pub year: i32,
    pub start_month: String,
    pub end_month: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Academic faculty (organizational unit) domain entity
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AcademicFaculty {
    pub id: Uuid,
    #[schema(example = "Faculty of Engineering")]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Academic department domain entity
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AcademicDepartment {
    pub id: Uuid,
    #[schema(example = "Department of Computer Science")]
    pub name: String,
    /// Owning faculty; copied onto student/faculty profiles at creation
    pub academic_faculty: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Semester creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSemester {
    pub name: SemesterName,
    /// Must match the code mapped to `name`
    #[schema(example = "01")]
    pub code: String,
    #[validate(range(min = 1900, max = 2999, message = "Year is out of range"))]
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(example = "January")]
    pub start_month: String,
    #[schema(example = "May")]
    pub end_month: String,
}

/// Semester update payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateSemester {
    pub name: Option<SemesterName>,
    pub code: Option<String>,
    #[validate(range(min = 1900, max = 2999, message = "Year is out of range"))]
    pub year: Option<i32>,
    pub start_month: Option<String>,
    pub end_month: Option<String>,
}

/// Faculty creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateFaculty {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Faculty of Engineering")]
    pub name: String,
}

/// Department creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateDepartment {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Department of Computer Science")]
    pub name: String,
    /// Owning faculty reference; must exist
    pub academic_faculty: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_name_code_mapping() {
        assert_eq!(SemesterName::Autumn.code(), "01");
        assert_eq!(SemesterName::Summer.code(), "02");
        assert_eq!(SemesterName::Fall.code(), "03");
    }

    #[test]
    fn test_matches_code() {
        assert!(SemesterName::Autumn.matches_code("01"));
        assert!(!SemesterName::Autumn.matches_code("02"));
    }

    #[test]
    fn test_is_month() {
        assert!(is_month("January"));
        assert!(!is_month("Janvier"));
    }
}
