//! Profile domain entities and provisioning payloads.
//!
//! Student, Faculty and Admin profiles are structurally similar,
//! semantically distinct records. Each shares its human-readable
//! identifier with exactly one Account and holds a back-reference to it;
//! neither record ever exists without the other.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{AccountResponse, Role};

/// Person name value object, stored flattened on every profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PersonName {
    #[validate(length(min = 1, message = "First name is required"))]
    #[schema(example = "Jamil")]
    pub first_name: String,
    #[schema(example = "Hasan")]
    pub middle_name: Option<String>,
    #[validate(length(min = 1, message = "Last name is required"))]
    #[schema(example = "Karim")]
    pub last_name: String,
}

/// Gender enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other,
        }
    }
}

/// Student profile domain entity
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Student {
    pub id: Uuid,
    /// Shared with the paired account
    #[schema(example = "24010003")]
    pub identifier: String,
    /// Storage-level identity of the paired account
    pub account_id: Uuid,
    pub name: PersonName,
    pub gender: Gender,
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
    pub contact_no: String,
    pub present_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_img: Option<String>,
    pub admission_semester: Uuid,
    pub academic_department: Uuid,
    /// Copied from the department's owning faculty at creation
    pub academic_faculty: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Faculty profile domain entity
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Faculty {
    pub id: Uuid,
    #[schema(example = "F-0001")]
    pub identifier: String,
    pub account_id: Uuid,
    #[schema(example = "Lecturer")]
    pub designation: String,
    pub name: PersonName,
    pub gender: Gender,
    pub email: String,
    pub contact_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_img: Option<String>,
    pub academic_department: Uuid,
    /// Copied from the department's owning faculty at creation
    pub academic_faculty: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Admin profile domain entity
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Admin {
    pub id: Uuid,
    #[schema(example = "A-0001")]
    pub identifier: String,
    pub account_id: Uuid,
    #[schema(example = "Registrar")]
    pub designation: String,
    pub name: PersonName,
    pub gender: Gender,
    pub email: String,
    pub contact_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_img: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Student provisioning payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct StudentDraft {
    #[validate(nested)]
    pub name: PersonName,
    pub gender: Gender,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "student@example.edu")]
    pub email: String,
    #[validate(length(min = 1, message = "Contact number is required"))]
    pub contact_no: String,
    pub present_address: Option<String>,
    /// Admission semester reference; must exist
    pub admission_semester: Uuid,
    /// Academic department reference; must exist
    pub academic_department: Uuid,
    /// Filled from the department's owning faculty before the profile is
    /// written; never accepted from the client
    #[serde(skip)]
    pub academic_faculty: Option<Uuid>,
}

/// Faculty provisioning payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct FacultyDraft {
    #[validate(length(min = 1, message = "Designation is required"))]
    #[schema(example = "Lecturer")]
    pub designation: String,
    #[validate(nested)]
    pub name: PersonName,
    pub gender: Gender,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "faculty@example.edu")]
    pub email: String,
    #[validate(length(min = 1, message = "Contact number is required"))]
    pub contact_no: String,
    /// Academic department reference; must exist
    pub academic_department: Uuid,
    /// Filled from the department's owning faculty before the profile is
    /// written; never accepted from the client
    #[serde(skip)]
    pub academic_faculty: Option<Uuid>,
}

/// Admin provisioning payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AdminDraft {
    #[validate(length(min = 1, message = "Designation is required"))]
    #[schema(example = "Registrar")]
    pub designation: String,
    #[validate(nested)]
    pub name: PersonName,
    pub gender: Gender,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "admin@example.edu")]
    pub email: String,
    #[validate(length(min = 1, message = "Contact number is required"))]
    pub contact_no: String,
}

/// Role-keyed provisioning request.
///
/// One tagged variant per provisionable role kind; super-admin is an
/// authorization-only role and is never provisioned.
#[derive(Debug, Clone)]
pub enum ProvisionRequest {
    Student(StudentDraft),
    Faculty(FacultyDraft),
    Admin(AdminDraft),
}

impl ProvisionRequest {
    pub fn role(&self) -> Role {
        match self {
            ProvisionRequest::Student(_) => Role::Student,
            ProvisionRequest::Faculty(_) => Role::Faculty,
            ProvisionRequest::Admin(_) => Role::Admin,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            ProvisionRequest::Student(d) => &d.email,
            ProvisionRequest::Faculty(d) => &d.email,
            ProvisionRequest::Admin(d) => &d.email,
        }
    }

    pub fn first_name(&self) -> &str {
        match self {
            ProvisionRequest::Student(d) => &d.name.first_name,
            ProvisionRequest::Faculty(d) => &d.name.first_name,
            ProvisionRequest::Admin(d) => &d.name.first_name,
        }
    }
}

/// Newly provisioned profile returned to the caller
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ProvisionedProfile {
    Student(Student),
    Faculty(Faculty),
    Admin(Admin),
}

impl ProvisionedProfile {
    pub fn identifier(&self) -> &str {
        match self {
            ProvisionedProfile::Student(s) => &s.identifier,
            ProvisionedProfile::Faculty(f) => &f.identifier,
            ProvisionedProfile::Admin(a) => &a.identifier,
        }
    }

    pub fn profile_img(&self) -> Option<&str> {
        match self {
            ProvisionedProfile::Student(s) => s.profile_img.as_deref(),
            ProvisionedProfile::Faculty(f) => f.profile_img.as_deref(),
            ProvisionedProfile::Admin(a) => a.profile_img.as_deref(),
        }
    }
}

/// Student profile joined with its account
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentView {
    #[serde(flatten)]
    pub profile: Student,
    pub account: AccountResponse,
}

/// Faculty profile joined with its account
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FacultyView {
    #[serde(flatten)]
    pub profile: Faculty,
    pub account: AccountResponse,
}

/// Admin profile joined with its account
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminView {
    #[serde(flatten)]
    pub profile: Admin,
    pub account: AccountResponse,
}

/// Role-joined profile returned by the current-identity lookup
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ProfileView {
    Student(StudentView),
    Faculty(FacultyView),
    Admin(AdminView),
}
