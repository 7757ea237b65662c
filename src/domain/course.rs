//! Course domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Course domain entity
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Course {
    pub id: Uuid,
    #[schema(example = "Introduction to Programming")]
    pub title: String,
    #[schema(example = "CS")]
    pub prefix: String,
    #[schema(example = 101)]
    pub code: i32,
    #[schema(example = 3)]
    pub credits: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Course creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCourse {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Introduction to Programming")]
    pub title: String,
    #[validate(length(min = 1, message = "Prefix is required"))]
    #[schema(example = "CS")]
    pub prefix: String,
    #[validate(range(min = 1, message = "Code must be positive"))]
    #[schema(example = 101)]
    pub code: i32,
    #[validate(range(min = 0, message = "Credits cannot be negative"))]
    #[schema(example = 3)]
    pub credits: i32,
}
