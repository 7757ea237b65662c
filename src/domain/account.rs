//! Account domain entity and related types.
//!
//! An Account is the credential/identity record backing every profile.
//! It is only ever created as one half of a provisioning transaction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Platform roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Student,
    Faculty,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Admin => "admin",
            Role::SuperAdmin => "superAdmin",
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "faculty" => Role::Faculty,
            "admin" => Role::Admin,
            "superAdmin" => Role::SuperAdmin,
            // Unknown tags resolve to the least-privileged role
            _ => Role::Student,
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Blocked,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Blocked => "blocked",
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, AccountStatus::Blocked)
    }
}

impl From<&str> for AccountStatus {
    fn from(s: &str) -> Self {
        match s {
            "blocked" => AccountStatus::Blocked,
            _ => AccountStatus::Active,
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    /// Human-readable identifier shared with the paired profile; immutable,
    /// never reused within a role even after deletion
    pub identifier: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp (None = active, Some = deleted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Account {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_blocked(&self) -> bool {
        self.status.is_blocked()
    }
}

/// Account response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountResponse {
    /// Storage-level identity
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Human-readable identifier
    #[schema(example = "24010003")]
    pub identifier: String,
    /// Account email address
    #[schema(example = "student@example.edu")]
    pub email: String,
    /// Platform role
    pub role: Role,
    /// Account status
    pub status: AccountStatus,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            identifier: account.identifier,
            email: account.email,
            role: account.role,
            status: account.status,
            created_at: account.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Student, Role::Faculty, Role::Admin, Role::SuperAdmin] {
            assert_eq!(Role::from(role.as_str()), role);
        }
    }

    #[test]
    fn test_unknown_role_tag_is_least_privileged() {
        assert_eq!(Role::from("root"), Role::Student);
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(AccountStatus::from("active"), AccountStatus::Active);
        assert_eq!(AccountStatus::from("blocked"), AccountStatus::Blocked);
        assert!(AccountStatus::Blocked.is_blocked());
        assert!(!AccountStatus::Active.is_blocked());
    }
}
