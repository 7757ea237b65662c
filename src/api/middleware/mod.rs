//! API middleware.

mod auth;

pub use auth::{
    auth_middleware, require_roles, CurrentUser, ADMIN_ROLES, ALL_ROLES, SUPER_ADMIN_ONLY,
};
