//! JWT authentication middleware and role gate.
//!
//! The gate denies for exactly four distinct reasons, all terminal for
//! the request: no credential presented, credential invalid or expired,
//! credential valid but role not in the route's allowed set, account
//! blocked.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::{AccountStatus, Role};
use crate::errors::AppError;

/// Routes reserved for administrative callers
pub const ADMIN_ROLES: &[Role] = &[Role::Admin, Role::SuperAdmin];

/// Routes reserved for the super admin
pub const SUPER_ADMIN_ONLY: &[Role] = &[Role::SuperAdmin];

/// Routes open to any authenticated caller
pub const ALL_ROLES: &[Role] = &[Role::Student, Role::Faculty, Role::Admin, Role::SuperAdmin];

/// Authenticated caller extracted from JWT token and the account store
#[derive(Clone, Debug)]
pub struct CurrentUser {
    /// Human-readable account identifier (token subject)
    pub identifier: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
}

/// JWT authentication middleware.
///
/// Extracts and validates the JWT token from the Authorization header,
/// resolves the account behind it (so deletions and status changes take
/// effect immediately, not at token expiry), then injects the
/// CurrentUser into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_token(token)?;

    // A token outliving its account is no longer a valid credential
    let account = state
        .accounts
        .find_by_identifier(&claims.sub)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if account.is_blocked() {
        return Err(AppError::Blocked);
    }

    let current_user = CurrentUser {
        identifier: account.identifier,
        email: account.email,
        role: account.role,
        status: account.status,
    };

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

/// Role gate: permit the caller only when its role is in the allowed set
/// and its account is not blocked.
pub fn require_roles(user: &CurrentUser, allowed: &[Role]) -> Result<(), AppError> {
    if user.status.is_blocked() {
        return Err(AppError::Blocked);
    }
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role, status: AccountStatus) -> CurrentUser {
        CurrentUser {
            identifier: "A-0001".to_string(),
            email: "admin@example.edu".to_string(),
            role,
            status,
        }
    }

    #[test]
    fn test_role_in_allowed_set_is_permitted() {
        let admin = user(Role::Admin, AccountStatus::Active);
        assert!(require_roles(&admin, ADMIN_ROLES).is_ok());
    }

    #[test]
    fn test_role_outside_allowed_set_is_denied() {
        // Valid credential, wrong role: denied regardless
        let faculty = user(Role::Faculty, AccountStatus::Active);
        assert!(matches!(
            require_roles(&faculty, ADMIN_ROLES),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn test_blocked_account_is_denied_even_with_allowed_role() {
        let blocked_admin = user(Role::Admin, AccountStatus::Blocked);
        assert!(matches!(
            require_roles(&blocked_admin, ADMIN_ROLES),
            Err(AppError::Blocked)
        ));
    }

    #[test]
    fn test_super_admin_only_excludes_admin() {
        let admin = user(Role::Admin, AccountStatus::Active);
        assert!(require_roles(&admin, SUPER_ADMIN_ONLY).is_err());

        let super_admin = user(Role::SuperAdmin, AccountStatus::Active);
        assert!(require_roles(&super_admin, SUPER_ADMIN_ONLY).is_ok());
    }
}
