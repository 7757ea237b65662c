//! Identifier synthesis and ordinal allocation rules.
//!
//! Every account/profile pair carries a human-readable identifier drawn
//! from a scope: students are numbered per (semester, year), faculty and
//! admins globally. The query that finds the most recent identifier in a
//! scope lives in the repository layer; everything here is pure.
//!
//! Formats: students `YYCCNNNN` (year suffix, semester code, ordinal),
//! faculty `F-NNNN`, admin `A-NNNN`. Ordinals are zero-padded to a fixed
//! width and never truncated; allocation past the width is a hard failure.

use crate::config::{ADMIN_ID_PREFIX, FACULTY_ID_PREFIX, ID_ORDINAL_WIDTH, MAX_ID_ORDINAL};
use crate::domain::Role;
use crate::errors::{AppError, AppResult};

/// Key space within which identifier ordinals are allocated uniquely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdScope {
    /// Student scope: one sequence per (admission year, semester code)
    Student { year: i32, code: String },
    /// Faculty scope: one global sequence
    Faculty,
    /// Admin scope: one global sequence
    Admin,
}

impl IdScope {
    pub fn student(year: i32, code: impl Into<String>) -> Self {
        IdScope::Student {
            year,
            code: code.into(),
        }
    }

    /// Role tag the scope allocates for
    pub fn role(&self) -> Role {
        match self {
            IdScope::Student { .. } => Role::Student,
            IdScope::Faculty => Role::Faculty,
            IdScope::Admin => Role::Admin,
        }
    }

    /// Identifier prefix shared by every member of the scope.
    ///
    /// Student identifiers embed the two-digit admission year suffix and
    /// the two-digit semester code ahead of the ordinal.
    pub fn prefix(&self) -> String {
        match self {
            IdScope::Student { year, code } => {
                format!("{:02}{}", year.rem_euclid(100), code)
            }
            IdScope::Faculty => FACULTY_ID_PREFIX.to_string(),
            IdScope::Admin => ADMIN_ID_PREFIX.to_string(),
        }
    }

    /// Format the canonical identifier for an ordinal within this scope.
    ///
    /// # Errors
    /// `IdentifierAllocation` when the ordinal is zero or exceeds the
    /// fixed width; the format is never widened.
    pub fn synthesize(&self, ordinal: u32) -> AppResult<String> {
        if ordinal == 0 || ordinal > MAX_ID_ORDINAL {
            return Err(AppError::allocation(format!(
                "ordinal {} outside 1..={}",
                ordinal, MAX_ID_ORDINAL
            )));
        }
        Ok(format!(
            "{}{:0width$}",
            self.prefix(),
            ordinal,
            width = ID_ORDINAL_WIDTH
        ))
    }

    /// Recover the ordinal from an identifier previously issued in this
    /// scope.
    ///
    /// # Errors
    /// `IdentifierAllocation` when the identifier does not carry this
    /// scope's prefix or its suffix is not numeric. A malformed stored
    /// identifier is a data-integrity fault; defaulting the sequence back
    /// to 1 would silently collide.
    pub fn parse_ordinal(&self, identifier: &str) -> AppResult<u32> {
        let suffix = identifier.strip_prefix(&self.prefix()).ok_or_else(|| {
            AppError::allocation(format!(
                "identifier {:?} does not match scope prefix {:?}",
                identifier,
                self.prefix()
            ))
        })?;

        suffix.parse::<u32>().map_err(|_| {
            AppError::allocation(format!(
                "identifier {:?} has a non-numeric ordinal suffix {:?}",
                identifier, suffix
            ))
        })
    }
}

/// Compute the next ordinal for a scope given the most recently created
/// identifier in that scope, if any.
///
/// A scope with no prior identifier starts at 1; scopes are independent,
/// so a new (semester, year) combination restarts student numbering while
/// faculty/admin sequences never restart.
pub fn next_ordinal(latest: Option<&str>, scope: &IdScope) -> AppResult<u32> {
    match latest {
        None => Ok(1),
        Some(identifier) => Ok(scope.parse_ordinal(identifier)? + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_scope_prefix() {
        let scope = IdScope::student(2024, "01");
        assert_eq!(scope.prefix(), "2401");
    }

    #[test]
    fn test_student_identifier_format() {
        // year "24", code "01", 3rd student in the scope
        let scope = IdScope::student(2024, "01");
        assert_eq!(scope.synthesize(3).unwrap(), "24010003");
    }

    #[test]
    fn test_faculty_and_admin_identifier_format() {
        assert_eq!(IdScope::Faculty.synthesize(1).unwrap(), "F-0001");
        assert_eq!(IdScope::Admin.synthesize(23).unwrap(), "A-0023");
    }

    #[test]
    fn test_first_ordinal_in_empty_scope_is_one() {
        let scope = IdScope::student(2025, "02");
        assert_eq!(next_ordinal(None, &scope).unwrap(), 1);
        assert_eq!(next_ordinal(None, &IdScope::Faculty).unwrap(), 1);
    }

    #[test]
    fn test_next_ordinal_increments_latest() {
        let scope = IdScope::student(2024, "01");
        assert_eq!(next_ordinal(Some("24010003"), &scope).unwrap(), 4);
        assert_eq!(next_ordinal(Some("F-0011"), &IdScope::Faculty).unwrap(), 12);
    }

    #[test]
    fn test_sequential_ordinals_are_gap_free() {
        let scope = IdScope::student(2024, "03");
        let mut latest: Option<String> = None;
        let mut seen = Vec::new();

        for _ in 0..5 {
            let ordinal = next_ordinal(latest.as_deref(), &scope).unwrap();
            let id = scope.synthesize(ordinal).unwrap();
            seen.push(ordinal);
            latest = Some(id);
        }

        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_new_scope_restarts_numbering() {
        // An existing 2024/"01" sequence has no bearing on 2025/"01"
        let fresh = IdScope::student(2025, "01");
        assert_eq!(next_ordinal(None, &fresh).unwrap(), 1);
        assert_eq!(fresh.synthesize(1).unwrap(), "25010001");
    }

    #[test]
    fn test_ordinal_overflow_is_a_hard_failure() {
        let scope = IdScope::student(2024, "01");
        assert!(scope.synthesize(MAX_ID_ORDINAL).is_ok());
        assert!(matches!(
            scope.synthesize(MAX_ID_ORDINAL + 1),
            Err(AppError::IdentifierAllocation(_))
        ));
        assert!(matches!(
            IdScope::Admin.synthesize(10_001),
            Err(AppError::IdentifierAllocation(_))
        ));
    }

    #[test]
    fn test_zero_ordinal_is_rejected() {
        assert!(IdScope::Faculty.synthesize(0).is_err());
    }

    #[test]
    fn test_malformed_suffix_is_an_allocation_fault() {
        let scope = IdScope::student(2024, "01");
        assert!(matches!(
            next_ordinal(Some("2401ABCD"), &scope),
            Err(AppError::IdentifierAllocation(_))
        ));
        // Wrong scope prefix is equally a fault, never a silent restart
        assert!(matches!(
            next_ordinal(Some("25010001"), &scope),
            Err(AppError::IdentifierAllocation(_))
        ));
        assert!(matches!(
            next_ordinal(Some("F-12AB"), &IdScope::Faculty),
            Err(AppError::IdentifierAllocation(_))
        ));
    }
}
