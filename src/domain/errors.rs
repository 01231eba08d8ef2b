//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! Storage errors are classified here so every adapter reports a unique
//! constraint hit the same way.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Requested customer does not exist
    NotFound(String),
    /// Email already belongs to a stored customer
    DuplicateEmail(String),
    /// Update request carries no actual field differences
    NoChanges,
    /// Request field failed validation
    Validation(String),
    /// Underlying datastore failure
    Storage(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::DuplicateEmail(email) => write!(f, "Email already taken: {}", email),
            DomainError::NoChanges => write!(f, "No data changes found"),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl DomainError {
    /// Name the rejected address in a duplicate raised by a storage constraint
    pub fn for_email(self, email: &str) -> Self {
        match self {
            DomainError::DuplicateEmail(_) => DomainError::DuplicateEmail(email.to_string()),
            other => other,
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => {
                DomainError::DuplicateEmail(msg)
            }
            _ => DomainError::Storage(e.to_string()),
        }
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e
            && db_err.is_unique_violation()
        {
            return DomainError::DuplicateEmail(db_err.message().to_string());
        }
        DomainError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        assert_eq!(
            DomainError::DuplicateEmail("a@x.com".into()).to_string(),
            "Email already taken: a@x.com"
        );
        assert_eq!(DomainError::NoChanges.to_string(), "No data changes found");
    }

    #[test]
    fn for_email_only_rewrites_duplicates() {
        let err = DomainError::DuplicateEmail("UNIQUE constraint failed: customer.email".into());
        assert_eq!(
            err.for_email("a@x.com"),
            DomainError::DuplicateEmail("a@x.com".into())
        );
        assert_eq!(
            DomainError::NoChanges.for_email("a@x.com"),
            DomainError::NoChanges
        );
    }

    #[test]
    fn non_constraint_sqlx_errors_are_storage_errors() {
        let err = DomainError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[test]
    fn plain_db_errors_are_storage_errors() {
        let err = DomainError::from(sea_orm::DbErr::Custom("boom".into()));
        assert!(matches!(err, DomainError::Storage(msg) if msg.contains("boom")));
    }
}
