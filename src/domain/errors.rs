//! Domain error types
//!
//! Business-level failures surfaced by the circulation engine,
//! the repositories and the query layer.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Referenced entity id absent
    NotFound,
    /// Issue requested on a copy that already has an open loan
    CopyUnavailable(i32),
    /// Return requested on a loan that was already closed
    LoanAlreadyClosed(i32),
    /// Unique-field collision (ISBN, barcode, national ID)
    Constraint(String),
    /// Underlying storage failure; the in-flight transaction rolled back
    Storage(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::CopyUnavailable(id) => {
                write!(f, "Copy {} is not available for loan", id)
            }
            DomainError::LoanAlreadyClosed(id) => {
                write!(f, "Loan {} is already closed", id)
            }
            DomainError::Constraint(msg) => write!(f, "Constraint violation: {}", msg),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => DomainError::Constraint(msg),
            Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(msg)) => {
                DomainError::Constraint(msg)
            }
            _ => DomainError::Storage(e.to_string()),
        }
    }
}
