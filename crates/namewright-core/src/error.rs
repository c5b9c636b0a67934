//! Unified error handling for Namewright Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Namewright Core operations.
#[derive(Debug, Error, Clone)]
pub enum NamewrightError {
    /// Errors from the domain layer (naming rules, plan invariants).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (file-system orchestration).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl NamewrightError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Whether the project tree may have been partly modified.
    pub fn left_partial_changes(&self) -> bool {
        matches!(
            self,
            Self::Application(
                ApplicationError::RenameFailed { .. }
                    | ApplicationError::RewriteFailed { .. }
                    | ApplicationError::TaskFailed { .. }
            )
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type NamewrightResult<T> = Result<T, NamewrightError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn collision_is_a_conflict() {
        let err: NamewrightError = DomainError::PathCollision {
            target: PathBuf::from("/r/A.vue"),
            sources: vec![PathBuf::from("/r/a.vue"), PathBuf::from("/r/A.vue")],
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(!err.left_partial_changes());
    }

    #[test]
    fn rename_failure_reports_partial_changes() {
        let err: NamewrightError = ApplicationError::RenameFailed {
            from: PathBuf::from("/a"),
            to: PathBuf::from("/b"),
            reason: "permission denied".into(),
        }
        .into();
        assert!(err.left_partial_changes());
        assert!(err.suggestions().iter().any(|s| s.contains("version control")));
    }

    #[test]
    fn planning_failure_is_not_found() {
        let err: NamewrightError = ApplicationError::PlanningFailed {
            root: PathBuf::from("/missing"),
            reason: "no such directory".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
