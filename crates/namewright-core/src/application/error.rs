//! Application layer errors.
//!
//! These errors represent failures while touching the project tree, not
//! violated naming rules. Rule violations are `DomainError` from
//! `crate::domain`.
//!
//! None of these failures are rolled back: a rename or rewrite error can
//! leave a subtree partly processed. Recovery goes through version control.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Listing a subtree failed; nothing in it was renamed.
    #[error("Could not plan renames under {root}: {reason}")]
    PlanningFailed { root: PathBuf, reason: String },

    /// A single rename failed; earlier renames of the run are kept.
    #[error("Failed to rename {from} to {to}: {reason}")]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },

    /// Reading or writing a file during reference rewriting failed.
    #[error("Failed to rewrite references in {path}: {reason}")]
    RewriteFailed { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The project root is missing paths a run depends on.
    #[error("{root} does not look like a project root ({} missing)", missing.len())]
    IncompleteProject { root: PathBuf, missing: Vec<PathBuf> },

    /// A background rename task panicked or was cancelled.
    #[error("Rename task failed: {reason}")]
    TaskFailed { reason: String },

    /// Filesystem state lock poisoned.
    #[error("Filesystem state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PlanningFailed { root, .. } => vec![
                format!("Could not read {}", root.display()),
                "Check that the directory exists and is readable".into(),
                "Nothing was renamed in this subtree".into(),
            ],
            Self::RenameFailed { from, .. } => vec![
                format!("Renaming stopped at {}", from.display()),
                "Some files and folders may already be renamed".into(),
                "Restore the tree with your version control (e.g. git checkout .) and retry".into(),
            ],
            Self::RewriteFailed { path, .. } => vec![
                format!("Could not update {}", path.display()),
                "Files rewritten before this one keep their new content".into(),
                "Check file permissions, or restore with your version control".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::IncompleteProject { missing, .. } => {
                let mut out = vec!["Run this command from your project root".into()];
                out.extend(missing.iter().map(|p| format!("  • missing: {}", p.display())));
                out.push("Or pass the project root with -C <DIR>".into());
                out
            }
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PlanningFailed { .. } => ErrorCategory::NotFound,
            Self::IncompleteProject { .. } => ErrorCategory::Validation,
            Self::RenameFailed { .. }
            | Self::RewriteFailed { .. }
            | Self::FilesystemError { .. }
            | Self::TaskFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
