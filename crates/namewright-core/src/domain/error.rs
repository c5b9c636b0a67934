// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry into reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Unknown naming style '{0}'")]
    UnknownNamingStyle(String),

    #[error("Path '{path}' is not inside subtree '{root}'")]
    PathOutsideSubtree { path: PathBuf, root: PathBuf },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    /// Two entries of a rename plan would end up at the same path.
    #[error("Rename collision at {target}: {} entries map to it", sources.len())]
    PathCollision {
        target: PathBuf,
        sources: Vec<PathBuf>,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownNamingStyle(style) => vec![
                format!("'{}' is not a naming style", style),
                "Supported styles: PascalCase, camelCase, kebab-case".into(),
            ],
            Self::PathCollision { target, sources } => {
                let mut out = vec![format!(
                    "Renaming would merge several entries into {}",
                    target.display()
                )];
                out.extend(sources.iter().map(|s| format!("  • {}", s.display())));
                out.push("Rename one of them by hand, then run again".into());
                out.push("Nothing was renamed".into());
                out
            }
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownNamingStyle(_) => ErrorCategory::Validation,
            Self::PathCollision { .. } => ErrorCategory::Conflict,
            Self::PathOutsideSubtree { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Internal,
}
