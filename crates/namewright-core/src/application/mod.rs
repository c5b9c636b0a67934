//! Application layer for Namewright.
//!
//! This layer contains:
//! - **Services**: Planning, renaming, rewriting and the orchestrating
//!   `NamingStyleService`
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Naming rules, plan ordering and line matching live in `crate::domain`;
//! this layer only moves data between the domain and the ports.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    NamingStyleService, PathPlanner, ReferenceRewriter, RenameReport, RenameStage,
    RouterRewriter, SubtreeRenames, TreeRenamer,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, NoProgress, ProgressReporter};

pub use error::ApplicationError;
