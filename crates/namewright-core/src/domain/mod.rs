// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Namewright.
//!
//! This module contains pure logic: naming styles, rename plans and the
//! textual matching of import statements. All I/O is handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: Plans and references are Clone + PartialEq
//! - **Typed matches**: Import lines parse into named parts, never raw captures
//!
pub mod config;
pub mod entities;
pub mod error;
pub mod layout;
pub mod naming;

// Re-exports for convenience
pub use config::RenameConfiguration;
pub use entities::{
    DirectoryEntry, EntryKind, ImportBase, ImportReference, LazyImport, RenamePlan,
    RenamePlanItem, execution_cmp, rewrite_imports, rewrite_lazy_imports,
};
pub use error::{DomainError, ErrorCategory};
pub use layout::ProjectLayout;
pub use naming::{NamingStyle, format_name};
