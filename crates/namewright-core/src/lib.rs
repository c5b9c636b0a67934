//! Namewright Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Namewright
//! naming-style engine, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          namewright-cli (CLI)           │
//! │     (Prompts, config, progress UI)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (NamingStyleService, PathPlanner,      │
//! │   TreeRenamer, ReferenceRewriter, ...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, ProgressReporter)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   namewright-adapters (Infrastructure)  │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (NamingStyle, RenamePlan, ImportRef...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use namewright_core::{
//!     application::NamingStyleService,
//!     domain::{NamingStyle, ProjectLayout, RenameConfiguration},
//! };
//!
//! # async fn demo(filesystem: Arc<dyn namewright_core::application::ports::Filesystem>) {
//! let config = RenameConfiguration {
//!     file_naming_style: NamingStyle::PascalCase,
//!     folder_naming_style: NamingStyle::KebabCase,
//!     use_setup_service: true,
//! };
//!
//! let service = NamingStyleService::new(filesystem);
//! let report = service.run(&ProjectLayout::new("."), &config).await.unwrap();
//! println!("{} entries renamed", report.renamed_count());
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        NamingStyleService, PathPlanner, ReferenceRewriter, RenameReport, RenameStage,
        RouterRewriter, TreeRenamer,
        ports::{Filesystem, NoProgress, ProgressReporter},
    };
    pub use crate::domain::{
        DirectoryEntry, EntryKind, ImportReference, LazyImport, NamingStyle, ProjectLayout,
        RenameConfiguration, RenamePlan, RenamePlanItem, format_name,
    };
    pub use crate::error::{NamewrightError, NamewrightResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
