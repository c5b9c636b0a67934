//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `namewright-adapters` crate provides the filesystem implementations;
//! the CLI provides the progress reporter.

use std::path::Path;

use async_trait::async_trait;

use crate::application::services::RenameStage;
use crate::domain::DirectoryEntry;
use crate::error::NamewrightResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `namewright_adapters::filesystem::LocalFilesystem` (production)
/// - `namewright_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths are absolute or relative to the caller's project root; the port
///   never consults the process working directory on its own
/// - Every method may suspend on I/O
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Every entry below `root`, recursively, excluding `root` itself.
    /// Directories are listed but symlinks are never followed.
    async fn walk(&self, root: &Path) -> NamewrightResult<Vec<DirectoryEntry>>;

    /// Rename a file or directory. `to` must not exist.
    async fn rename(&self, from: &Path, to: &Path) -> NamewrightResult<()>;

    /// Read a file as UTF-8 text. `Ok(None)` when the content is not UTF-8
    /// or `path` is not a regular file (a symlink, dangling or not, or a
    /// directory). Links are never followed.
    async fn read_text(&self, path: &Path) -> NamewrightResult<Option<String>>;

    /// Replace a file's content.
    async fn write_file(&self, path: &Path, content: &str) -> NamewrightResult<()>;

    /// Check if path exists.
    async fn exists(&self, path: &Path) -> bool;
}

/// Port for user-visible progress.
pub trait ProgressReporter: Send + Sync {
    fn stage_started(&self, stage: &RenameStage);

    /// `changed` counts renamed entries or rewritten files.
    fn stage_finished(&self, stage: &RenameStage, changed: usize);
}

/// Reporter that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn stage_started(&self, _stage: &RenameStage) {}

    fn stage_finished(&self, _stage: &RenameStage, _changed: usize) {}
}
