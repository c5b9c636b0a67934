//! Local filesystem adapter using tokio::fs.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tracing::trace;
use walkdir::WalkDir;

use namewright_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::DirectoryEntry,
    error::{NamewrightError, NamewrightResult},
};

/// Production filesystem implementation using `tokio::fs`.
///
/// Directory listing uses `walkdir` on the blocking pool. Symlinks are
/// listed as files and never followed, and `read_text` skips them.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Filesystem for LocalFilesystem {
    async fn walk(&self, root: &Path) -> NamewrightResult<Vec<DirectoryEntry>> {
        let root_buf = root.to_path_buf();
        let walked = tokio::task::spawn_blocking(move || walk_blocking(&root_buf))
            .await
            .map_err(|e| ApplicationError::TaskFailed {
                reason: e.to_string(),
            })?;

        let entries = walked?;
        trace!(root = %root.display(), entries = entries.len(), "Walked directory");
        Ok(entries)
    }

    async fn rename(&self, from: &Path, to: &Path) -> NamewrightResult<()> {
        tokio::fs::rename(from, to)
            .await
            .map_err(|e| map_io_error(from, e, "rename"))
    }

    async fn read_text(&self, path: &Path) -> NamewrightResult<Option<String>> {
        // Symlinks are listed as files by `walk`; reading through one could
        // land on a directory or a target renamed earlier in the run.
        let metadata = tokio::fs::symlink_metadata(path)
            .await
            .map_err(|e| map_io_error(path, e, "read file metadata"))?;
        if !metadata.is_file() {
            trace!(path = %path.display(), "Skipping non-regular file");
            return Ok(None);
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| map_io_error(path, e, "read file"))?;
        Ok(String::from_utf8(bytes).ok())
    }

    async fn write_file(&self, path: &Path, content: &str) -> NamewrightResult<()> {
        tokio::fs::write(path, content)
            .await
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}

fn walk_blocking(root: &Path) -> NamewrightResult<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            let reason = match e.into_io_error() {
                Some(io_error) => format!("Failed to list directory: {}", io_error),
                None => "Failed to list directory".to_string(),
            };
            NamewrightError::from(ApplicationError::FilesystemError { path, reason })
        })?;

        let path = entry.path().to_path_buf();
        if entry.file_type().is_dir() {
            entries.push(DirectoryEntry::directory(path));
        } else {
            entries.push(DirectoryEntry::file(path));
        }
    }

    Ok(entries)
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> NamewrightError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
