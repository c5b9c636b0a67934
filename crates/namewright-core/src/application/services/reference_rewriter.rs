//! Reference Rewriter - updates import statements after a subtree rename.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument, trace};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{RenameConfiguration, rewrite_imports},
    error::NamewrightResult,
};

pub struct ReferenceRewriter {
    filesystem: Arc<dyn Filesystem>,
}

impl ReferenceRewriter {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Rewrite the imports of every file under `root`, as it is on disk now.
    ///
    /// Files whose content does not change are not written back. Files that
    /// are not UTF-8 text and symlinks are skipped. Returns the rewritten files.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub async fn rewrite_subtree(
        &self,
        root: &Path,
        config: &RenameConfiguration,
    ) -> NamewrightResult<Vec<PathBuf>> {
        let entries = self.filesystem.walk(root).await.map_err(|e| {
            ApplicationError::RewriteFailed {
                path: root.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        let mut rewritten = Vec::new();
        for entry in entries.into_iter().filter(|entry| entry.is_file()) {
            if self.rewrite_file(&entry.path, config).await? {
                rewritten.push(entry.path);
            }
        }

        debug!(files = rewritten.len(), "Import statements updated");
        Ok(rewritten)
    }

    async fn rewrite_file(
        &self,
        path: &Path,
        config: &RenameConfiguration,
    ) -> NamewrightResult<bool> {
        let rewrite_failed = |e: crate::error::NamewrightError| ApplicationError::RewriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let Some(content) = self.filesystem.read_text(path).await.map_err(rewrite_failed)? else {
            trace!(path = %path.display(), "Skipping non-text file");
            return Ok(false);
        };

        let updated = rewrite_imports(&content, config);
        if updated == content {
            return Ok(false);
        }

        self.filesystem
            .write_file(path, &updated)
            .await
            .map_err(rewrite_failed)?;
        trace!(path = %path.display(), "Rewrote imports");
        Ok(true)
    }
}
