//! Router Rewriter - updates lazy component imports in the router module.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{RenameConfiguration, rewrite_lazy_imports},
    error::NamewrightResult,
};

pub struct RouterRewriter {
    filesystem: Arc<dyn Filesystem>,
}

impl RouterRewriter {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Rewrite every `import('@/components/….vue')` in the router file.
    ///
    /// Returns whether the file changed. An unchanged router is not written.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub async fn rewrite_router_file(
        &self,
        path: &Path,
        config: &RenameConfiguration,
    ) -> NamewrightResult<bool> {
        let failed = |reason: String| ApplicationError::RewriteFailed {
            path: path.to_path_buf(),
            reason,
        };

        let content = self
            .filesystem
            .read_text(path)
            .await
            .map_err(|e| failed(e.to_string()))?
            .ok_or_else(|| failed("router file is not a regular UTF-8 text file".into()))?;

        let updated = rewrite_lazy_imports(&content, config);
        if updated == content {
            debug!("Router already up to date");
            return Ok(false);
        }

        self.filesystem
            .write_file(path, &updated)
            .await
            .map_err(|e| failed(e.to_string()))?;
        debug!("Router lazy imports updated");
        Ok(true)
    }
}
