//! Path Planner - builds the rename plan of one subtree.
//!
//! Planning only reads. The whole subtree is listed from its original state
//! before anything is renamed, so the plan never sees a half-renamed tree.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainError, RenameConfiguration, RenamePlan},
    error::NamewrightResult,
};

pub struct PathPlanner {
    filesystem: Arc<dyn Filesystem>,
}

impl PathPlanner {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Plan a rename for every entry under `root`.
    ///
    /// The plan holds one item per entry, no-ops included. Fails before any
    /// mutation when the subtree cannot be listed or two entries would
    /// collide.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub async fn plan(
        &self,
        root: &Path,
        config: &RenameConfiguration,
    ) -> NamewrightResult<RenamePlan> {
        let entries =
            self.filesystem
                .walk(root)
                .await
                .map_err(|e| ApplicationError::PlanningFailed {
                    root: root.to_path_buf(),
                    reason: e.to_string(),
                })?;

        if let Some(stray) = entries
            .iter()
            .find(|entry| entry.path == root || !entry.path.starts_with(root))
        {
            return Err(DomainError::PathOutsideSubtree {
                path: stray.path.clone(),
                root: root.to_path_buf(),
            }
            .into());
        }

        let plan = RenamePlan::from_entries(root, entries, config);
        plan.check_collisions()?;

        debug!(
            entries = plan.len(),
            pending = plan.pending_count(),
            "Rename plan built"
        );
        Ok(plan)
    }
}
