//! Naming Style Service - Main orchestrator for a renaming run.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, NoProgress, ProgressReporter},
        services::{PathPlanner, ReferenceRewriter, RouterRewriter, TreeRenamer},
    },
    domain::{ProjectLayout, RenameConfiguration, RenamePlan, RenamePlanItem},
    error::NamewrightResult,
};

/// One step of a run. Steps never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameStage {
    RenameTree { subtree: PathBuf },
    RewriteReferences { subtree: PathBuf },
    RewriteRouter { file: PathBuf },
}

impl fmt::Display for RenameStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RenameTree { subtree } => {
                write!(f, "Renaming files and folders in {}", subtree.display())
            }
            Self::RewriteReferences { subtree } => {
                write!(f, "Scanning import statements in {}", subtree.display())
            }
            Self::RewriteRouter { file } => write!(f, "Updating router imports in {}", file.display()),
        }
    }
}

/// Renames applied to one subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtreeRenames {
    pub root: PathBuf,
    pub items: Vec<RenamePlanItem>,
}

/// What a completed run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameReport {
    pub renamed: Vec<SubtreeRenames>,
    pub rewritten_files: Vec<PathBuf>,
    pub router_updated: bool,
}

impl RenameReport {
    pub fn renamed_count(&self) -> usize {
        self.renamed.iter().map(|subtree| subtree.items.len()).sum()
    }

    pub fn is_unchanged(&self) -> bool {
        self.renamed_count() == 0 && self.rewritten_files.is_empty() && !self.router_updated
    }
}

/// Orchestrates planning, renaming and reference rewriting for a project.
///
/// ## Run order
///
/// 1. Rename `src/components`
/// 2. Rename `src/setup` (or `src/views` without the setup-service convention)
/// 3. Rewrite imports under `src/components`
/// 4. Rewrite imports under the subtree of step 2
/// 5. Rewrite lazy imports in `src/router/index.ts`
///
/// Every stage finishes before the next one starts. A failing stage stops
/// the run and nothing is rolled back.
pub struct NamingStyleService {
    filesystem: Arc<dyn Filesystem>,
    planner: PathPlanner,
    renamer: TreeRenamer,
    references: ReferenceRewriter,
    router: RouterRewriter,
    progress: Arc<dyn ProgressReporter>,
}

impl NamingStyleService {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            planner: PathPlanner::new(Arc::clone(&filesystem)),
            renamer: TreeRenamer::new(Arc::clone(&filesystem)),
            references: ReferenceRewriter::new(Arc::clone(&filesystem)),
            router: RouterRewriter::new(Arc::clone(&filesystem)),
            progress: Arc::new(NoProgress),
            filesystem,
        }
    }

    /// Report stage progress to `progress` instead of discarding it.
    pub fn with_progress(mut self, progress: Arc<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    /// Check that the paths a run touches exist under the project root.
    pub async fn check_layout(
        &self,
        layout: &ProjectLayout,
        use_setup_service: bool,
    ) -> NamewrightResult<()> {
        let mut missing = Vec::new();
        for path in layout.required_paths(use_setup_service) {
            if !self.filesystem.exists(&path).await {
                missing.push(path);
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::IncompleteProject {
                root: layout.root().to_path_buf(),
                missing,
            }
            .into())
        }
    }

    /// Plan both subtrees without changing anything on disk.
    #[instrument(skip_all, fields(root = %layout.root().display()))]
    pub async fn preview(
        &self,
        layout: &ProjectLayout,
        config: &RenameConfiguration,
    ) -> NamewrightResult<Vec<RenamePlan>> {
        let mut plans = Vec::with_capacity(2);
        for subtree in layout.subtrees(config.use_setup_service) {
            plans.push(self.planner.plan(&subtree, config).await?);
        }
        Ok(plans)
    }

    /// Apply `config` to the project at `layout`.
    #[instrument(skip_all, fields(root = %layout.root().display()))]
    pub async fn run(
        &self,
        layout: &ProjectLayout,
        config: &RenameConfiguration,
    ) -> NamewrightResult<RenameReport> {
        let subtrees = layout.subtrees(config.use_setup_service);
        let mut report = RenameReport::default();

        for subtree in &subtrees {
            let stage = RenameStage::RenameTree {
                subtree: subtree.clone(),
            };
            self.progress.stage_started(&stage);

            let plan = self.planner.plan(subtree, config).await?;
            let items = self.renamer.apply(&plan).await?;

            self.progress.stage_finished(&stage, items.len());
            report.renamed.push(SubtreeRenames {
                root: subtree.clone(),
                items,
            });
        }

        for subtree in &subtrees {
            let stage = RenameStage::RewriteReferences {
                subtree: subtree.clone(),
            };
            self.progress.stage_started(&stage);

            let rewritten = self.references.rewrite_subtree(subtree, config).await?;

            self.progress.stage_finished(&stage, rewritten.len());
            report.rewritten_files.extend(rewritten);
        }

        let router_file = layout.router_file();
        let stage = RenameStage::RewriteRouter {
            file: router_file.clone(),
        };
        self.progress.stage_started(&stage);
        report.router_updated = self.router.rewrite_router_file(&router_file, config).await?;
        self.progress
            .stage_finished(&stage, usize::from(report.router_updated));

        info!(
            renamed = report.renamed_count(),
            rewritten = report.rewritten_files.len(),
            router_updated = report.router_updated,
            "Naming style applied"
        );
        Ok(report)
    }
}
