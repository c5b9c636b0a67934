//! Tree Renamer - executes a rename plan against the filesystem.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{RenamePlan, RenamePlanItem},
    error::{NamewrightError, NamewrightResult},
};

pub struct TreeRenamer {
    filesystem: Arc<dyn Filesystem>,
}

impl TreeRenamer {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Rename every pending entry of `plan`.
    ///
    /// Batches from [`RenamePlan::batches`] run one after the other; the
    /// renames inside a batch run concurrently. When a rename fails, the
    /// rest of its batch is awaited, later batches are skipped and the first
    /// failure is returned. Renames that already happened are not undone.
    ///
    /// Returns the items that were renamed.
    #[instrument(skip_all, fields(root = %plan.root().display(), pending = plan.pending_count()))]
    pub async fn apply(&self, plan: &RenamePlan) -> NamewrightResult<Vec<RenamePlanItem>> {
        let mut renamed = Vec::with_capacity(plan.pending_count());

        for (index, batch) in plan.batches().into_iter().enumerate() {
            debug!(batch = index, size = batch.len(), "Renaming batch");

            let mut tasks = JoinSet::new();
            for item in batch {
                let filesystem = Arc::clone(&self.filesystem);
                let item = item.clone();
                tasks.spawn(async move {
                    let result = filesystem.rename(&item.old_path, &item.new_path).await;
                    (item, result)
                });
            }

            let mut first_error: Option<NamewrightError> = None;
            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok((item, Ok(()))) => {
                        debug!(from = %item.old_path.display(), to = %item.new_path.display(), "Renamed");
                        renamed.push(item);
                    }
                    Ok((item, Err(e))) => {
                        warn!(from = %item.old_path.display(), error = %e, "Rename failed");
                        first_error.get_or_insert_with(|| {
                            ApplicationError::RenameFailed {
                                from: item.old_path.clone(),
                                to: item.new_path.clone(),
                                reason: e.to_string(),
                            }
                            .into()
                        });
                    }
                    Err(join_error) => {
                        first_error.get_or_insert_with(|| {
                            ApplicationError::TaskFailed {
                                reason: join_error.to_string(),
                            }
                            .into()
                        });
                    }
                }
            }

            if let Some(error) = first_error {
                return Err(error);
            }
        }

        Ok(renamed)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use mockall::predicate::eq;

    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{DirectoryEntry, NamingStyle, RenameConfiguration};

    fn config() -> RenameConfiguration {
        RenameConfiguration {
            file_naming_style: NamingStyle::PascalCase,
            folder_naming_style: NamingStyle::KebabCase,
            use_setup_service: true,
        }
    }

    fn plan() -> RenamePlan {
        RenamePlan::from_entries(
            "/r",
            [
                DirectoryEntry::directory("/r/UserProfile"),
                DirectoryEntry::file("/r/UserProfile/userCard.vue"),
                DirectoryEntry::file("/r/Button.vue"),
            ],
            &config(),
        )
    }

    #[tokio::test]
    async fn noop_items_are_never_renamed() {
        let mut fs = MockFilesystem::new();
        fs.expect_rename()
            .with(eq(Path::new("/r/Button.vue")), eq(Path::new("/r/Button.vue")))
            .never();
        fs.expect_rename().times(2).returning(|_, _| Ok(()));

        let renamer = TreeRenamer::new(Arc::new(fs));
        let renamed = renamer.apply(&plan()).await.unwrap();

        assert_eq!(renamed.len(), 2);
        assert!(renamed.iter().all(|item| !item.is_noop()));
    }

    #[tokio::test]
    async fn files_are_renamed_before_their_parent_directory() {
        let calls = Arc::new(Mutex::new(Vec::<PathBuf>::new()));
        let recorded = Arc::clone(&calls);

        let mut fs = MockFilesystem::new();
        fs.expect_rename().returning(move |from, _| {
            recorded.lock().unwrap().push(from.to_path_buf());
            Ok(())
        });

        TreeRenamer::new(Arc::new(fs)).apply(&plan()).await.unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                PathBuf::from("/r/UserProfile/userCard.vue"),
                PathBuf::from("/r/UserProfile"),
            ]
        );
    }

    #[tokio::test]
    async fn failure_stops_before_the_next_batch() {
        let mut fs = MockFilesystem::new();
        fs.expect_rename()
            .with(
                eq(Path::new("/r/UserProfile/userCard.vue")),
                eq(Path::new("/r/UserProfile/UserCard.vue")),
            )
            .returning(|from, _| {
                Err(ApplicationError::FilesystemError {
                    path: from.to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into())
            });
        fs.expect_rename()
            .with(eq(Path::new("/r/UserProfile")), eq(Path::new("/r/user-profile")))
            .never();

        let err = TreeRenamer::new(Arc::new(fs))
            .apply(&plan())
            .await
            .unwrap_err();

        match err {
            NamewrightError::Application(ApplicationError::RenameFailed { from, to, .. }) => {
                assert_eq!(from, PathBuf::from("/r/UserProfile/userCard.vue"));
                assert_eq!(to, PathBuf::from("/r/UserProfile/UserCard.vue"));
            }
            other => panic!("expected RenameFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_plan_touches_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_rename().never();

        let renamed = TreeRenamer::new(Arc::new(fs))
            .apply(&RenamePlan::new("/r", Vec::new()))
            .await
            .unwrap();
        assert!(renamed.is_empty());
    }
}
