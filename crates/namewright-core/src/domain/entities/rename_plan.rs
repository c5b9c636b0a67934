//! Rename plans: old path → new path mappings for one subtree.
//!
//! A plan is computed entirely from the original tree before anything is
//! renamed. Executing it safely only requires the order given by
//! [`execution_cmp`]: files first, then directories deepest-first, so no
//! entry is ever addressed through a parent that was already renamed.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{config::RenameConfiguration, error::DomainError, naming::format_name};

/// Kind of a file-system entry. Symlinks count as files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// An entry read from disk at planning time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// One planned rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamePlanItem {
    pub entry: DirectoryEntry,
    pub old_path: PathBuf,
    pub new_path: PathBuf,
}

impl RenamePlanItem {
    /// Compute the rename for `entry`. The new path only depends on the
    /// entry's own path and the configuration.
    ///
    /// Names that are not valid UTF-8 are kept as they are.
    pub fn for_entry(entry: DirectoryEntry, config: &RenameConfiguration) -> Self {
        let old_path = entry.path.clone();
        let style = config.style_for(entry.is_dir());

        let new_path = match (old_path.parent(), old_path.file_name().and_then(|n| n.to_str())) {
            (Some(parent), Some(name)) => parent.join(format_name(name, style)),
            _ => old_path.clone(),
        };

        Self {
            entry,
            old_path,
            new_path,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.old_path == self.new_path
    }

    /// Nesting depth of the old path, in path components.
    pub fn depth(&self) -> usize {
        self.old_path.components().count()
    }
}

/// Total order in which plan items must be executed.
///
/// Composite key, highest priority first: files before directories, deeper
/// before shallower, then reverse lexical order of the old path.
pub fn execution_cmp(a: &RenamePlanItem, b: &RenamePlanItem) -> Ordering {
    b.entry
        .is_file()
        .cmp(&a.entry.is_file())
        .then_with(|| b.depth().cmp(&a.depth()))
        .then_with(|| b.old_path.as_os_str().cmp(a.old_path.as_os_str()))
}

/// Every rename planned for one subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamePlan {
    root: PathBuf,
    items: Vec<RenamePlanItem>,
}

impl RenamePlan {
    pub fn new(root: impl Into<PathBuf>, items: Vec<RenamePlanItem>) -> Self {
        Self {
            root: root.into(),
            items,
        }
    }

    /// Build a plan from the entries listed under `root`.
    pub fn from_entries(
        root: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = DirectoryEntry>,
        config: &RenameConfiguration,
    ) -> Self {
        let items = entries
            .into_iter()
            .map(|entry| RenamePlanItem::for_entry(entry, config))
            .collect();
        Self::new(root, items)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn items(&self) -> &[RenamePlanItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items that actually change a path.
    pub fn pending(&self) -> impl Iterator<Item = &RenamePlanItem> {
        self.items.iter().filter(|item| !item.is_noop())
    }

    pub fn pending_count(&self) -> usize {
        self.pending().count()
    }

    /// Pending items sorted with [`execution_cmp`].
    pub fn execution_order(&self) -> Vec<&RenamePlanItem> {
        let mut ordered: Vec<_> = self.pending().collect();
        ordered.sort_by(|a, b| execution_cmp(a, b));
        ordered
    }

    /// Pending items grouped into batches that can run concurrently.
    ///
    /// All files form the first batch (renaming a file never changes another
    /// entry's path). Directories follow in one batch per depth, deepest
    /// first: directories at the same depth are never nested in each other.
    /// Batches must run one after the other.
    pub fn batches(&self) -> Vec<Vec<&RenamePlanItem>> {
        let mut batches: Vec<Vec<&RenamePlanItem>> = Vec::new();
        let mut current_key = None;

        for item in self.execution_order() {
            let key = match item.entry.kind {
                EntryKind::File => (EntryKind::File, 0),
                EntryKind::Directory => (EntryKind::Directory, item.depth()),
            };

            match batches.last_mut() {
                Some(batch) if current_key == Some(key) => batch.push(item),
                _ => {
                    batches.push(vec![item]);
                    current_key = Some(key);
                }
            }
        }

        batches
    }

    /// Reject plans where two entries would end up at the same path.
    ///
    /// Catches both distinct entries formatting to the same new path and an
    /// entry renamed onto a path that another entry currently occupies.
    pub fn check_collisions(&self) -> Result<(), DomainError> {
        let mut targets: BTreeMap<&Path, Vec<&Path>> = BTreeMap::new();
        for item in &self.items {
            targets
                .entry(item.new_path.as_path())
                .or_default()
                .push(item.old_path.as_path());
        }

        if let Some((target, sources)) = targets.iter().find(|(_, sources)| sources.len() > 1) {
            return Err(collision(target, sources));
        }

        let occupied: HashSet<&Path> = self.items.iter().map(|i| i.old_path.as_path()).collect();
        let mut pending: Vec<_> = self.pending().collect();
        pending.sort_by(|a, b| a.old_path.cmp(&b.old_path));

        for item in pending {
            if occupied.contains(item.new_path.as_path()) {
                return Err(collision(
                    &item.new_path,
                    &[item.old_path.as_path(), item.new_path.as_path()],
                ));
            }
        }

        Ok(())
    }
}

fn collision(target: &Path, sources: &[&Path]) -> DomainError {
    DomainError::PathCollision {
        target: target.to_path_buf(),
        sources: sources.iter().map(|p| p.to_path_buf()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::naming::NamingStyle;

    fn config() -> RenameConfiguration {
        RenameConfiguration {
            file_naming_style: NamingStyle::PascalCase,
            folder_naming_style: NamingStyle::KebabCase,
            use_setup_service: true,
        }
    }

    fn sample_plan() -> RenamePlan {
        RenamePlan::from_entries(
            "/p/src/components",
            [
                DirectoryEntry::directory("/p/src/components/UserProfile"),
                DirectoryEntry::file("/p/src/components/UserProfile/userCard.vue"),
                DirectoryEntry::directory("/p/src/components/UserProfile/AvatarGroup"),
                DirectoryEntry::file("/p/src/components/UserProfile/AvatarGroup/avatar.vue"),
                DirectoryEntry::file("/p/src/components/AppHeader.vue"),
                DirectoryEntry::directory("/p/src/components/shared"),
            ],
            &config(),
        )
    }

    #[test]
    fn items_compute_new_path_from_old_parent() {
        let plan = sample_plan();
        let item = plan
            .items()
            .iter()
            .find(|i| i.old_path.ends_with("avatar.vue"))
            .unwrap();

        // Parent keeps its *old* name; the parent is renamed separately.
        assert_eq!(
            item.new_path,
            PathBuf::from("/p/src/components/UserProfile/AvatarGroup/Avatar.vue")
        );
    }

    #[test]
    fn plan_keeps_one_item_per_entry_including_noops() {
        let plan = sample_plan();
        assert_eq!(plan.len(), 6);
        assert_eq!(plan.pending_count(), 4);

        let unique: HashSet<_> = plan.items().iter().map(|i| &i.old_path).collect();
        assert_eq!(unique.len(), plan.len());
    }

    #[test]
    fn execution_order_puts_files_first_then_deepest_directories() {
        let plan = sample_plan();
        let order: Vec<_> = plan
            .execution_order()
            .into_iter()
            .map(|i| i.old_path.to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            order,
            vec![
                "/p/src/components/UserProfile/AvatarGroup/avatar.vue",
                "/p/src/components/UserProfile/userCard.vue",
                "/p/src/components/UserProfile/AvatarGroup",
                "/p/src/components/UserProfile",
            ]
        );
    }

    #[test]
    fn ties_break_on_reverse_path_order() {
        let a = RenamePlanItem::for_entry(DirectoryEntry::file("/r/a.vue"), &config());
        let b = RenamePlanItem::for_entry(DirectoryEntry::file("/r/b.vue"), &config());
        assert_eq!(execution_cmp(&a, &b), Ordering::Greater);
        assert_eq!(execution_cmp(&b, &a), Ordering::Less);
    }

    #[test]
    fn batches_group_files_then_each_directory_depth() {
        let plan = sample_plan();
        let batches = plan.batches();

        assert_eq!(batches.len(), 3);
        assert!(batches[0].iter().all(|i| i.entry.is_file()));
        assert_eq!(batches[0].len(), 2);
        assert!(batches[1].iter().all(|i| i.old_path.ends_with("AvatarGroup")));
        assert!(batches[2].iter().all(|i| i.old_path.ends_with("UserProfile")));
    }

    #[test]
    fn noop_plan_has_no_batches() {
        let plan = RenamePlan::from_entries(
            "/r",
            [DirectoryEntry::file("/r/UserCard.vue"), DirectoryEntry::directory("/r/shared")],
            &config(),
        );
        assert!(plan.batches().is_empty());
    }

    #[test]
    fn distinct_entries_formatting_to_same_name_collide() {
        let plan = RenamePlan::from_entries(
            "/r",
            [
                DirectoryEntry::file("/r/user-card.vue"),
                DirectoryEntry::file("/r/userCard.vue"),
            ],
            &config(),
        );

        match plan.check_collisions() {
            Err(DomainError::PathCollision { target, sources }) => {
                assert_eq!(target, PathBuf::from("/r/UserCard.vue"));
                assert_eq!(sources.len(), 2);
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn clean_plan_has_no_collisions() {
        assert!(sample_plan().check_collisions().is_ok());
    }
}
