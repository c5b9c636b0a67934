//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;

use namewright_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::DirectoryEntry,
    error::NamewrightResult,
};

/// In-memory filesystem for testing.
///
/// Files hold raw bytes so non-UTF-8 content can be modelled. Every rename
/// is recorded and available through [`MemoryFilesystem::renames`].
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    renames: Vec<(PathBuf, PathBuf)>,
}

impl MemoryFilesystemInner {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }

    fn add_parents(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.directories.insert(ancestor.to_path_buf());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    fn read_lock(&self) -> NamewrightResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        Ok(self.inner.read().map_err(|_| ApplicationError::LockPoisoned)?)
    }

    fn write_lock(&self) -> NamewrightResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        Ok(self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?)
    }

    /// Add a text file, creating its parent directories (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.add_bytes(path, content.as_bytes());
    }

    /// Add a file with arbitrary bytes (testing helper).
    pub fn add_bytes(&self, path: impl AsRef<Path>, content: &[u8]) {
        let path = path.as_ref();
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.add_parents(path);
        inner.files.insert(path.to_path_buf(), content.to_vec());
    }

    /// Add a directory and its ancestors (testing helper).
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.add_parents(path);
        inner.directories.insert(path.to_path_buf());
    }

    /// Read a file's content as text (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner
            .files
            .get(path)
            .and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.files.keys().cloned().collect()
    }

    /// List all directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.directories.iter().cloned().collect()
    }

    /// Every rename performed so far, in call order.
    pub fn renames(&self) -> Vec<(PathBuf, PathBuf)> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.renames.clone()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.files.clear();
        inner.directories.clear();
        inner.renames.clear();
    }
}

#[async_trait]
impl Filesystem for MemoryFilesystem {
    async fn walk(&self, root: &Path) -> NamewrightResult<Vec<DirectoryEntry>> {
        let inner = self.read_lock()?;

        if !inner.directories.contains(root) {
            return Err(ApplicationError::FilesystemError {
                path: root.to_path_buf(),
                reason: "Directory does not exist".into(),
            }
            .into());
        }

        let below = |path: &&PathBuf| path.starts_with(root) && path.as_path() != root;
        let directories = inner
            .directories
            .iter()
            .filter(below)
            .map(|path| DirectoryEntry::directory(path.clone()));
        let files = inner
            .files
            .keys()
            .filter(below)
            .map(|path| DirectoryEntry::file(path.clone()));

        Ok(directories.chain(files).collect())
    }

    async fn rename(&self, from: &Path, to: &Path) -> NamewrightResult<()> {
        let mut inner = self.write_lock()?;

        if !inner.exists(from) {
            return Err(ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "Source does not exist".into(),
            }
            .into());
        }
        if inner.exists(to) {
            return Err(ApplicationError::FilesystemError {
                path: to.to_path_buf(),
                reason: "Destination already exists".into(),
            }
            .into());
        }
        if to
            .parent()
            .is_some_and(|parent| !parent.as_os_str().is_empty() && !inner.directories.contains(parent))
        {
            return Err(ApplicationError::FilesystemError {
                path: to.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        let moved = |path: &Path| match path.strip_prefix(from) {
            Ok(rest) if rest.as_os_str().is_empty() => Some(to.to_path_buf()),
            Ok(rest) => Some(to.join(rest)),
            Err(_) => None,
        };

        let directories = std::mem::take(&mut inner.directories);
        inner.directories = directories
            .into_iter()
            .map(|path| moved(path.as_path()).unwrap_or(path))
            .collect();

        let files = std::mem::take(&mut inner.files);
        inner.files = files
            .into_iter()
            .map(|(path, content)| (moved(path.as_path()).unwrap_or(path), content))
            .collect();

        inner.renames.push((from.to_path_buf(), to.to_path_buf()));
        Ok(())
    }

    async fn read_text(&self, path: &Path) -> NamewrightResult<Option<String>> {
        let inner = self.read_lock()?;
        let bytes = inner
            .files
            .get(path)
            .ok_or_else(|| ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            })?;
        Ok(String::from_utf8(bytes.clone()).ok())
    }

    async fn write_file(&self, path: &Path, content: &str) -> NamewrightResult<()> {
        let mut inner = self.write_lock()?;

        // Ensure parent exists
        if path
            .parent()
            .is_some_and(|parent| !parent.as_os_str().is_empty() && !inner.directories.contains(parent))
        {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        inner
            .files
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.exists(path))
            .unwrap_or(false)
    }
}
