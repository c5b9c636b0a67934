//! Fixed locations inside a front-end project.

use std::path::{Path, PathBuf};

/// A project root and the well-known paths derived from it.
///
/// Every path handed to the services is built from here, so nothing depends
/// on the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub const COMPONENTS_DIR: &'static str = "src/components";
    pub const SETUP_DIR: &'static str = "src/setup";
    pub const VIEWS_DIR: &'static str = "src/views";
    pub const ROUTER_FILE: &'static str = "src/router/index.ts";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    pub fn package_json(&self) -> PathBuf {
        self.root.join("package.json")
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join(Self::COMPONENTS_DIR)
    }

    pub fn setup_dir(&self) -> PathBuf {
        self.root.join(Self::SETUP_DIR)
    }

    pub fn views_dir(&self) -> PathBuf {
        self.root.join(Self::VIEWS_DIR)
    }

    pub fn router_file(&self) -> PathBuf {
        self.root.join(Self::ROUTER_FILE)
    }

    /// `src/setup` when the setup-service convention is on, `src/views` otherwise.
    pub fn service_dir(&self, use_setup_service: bool) -> PathBuf {
        if use_setup_service {
            self.setup_dir()
        } else {
            self.views_dir()
        }
    }

    /// Subtrees touched by a run, in processing order.
    pub fn subtrees(&self, use_setup_service: bool) -> [PathBuf; 2] {
        [self.components_dir(), self.service_dir(use_setup_service)]
    }

    /// Paths a run expects to exist, for callers that want to validate up front.
    pub fn required_paths(&self, use_setup_service: bool) -> Vec<PathBuf> {
        vec![
            self.package_json(),
            self.src_dir(),
            self.components_dir(),
            self.service_dir(use_setup_service),
            self.router_file(),
        ]
    }
}
