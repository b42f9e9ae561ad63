//! Storage locations.
//!
//! Everything lql persists lives under a single root, `<home>/.lql`. The home
//! directory is passed in rather than looked up here so tests can point the
//! store at a temporary directory.

use crate::error::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const STORE_DIRNAME: &str = ".lql";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    home: PathBuf,
}

impl StoragePaths {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn root_path(&self) -> PathBuf {
        self.home.join(STORE_DIRNAME)
    }

    /// Path of a category directory. The name is used verbatim.
    pub fn category_path(&self, category: &str) -> PathBuf {
        self.root_path().join(category)
    }

    pub fn ensure_root(&self) -> Result<PathBuf> {
        let root = self.root_path();
        ensure_directory(&root)?;
        Ok(root)
    }

    pub fn ensure_category(&self, category: &str) -> Result<PathBuf> {
        self.ensure_root()?;
        let path = self.category_path(category);
        ensure_directory(&path)?;
        Ok(path)
    }
}

/// Creates `path` with owner-only permissions unless something already
/// exists there.
///
/// Anything already at `path`, whatever its type, counts as done. Losing a
/// creation race is also fine; every other failure is returned.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if fs::symlink_metadata(path).is_ok() {
        return Ok(());
    }

    match create_private_dir(path) {
        Ok(()) => {
            log::debug!("created directory {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(unix)]
fn create_private_dir(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().mode(0o700).create(path)
}

#[cfg(not(unix))]
fn create_private_dir(path: &Path) -> io::Result<()> {
    fs::DirBuilder::new().create(path)
}
