//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use layercake_core::{
    application::{ApplicationError, ports::Filesystem},
    error::LayercakeResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle while the service owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    /// Paths whose writes fail, for rollback tests.
    failing: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (and its parent directories).
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                add_dirs(&mut inner, parent);
            }
            inner.files.insert(path, content.into());
        }
        self
    }

    /// Make every later write to `path` fail.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.insert(path.into());
        }
    }

    /// A file's content (testing helper).
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.clear();
            inner.directories.clear();
            inner.failing.clear();
        }
    }

    fn read(&self) -> LayercakeResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }

    fn write(&self) -> LayercakeResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }
}

fn add_dirs(inner: &mut MemoryFilesystemInner, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        inner.directories.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> LayercakeResult<()> {
        add_dirs(&mut *self.write()?, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> LayercakeResult<()> {
        let mut inner = self.write()?;

        if inner.failing.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Injected write failure".into(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> LayercakeResult<Option<String>> {
        Ok(self.read()?.files.get(path).cloned())
    }

    fn remove_file(&self, path: &Path) -> LayercakeResult<()> {
        match self.write()?.files.remove(path) {
            Some(_) => Ok(()),
            None => Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/p/src/a.rs"), "x").is_err());
        fs.create_dir_all(Path::new("/p/src")).unwrap();
        fs.write_file(Path::new("/p/src/a.rs"), "x").unwrap();
        assert_eq!(fs.contents("/p/src/a.rs").as_deref(), Some("x"));
        fs.write_file(Path::new("/p/b.rs"), "y").unwrap();
    }

    #[test]
    fn seeded_files_are_shared_between_clones() {
        let fs = MemoryFilesystem::new().with_file("/p/src/lib.rs", "// lib\n");
        let handle = fs.clone();
        fs.remove_file(Path::new("/p/src/lib.rs")).unwrap();
        assert_eq!(handle.read_file(Path::new("/p/src/lib.rs")).unwrap(), None);
        assert!(handle.remove_file(Path::new("/p/src/lib.rs")).is_err());
    }

    #[test]
    fn injected_failures_hit_only_their_path() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.fail_writes_to("/p/b.rs");
        fs.write_file(Path::new("/p/a.rs"), "a").unwrap();
        assert!(fs.write_file(Path::new("/p/b.rs"), "b").is_err());
        assert_eq!(fs.list_files(), vec![PathBuf::from("/p/a.rs")]);
    }
}
