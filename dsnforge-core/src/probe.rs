//! Path existence checks.

use std::collections::HashSet;
use std::path::Path;

/// Answers whether a user-supplied path exists.
pub trait PathProbe: Send + Sync {
    /// Check whether `path` exists.
    fn exists(&self, path: &str) -> bool;
}

/// Default probe backed by the local filesystem.
///
/// A path counts only when it names a regular file (symlinks followed).
/// Readability and permissions are not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }
}

/// Probe backed by a fixed set of paths.
#[derive(Debug, Clone, Default)]
pub struct MapPathProbe {
    paths: HashSet<String>,
}

impl MapPathProbe {
    /// Create an empty probe. Nothing exists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a path as existing.
    pub fn with(mut self, path: impl Into<String>) -> Self {
        self.paths.insert(path.into());
        self
    }

    /// Mark several paths as existing.
    pub fn with_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }
}

impl PathProbe for MapPathProbe {
    fn exists(&self, path: &str) -> bool {
        self.paths.contains(path)
    }
}

impl<F> PathProbe for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}
