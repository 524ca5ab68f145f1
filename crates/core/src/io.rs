//! File discovery and storage used by the pipelines.

use std::{
    collections::HashSet,
    fs::{create_dir_all, read, write},
    path::{Path, PathBuf},
};

use glob::{MatchOptions, glob_with};

use crate::{
    error::{Error, Result},
    path::normalize,
};

/// Finds files under a directory by extension.
pub trait Discovery: Sync {
    /// Regular files below `root` (recursively) whose extension is one of `extensions`,
    /// compared case-insensitively.
    ///
    /// Results are grouped by extension in the order given, sorted within each
    /// extension, and free of duplicates. Every result starts with `root` as given.
    fn find(&self, root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>>;
}

/// Reads and writes whole files.
pub trait Storage: Sync {
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Write `data` to `path`, creating parent directories as needed.
    fn write(&self, path: &Path, data: &[u8]) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;
}

/// The local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl Discovery for FileSystem {
    fn find(&self, root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
        let options = MatchOptions { case_sensitive: false, ..MatchOptions::new() };
        let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
        let normalized_root = normalize(root);

        let mut seen = HashSet::new();
        let mut paths = Vec::new();
        for ext in extensions {
            let pattern = format!("{escaped_root}/**/*.{}", glob::Pattern::escape(ext));
            let entries = glob_with(&pattern, options)
                .map_err(|source| Error::Pattern { pattern: pattern.clone(), source })?;

            let mut matched = Vec::new();
            for entry in entries {
                let path = rebase(entry?, root, &normalized_root);
                if path.is_file() && !seen.contains(&path) {
                    matched.push(path);
                }
            }
            matched.sort();
            seen.extend(matched.iter().cloned());
            paths.append(&mut matched);
        }

        Ok(paths)
    }
}

/// `glob` drops `.` components from its matches; put the caller's root back in front.
fn rebase(path: PathBuf, root: &Path, normalized_root: &Path) -> PathBuf {
    match normalize(&path).strip_prefix(normalized_root) {
        Ok(tail) => root.join(tail),
        Err(_) => path,
    }
}

impl Storage for FileSystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        read(path).map_err(|source| Error::Read { path: path.to_path_buf(), source })
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)
                    .map_err(|source| Error::Write { path: path.to_path_buf(), source })?;
            }
        }
        write(path, data).map_err(|source| Error::Write { path: path.to_path_buf(), source })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
