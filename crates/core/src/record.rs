//! In-memory file records and font groups.

use std::path::{Path, PathBuf};

/// A file path together with its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    path: PathBuf,
    data: Vec<u8>,
}

/// A rendered stylesheet, ready to be written.
pub type CssFragment = FileRecord;

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        Self { path: path.into(), data: data.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Contents decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

/// Font files sharing one directory and base name, rendered as a single `@font-face` rule.
///
/// Members keep the order in which they were discovered; that order becomes the
/// `src:` fallback order in the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontGroup {
    family_name: String,
    members: Vec<FileRecord>,
}

impl FontGroup {
    pub(crate) fn new(family_name: String, first: FileRecord) -> Self {
        Self { family_name, members: vec![first] }
    }

    pub(crate) fn push(&mut self, record: FileRecord) {
        self.members.push(record);
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Never empty.
    pub fn members(&self) -> &[FileRecord] {
        &self.members
    }

    /// Path of the first discovered member.
    pub fn lead_path(&self) -> &Path {
        self.members[0].path()
    }
}
