//! Grouping of font files into families.

use std::path::PathBuf;

use indexmap::{IndexMap, map::Entry};

use crate::{
    error::Result,
    path::{family_name, group_key},
    record::{FileRecord, FontGroup},
};

/// Group font files by [`group_key`] in a single pass.
///
/// Groups appear in the order their first member was seen, and members keep
/// their arrival order within a group.
pub fn group(files: Vec<FileRecord>) -> Result<Vec<FontGroup>> {
    let mut groups: IndexMap<PathBuf, FontGroup> = IndexMap::with_capacity(files.len());

    for file in files {
        let key = group_key(file.path())?;
        match groups.entry(key) {
            Entry::Occupied(mut entry) => entry.get_mut().push(file),
            Entry::Vacant(entry) => {
                let name = family_name(file.path())?;
                entry.insert(FontGroup::new(name, file));
            }
        }
    }

    Ok(groups.into_values().collect())
}
