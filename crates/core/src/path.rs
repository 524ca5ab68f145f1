//! Mapping between font paths, family names and stylesheet paths.

use std::path::{Component, Path, PathBuf};

use crate::{
    config::CSS_EXTENSION,
    error::{Error, Result},
};

/// File name with exactly the last extension removed (`my.font.ttf` -> `my.font`).
pub fn family_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| Error::MalformedGroupKey { path: path.to_path_buf() })
}

/// Directory plus family name. Two paths belong to the same group iff their keys are equal.
pub fn group_key(path: &Path) -> Result<PathBuf> {
    let name = family_name(path)?;
    Ok(match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    })
}

/// Move `path` from under `src_root` to under `dst_root` and give it a `.css` extension.
///
/// Relative structure below the root is preserved. Both paths are compared after
/// [`normalize`], so `./fonts/a.ttf` and `fonts/a.ttf` are both under `./fonts`.
pub fn map_to_destination(path: &Path, src_root: &Path, dst_root: &Path) -> Result<PathBuf> {
    let normalized = normalize(path);
    let relative = normalized.strip_prefix(normalize(src_root)).map_err(|_| Error::OutsideRoot {
        path: path.to_path_buf(),
        root: src_root.to_path_buf(),
    })?;
    if relative.file_name().is_none() {
        return Err(Error::MalformedGroupKey { path: path.to_path_buf() });
    }
    Ok(dst_root.join(relative).with_extension(CSS_EXTENSION))
}

/// Lexically drop `.` components and fold `name/..` pairs.
///
/// The file system is not consulted, so symlinks are not resolved. A `..` with
/// nothing left to fold is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

/// Lower-cased final extension, or an empty string when there is none.
pub(crate) fn extension(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}
