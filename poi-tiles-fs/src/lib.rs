//! Shared filesystem helpers built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a UTF-8 file path for reading using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create (or truncate) the file at `path` for writing.
///
/// The parent directory must already exist.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.create(name.as_str())
}

/// Resolve an ambient directory for the given path and return the directory with the file name.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Create `path` and any missing ancestors. Existing directories are left alone.
///
/// The deepest existing ancestor is opened with ambient authority, so
/// symlinks above the first missing component resolve as usual. Only the
/// missing suffix is created through the capability.
pub fn ensure_dir(path: &Utf8Path) -> io::Result<()> {
    if path.as_str().is_empty() {
        return Ok(());
    }
    let (base, relative) = existing_ancestor(path)?;
    let dir = fs_utf8::Dir::open_ambient_dir(base, ambient_authority())?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    dir.create_dir_all(relative)
}

/// Split `path` into its deepest existing ancestor and the missing remainder.
///
/// A relative path with no existing ancestor is anchored at `.`.
pub fn existing_ancestor(path: &Utf8Path) -> io::Result<(&Utf8Path, &Utf8Path)> {
    for ancestor in path.ancestors() {
        let base = if ancestor.as_str().is_empty() {
            Utf8Path::new(".")
        } else if ancestor.exists() {
            ancestor
        } else {
            continue;
        };
        let relative = path
            .strip_prefix(ancestor)
            .map_err(|_| io::Error::other("failed to split path at an existing ancestor"))?;
        return Ok((base, relative));
    }
    Err(io::Error::other("path has no existing ancestor"))
}
