// ── Path-based file helpers ───────────────────────────────────────────────────
//
// Open, query or mark, close.  The handle is a `FileHandle`, so it is released
// on every return path without explicit cleanup code.

use std::path::Path;

use log::debug;

use super::handle::FileHandle;
use crate::{delete::mark_with_restore, error::Result, info::FileInfo};

/// Delete a file or an empty directory.
///
/// With `force`, a read-only entry is unprotected first; if the deletion then
/// fails, its original attributes are put back before the handle is closed.
/// The returned error is always the deletion's own.  Without `force`, a
/// read-only entry fails with access denied and is left untouched.
///
/// Symbolic links and junctions are deleted themselves, never their targets.
pub fn delete_file(path: &Path, force: bool) -> Result<()> {
    let mut handle = FileHandle::open_for_delete(path)?;
    mark_with_restore(&mut handle, force)?;
    debug!("marked {} for deletion (force = {force})", path.display());
    Ok(())
}

/// Bytes allocated on the volume for `path`.
pub fn file_allocation_size(path: &Path) -> Result<u64> {
    let info = FileHandle::open_for_query(path)?.standard_info()?;
    Ok(info.AllocationSize as u64)
}

/// Logical size of `path` in bytes.
pub fn file_size(path: &Path) -> Result<u64> {
    let info = FileHandle::open_for_query(path)?.standard_info()?;
    Ok(info.EndOfFile as u64)
}

/// Attributes, sizes and link count of `path`, read through one handle.
pub fn file_info(path: &Path) -> Result<FileInfo> {
    let handle = FileHandle::open_for_query(path)?;
    let attributes = handle.attributes()?;
    let standard = handle.standard_info()?;
    let directory: bool = standard.Directory.into();

    Ok(FileInfo {
        attributes,
        allocation_size: standard.AllocationSize as u64,
        size: standard.EndOfFile as u64,
        links: standard.NumberOfLinks,
        directory,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
