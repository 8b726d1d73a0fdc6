// ── System directories ────────────────────────────────────────────────────────

#![allow(unsafe_code)]

use std::{ffi::OsString, os::windows::ffi::OsStringExt, path::PathBuf};

use log::debug;
use windows::Win32::System::SystemInformation::GetSystemWindowsDirectoryW;

use super::last_error;
use crate::{error::Result, platform::checked_fill_len};

/// Path of the shared Windows directory on a multi-user system (typically
/// `C:\Windows`), as opposed to a per-user Windows directory under Terminal
/// Services.
///
/// Either the full path is returned or an error; never a truncated path.
pub fn windows_directory() -> Result<PathBuf> {
    // SAFETY: a `None` buffer only asks for the required length, including
    // the null terminator.
    let required = unsafe { GetSystemWindowsDirectoryW(None) };
    if required == 0 {
        return Err(last_error("GetSystemWindowsDirectoryW"));
    }

    let mut buf = vec![0u16; required as usize];

    // SAFETY: `buf` is writable and its length is passed along with it.  On
    // success the return value is the number of characters written, not
    // counting the terminator.
    let written = unsafe { GetSystemWindowsDirectoryW(Some(&mut buf)) };
    if written == 0 {
        return Err(last_error("GetSystemWindowsDirectoryW"));
    }
    let len = checked_fill_len("GetSystemWindowsDirectoryW", required, written)?;

    buf.truncate(len);
    let path = PathBuf::from(OsString::from_wide(&buf));
    debug!("system Windows directory: {}", path.display());
    Ok(path)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
