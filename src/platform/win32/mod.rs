// ── Win32 platform implementation ─────────────────────────────────────────────
//
// This is the only module tree in the crate where `unsafe` code is permitted.
// Every `unsafe` block MUST carry a `// SAFETY:` comment that states:
//   • which invariant makes the operation sound, and
//   • what the caller is responsible for maintaining.
//
// Each helper opens at most one handle and releases it before returning.

#![allow(unsafe_code)]

use std::{ffi::OsStr, os::windows::ffi::OsStrExt, path::Path};

use windows::Win32::Foundation::GetLastError;

use crate::error::{Error, Result};

// ── Sub-modules ───────────────────────────────────────────────────────────────

pub mod directory; // GetSystemWindowsDirectoryW
pub mod file; // delete, sizes, file information
pub mod handle; // owned file/directory handle
pub mod resource; // FindResourceExW / LoadResource / LockResource

// ── Error helpers ─────────────────────────────────────────────────────────────

/// Capture the current Win32 last-error code and wrap it in an `Error`.
///
/// Call immediately after a Win32 function that signals failure — `GetLastError`
/// reads thread-local state that can be overwritten by any subsequent API call.
pub(crate) fn last_error(function: &'static str) -> Error {
    // SAFETY: GetLastError reads thread-local state set by the last Win32 call.
    // It is always safe to call and never fails.
    let code = unsafe { GetLastError() };
    Error::Win32 {
        function,
        code: code.0,
    }
}

/// Attach the failing function's name to a windows-crate error.
pub(crate) fn os_error(function: &'static str) -> impl FnOnce(windows::core::Error) -> Error {
    move |e| Error::from_hresult(function, e.code().0)
}

// ── Strings ───────────────────────────────────────────────────────────────────

/// Encode `path` as a null-terminated UTF-16 string for a `PCWSTR` argument.
///
/// Fails with `InvalidArgument` if the path contains an interior NUL, which
/// would silently truncate it on the OS side.
pub(crate) fn wide_path(path: &Path) -> Result<Vec<u16>> {
    wide_str(path.as_os_str())
}

pub(crate) fn wide_str(s: &OsStr) -> Result<Vec<u16>> {
    let mut wide: Vec<u16> = s.encode_wide().collect();
    if wide.contains(&0) {
        return Err(Error::InvalidArgument("string contains an interior NUL"));
    }
    wide.push(0);
    Ok(wide)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
