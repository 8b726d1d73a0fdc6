// ── Owned file handle ─────────────────────────────────────────────────────────
//
// `FileHandle` owns one `CreateFileW` handle and closes it on `Drop`, so every
// exit path of a helper (success, early `?`, late failure) releases it.
//
// Both open modes resolve the literal path: `FILE_FLAG_OPEN_REPARSE_POINT`
// opens a symlink or junction itself rather than its target, and
// `FILE_FLAG_BACKUP_SEMANTICS` lets the same call open directories.

#![allow(unsafe_code)]

use std::{ffi::c_void, mem::size_of, path::Path};

use log::debug;
use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{CloseHandle, HANDLE},
        Storage::FileSystem::{
            CreateFileW, FileBasicInfo, FileDispositionInfo, FileStandardInfo,
            GetFileInformationByHandleEx, SetFileInformationByHandle, FILE_BASIC_INFO,
            FILE_DISPOSITION_INFO, FILE_FLAG_BACKUP_SEMANTICS, FILE_FLAG_OPEN_REPARSE_POINT,
            FILE_SHARE_DELETE, FILE_SHARE_MODE, FILE_SHARE_READ, FILE_SHARE_WRITE,
            FILE_STANDARD_INFO, OPEN_EXISTING,
        },
    },
};

use super::{os_error, wide_path};
use crate::{
    attributes::FileAttributes,
    delete::DeletionTarget,
    error::Result,
};

// ── Access rights ─────────────────────────────────────────────────────────────

const DELETE: u32 = 0x0001_0000;
const SYNCHRONIZE: u32 = 0x0010_0000;
const FILE_READ_ATTRIBUTES: u32 = 0x0000_0080;
const FILE_WRITE_ATTRIBUTES: u32 = 0x0000_0100;
const GENERIC_READ: u32 = 0x8000_0000;

/// `INVALID_FILE_ATTRIBUTES`; never a real attribute set.
const INVALID_FILE_ATTRIBUTES: u32 = u32::MAX;

// ── FileHandle ────────────────────────────────────────────────────────────────

/// An open file or directory, closed on `Drop`.
#[derive(Debug)]
pub struct FileHandle(HANDLE);

// SAFETY: a file handle is a process-wide kernel object reference, not tied to
// the thread that opened it.  `FileHandle` is not `Clone`, so exactly one owner
// closes it.
unsafe impl Send for FileHandle {}

impl FileHandle {
    /// Open `path` so it can be unprotected and marked for deletion.
    ///
    /// Other handles may keep reading, writing or deleting the entry.
    pub fn open_for_delete(path: &Path) -> Result<Self> {
        Self::open(
            path,
            DELETE | FILE_READ_ATTRIBUTES | FILE_WRITE_ATTRIBUTES | SYNCHRONIZE,
            FILE_SHARE_READ | FILE_SHARE_WRITE | FILE_SHARE_DELETE,
        )
    }

    /// Open `path` for metadata queries.  Concurrent writers are refused.
    pub fn open_for_query(path: &Path) -> Result<Self> {
        Self::open(path, GENERIC_READ | SYNCHRONIZE, FILE_SHARE_READ)
    }

    fn open(path: &Path, access: u32, share: FILE_SHARE_MODE) -> Result<Self> {
        let wide = wide_path(path)?;

        // SAFETY: `wide` is a valid null-terminated UTF-16 string that outlives
        // the call.  No security attributes and no template handle are passed.
        // OPEN_EXISTING never creates or truncates anything.
        let handle = unsafe {
            CreateFileW(
                PCWSTR(wide.as_ptr()),
                access,
                share,
                None,
                OPEN_EXISTING,
                FILE_FLAG_BACKUP_SEMANTICS | FILE_FLAG_OPEN_REPARSE_POINT,
                HANDLE::default(),
            )
        }
        .map_err(os_error("CreateFileW"))?;

        debug!("opened {} (access {access:#010x})", path.display());
        Ok(Self(handle))
    }

    /// Read the attribute set (`FILE_BASIC_INFO::FileAttributes`).
    pub fn attributes(&self) -> Result<FileAttributes> {
        let mut info = FILE_BASIC_INFO::default();
        // SAFETY: `info` is a writable FILE_BASIC_INFO and the size passed
        // matches it exactly; `self.0` is open for the lifetime of `self`.
        unsafe {
            GetFileInformationByHandleEx(
                self.0,
                FileBasicInfo,
                &mut info as *mut FILE_BASIC_INFO as *mut c_void,
                size_of::<FILE_BASIC_INFO>() as u32,
            )
        }
        .map_err(os_error("GetFileInformationByHandleEx"))?;

        debug_assert_ne!(info.FileAttributes, INVALID_FILE_ATTRIBUTES);
        Ok(FileAttributes::from_bits_retain(info.FileAttributes))
    }

    /// Replace the attribute set.
    ///
    /// `attributes` is filtered through [`FileAttributes::for_set`]: bits that
    /// cannot be set this way are dropped and `NORMAL` is always included.
    /// Timestamps are left untouched (zero means "unchanged").
    pub fn set_attributes(&self, attributes: FileAttributes) -> Result<()> {
        let info = FILE_BASIC_INFO {
            FileAttributes: attributes.for_set().bits(),
            ..Default::default()
        };
        // SAFETY: `info` is a fully initialised FILE_BASIC_INFO that outlives
        // the call and the size passed matches it exactly.  The handle must
        // have FILE_WRITE_ATTRIBUTES access, otherwise the call fails cleanly.
        unsafe {
            SetFileInformationByHandle(
                self.0,
                FileBasicInfo,
                &info as *const FILE_BASIC_INFO as *const c_void,
                size_of::<FILE_BASIC_INFO>() as u32,
            )
        }
        .map_err(os_error("SetFileInformationByHandle"))
    }

    /// Set the delete-on-close disposition.  The entry disappears when the
    /// last handle to it is closed.
    pub fn mark_for_deletion(&self) -> Result<()> {
        let info = FILE_DISPOSITION_INFO {
            DeleteFile: true.into(),
        };
        // SAFETY: same invariants as `set_attributes`; the handle must have
        // DELETE access.
        unsafe {
            SetFileInformationByHandle(
                self.0,
                FileDispositionInfo,
                &info as *const FILE_DISPOSITION_INFO as *const c_void,
                size_of::<FILE_DISPOSITION_INFO>() as u32,
            )
        }
        .map_err(os_error("SetFileInformationByHandle"))
    }

    /// Sizes, link count and directory flag (`FILE_STANDARD_INFO`).
    pub(crate) fn standard_info(&self) -> Result<FILE_STANDARD_INFO> {
        let mut info = FILE_STANDARD_INFO::default();
        // SAFETY: `info` is a writable FILE_STANDARD_INFO and the size passed
        // matches it exactly.
        unsafe {
            GetFileInformationByHandleEx(
                self.0,
                FileStandardInfo,
                &mut info as *mut FILE_STANDARD_INFO as *mut c_void,
                size_of::<FILE_STANDARD_INFO>() as u32,
            )
        }
        .map_err(os_error("GetFileInformationByHandleEx"))?;
        Ok(info)
    }
}

impl Drop for FileHandle {
    fn drop(&mut self) {
        // SAFETY: self.0 was returned by a successful CreateFileW and has not
        // been closed since; `FileHandle` is its only owner.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

impl DeletionTarget for FileHandle {
    fn attributes(&mut self) -> Result<FileAttributes> {
        FileHandle::attributes(self)
    }

    fn set_attributes(&mut self, attributes: FileAttributes) -> Result<()> {
        FileHandle::set_attributes(self, attributes)
    }

    fn mark_for_deletion(&mut self) -> Result<()> {
        FileHandle::mark_for_deletion(self)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
