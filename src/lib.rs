//! Windows platform helpers.
//!
//! Thin wrappers over single OS calls: embedded resource lookup, file
//! attribute get/set, forced deletion of read-only files, allocated and
//! logical file size, and the shared Windows directory.  Every helper opens at
//! most one handle and closes it before returning; there is no state between
//! calls, so all of them may be used from any thread.
//!
//! The OS-facing functions exist only on Windows targets.  The pure parts
//! ([`Error`], [`FileAttributes`], [`FileInfo`]) build everywhere.

// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except `platform::win32`.
// Each unsafe block in that module MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]
// The deletion sequence is only driven by the Win32 handle outside of tests.
#![cfg_attr(not(windows), allow(dead_code))]

mod attributes;
mod delete;
mod error;
mod info;
mod platform;

pub use attributes::FileAttributes;
pub use error::{Error, Result};
pub use info::FileInfo;

#[cfg(windows)]
pub use platform::win32::{
    directory::windows_directory,
    file::{delete_file, file_allocation_size, file_info, file_size},
    handle::FileHandle,
    resource::{load_resource, types as resource_types, ResourceId, ResourceInfo},
};
