// ── Embedded resources ────────────────────────────────────────────────────────
//
// Look up a resource in a loaded module image.  Nothing is copied: the
// returned `ResourceInfo` points straight into the mapped image.

#![allow(unsafe_code)]

use std::{ffi::OsStr, slice};

use log::debug;
use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{GetLastError, SetLastError, ERROR_SUCCESS, HMODULE},
        System::LibraryLoader::{FindResourceExW, LoadResource, LockResource, SizeofResource},
    },
};

use super::{last_error, os_error, wide_str};
use crate::{
    error::{Error, Result},
    platform::checked_resource_size,
};

/// `MAKELANGID(LANG_NEUTRAL, SUBLANG_NEUTRAL)`: let the loader pick the
/// best-matching language.
const LANG_NEUTRAL: u16 = 0;

/// Standard resource types (`RT_*`), usable as [`ResourceId::Int`].
pub mod types {
    pub const RT_ICON: u16 = 3;
    pub const RT_STRING: u16 = 6;
    pub const RT_RCDATA: u16 = 10;
    pub const RT_VERSION: u16 = 16;
    pub const RT_MANIFEST: u16 = 24;
}

/// A resource type or name: an integer id or a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceId {
    /// `MAKEINTRESOURCE(id)`.
    Int(u16),
    Name(String),
}

impl From<u16> for ResourceId {
    fn from(id: u16) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for ResourceId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl ResourceId {
    /// Encode for a `PCWSTR` argument.  Integer ids need no storage; names
    /// borrow from the returned buffer, which must outlive the call.
    fn encode(&self) -> Result<EncodedId> {
        match self {
            Self::Int(id) => Ok(EncodedId::Int(*id)),
            Self::Name(name) => Ok(EncodedId::Name(wide_str(OsStr::new(name))?)),
        }
    }
}

enum EncodedId {
    Int(u16),
    Name(Vec<u16>),
}

impl EncodedId {
    fn as_pcwstr(&self) -> PCWSTR {
        match self {
            // MAKEINTRESOURCEW: the id travels in the low word of the pointer.
            Self::Int(id) => PCWSTR(*id as usize as *const u16),
            Self::Name(wide) => PCWSTR(wide.as_ptr()),
        }
    }
}

/// Pointer and size of a resource inside a loaded module.
///
/// Not owned: the memory belongs to the module image and becomes invalid if
/// the module is unloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceInfo {
    pub pointer: *const u8,
    pub size: u32,
}

impl ResourceInfo {
    /// View the resource bytes.
    ///
    /// # Safety
    ///
    /// The module the resource was loaded from must stay loaded for `'a`.
    /// Resources of the process image (`module = None`) are valid for the
    /// whole process lifetime.
    pub unsafe fn as_bytes<'a>(&self) -> &'a [u8] {
        if self.pointer.is_null() || self.size == 0 {
            return &[];
        }
        // SAFETY: `pointer` came from LockResource for a resource of `size`
        // bytes; the caller guarantees the module is still mapped.
        unsafe { slice::from_raw_parts(self.pointer, self.size as usize) }
    }
}

/// Find and lock the resource `kind`/`name` in `module`, or in the image used
/// to create the current process when `module` is `None`.
pub fn load_resource(
    module: Option<HMODULE>,
    kind: &ResourceId,
    name: &ResourceId,
) -> Result<ResourceInfo> {
    let module = module.unwrap_or_default();
    let kind_w = kind.encode()?;
    let name_w = name.encode()?;

    // SAFETY: `module` is null (the process image) or a module handle the
    // caller keeps loaded.  Both identifiers are either MAKEINTRESOURCE values
    // or null-terminated strings held by `kind_w`/`name_w` for the call.
    let found = unsafe {
        FindResourceExW(module, kind_w.as_pcwstr(), name_w.as_pcwstr(), LANG_NEUTRAL)
    };
    if found.is_invalid() {
        return Err(last_error("FindResourceExW"));
    }

    // SAFETY: SetLastError only writes thread-local state.  `found` was just
    // returned by FindResourceExW for `module`.  SizeofResource returns zero
    // both for an empty resource and on failure; only the latter sets the
    // last error, which is why it is cleared first.
    let size = unsafe {
        SetLastError(ERROR_SUCCESS);
        let size = SizeofResource(module, found);
        checked_resource_size(size, GetLastError().0)?
    };

    // SAFETY: as above.  Resource handles need no release on 32/64-bit
    // Windows; FreeResource is obsolete.
    let loaded = unsafe { LoadResource(module, found) }.map_err(os_error("LoadResource"))?;

    // SAFETY: `loaded` is a valid resource handle from LoadResource.
    let pointer = unsafe { LockResource(loaded) } as *const u8;
    if pointer.is_null() {
        return Err(Error::Unexpected {
            function: "LockResource",
        });
    }

    debug!("loaded resource {kind:?}/{name:?}: {size} bytes");
    Ok(ResourceInfo { pointer, size })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use windows::{core::w, Win32::System::LibraryLoader::GetModuleHandleW};

    use super::{types::RT_VERSION, *};

    /// `VS_VERSION_INFO`, the id every versioned system binary uses.
    const VS_VERSION_INFO: u16 = 1;

    #[test]
    fn system_module_version_resource_is_found() {
        // SAFETY: kernel32.dll is loaded into every Win32 process.
        let kernel32 = unsafe { GetModuleHandleW(w!("kernel32.dll")) }.expect("kernel32");

        let info = load_resource(
            Some(kernel32),
            &RT_VERSION.into(),
            &VS_VERSION_INFO.into(),
        )
        .expect("version resource");

        assert!(info.size > 0);
        // SAFETY: kernel32.dll is never unloaded.
        let bytes = unsafe { info.as_bytes() };
        assert_eq!(bytes.len(), info.size as usize);
        // VS_VERSIONINFO starts with its own total length.
        let declared = u16::from_le_bytes([bytes[0], bytes[1]]);
        assert!(declared as u32 <= info.size);
    }

    #[test]
    fn missing_resource_is_an_error() {
        let err = load_resource(None, &"NO_SUCH_TYPE".into(), &ResourceId::Int(0xBEEF)).unwrap_err();
        assert!(err.win32_code().is_some(), "{err}");
    }

    #[test]
    fn zero_sized_resource_with_last_error_fails() {
        const ERROR_RESOURCE_DATA_NOT_FOUND: u32 = 1812;
        let err = checked_resource_size(0, ERROR_RESOURCE_DATA_NOT_FOUND).unwrap_err();
        assert_eq!(err.win32_code(), Some(ERROR_RESOURCE_DATA_NOT_FOUND));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn found_resource_reports_the_same_size_as_the_loader() {
        // SAFETY: kernel32.dll is loaded into every Win32 process.
        let kernel32 = unsafe { GetModuleHandleW(w!("kernel32.dll")) }.expect("kernel32");
        let kind: ResourceId = RT_VERSION.into();
        let name: ResourceId = VS_VERSION_INFO.into();
        let info = load_resource(Some(kernel32), &kind, &name).expect("version resource");

        let (kind_w, name_w) = (kind.encode().expect("kind"), name.encode().expect("name"));
        // SAFETY: as in `load_resource`; both identifiers are integer ids.
        let size = unsafe {
            let found =
                FindResourceExW(kernel32, kind_w.as_pcwstr(), name_w.as_pcwstr(), LANG_NEUTRAL);
            SizeofResource(kernel32, found)
        };
        assert_eq!(info.size, size);
    }

    #[test]
    fn names_with_interior_nul_are_rejected() {
        let err = load_resource(None, &RT_VERSION.into(), &"a\0b".into()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
