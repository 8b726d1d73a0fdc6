// ── Platform layer ────────────────────────────────────────────────────────────
//
// All OS calls live in the `win32` sub-module and never leak outward; callers
// see only crate types (`Error`, `FileAttributes`, `FileInfo`, …).

#[cfg(windows)]
pub mod win32;

use crate::error::{Error, Result};

// ── Result checks ─────────────────────────────────────────────────────────────
//
// Pure halves of the Win32 helpers, kept here so they test on every host.

/// Check a `SizeofResource` result.  Zero is a legal size, so it only means
/// failure when the last-error code (cleared before the call) was set.
pub(crate) fn checked_resource_size(size: u32, last_error: u32) -> Result<u32> {
    if size == 0 && last_error != 0 {
        return Err(Error::Win32 {
            function: "SizeofResource",
            code: last_error,
        });
    }
    Ok(size)
}

/// Check the fill step of a size-probe-then-fill call pair.
///
/// `required` is the probe's length including the null terminator; `written`
/// is the fill's length without it.  Anything but `required - 1` means the
/// value changed between the calls or the OS broke its contract.
pub(crate) fn checked_fill_len(
    function: &'static str,
    required: u32,
    written: u32,
) -> Result<usize> {
    if required == 0 || written != required - 1 {
        return Err(Error::Unexpected { function });
    }
    Ok(written as usize)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const ERROR_RESOURCE_DATA_NOT_FOUND: u32 = 1812;

    #[test]
    fn resource_size_with_last_error_set_is_an_error() {
        let err = checked_resource_size(0, ERROR_RESOURCE_DATA_NOT_FOUND).unwrap_err();
        assert_eq!(
            err,
            Error::Win32 {
                function: "SizeofResource",
                code: ERROR_RESOURCE_DATA_NOT_FOUND,
            }
        );
    }

    #[test]
    fn empty_resource_without_last_error_is_fine() {
        assert_eq!(checked_resource_size(0, 0), Ok(0));
    }

    #[test]
    fn nonzero_resource_size_ignores_stale_last_error() {
        assert_eq!(checked_resource_size(42, ERROR_RESOURCE_DATA_NOT_FOUND), Ok(42));
    }

    #[test]
    fn fill_len_matching_probe_is_accepted() {
        // "C:\Windows" is 10 characters; the probe asks for 11.
        assert_eq!(checked_fill_len("GetSystemWindowsDirectoryW", 11, 10), Ok(10));
    }

    #[test]
    fn fill_len_mismatch_is_unexpected() {
        for (required, written) in [(11, 9), (11, 11), (11, 30), (0, 0)] {
            assert_eq!(
                checked_fill_len("GetSystemWindowsDirectoryW", required, written),
                Err(Error::Unexpected {
                    function: "GetSystemWindowsDirectoryW"
                }),
                "required {required}, written {written}"
            );
        }
    }
}
