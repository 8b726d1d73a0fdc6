// ── Central error type ────────────────────────────────────────────────────────
//
// Every fallible helper returns `error::Result<T>`.  The variants mirror the
// single result code the helpers report: success is `Ok`, everything else is
// one of the cases below.  `Error::hresult` recovers the equivalent HRESULT
// for callers that need to hand a code back across an FFI boundary.

// ── Well-known codes ──────────────────────────────────────────────────────────

pub(crate) const ERROR_FILE_NOT_FOUND: u32 = 2;
pub(crate) const ERROR_PATH_NOT_FOUND: u32 = 3;
pub(crate) const ERROR_ACCESS_DENIED: u32 = 5;

const FACILITY_WIN32: u32 = 7;
const E_INVALIDARG: u32 = 0x8007_0057;
const E_UNEXPECTED: u32 = 0x8000_FFFF;

/// Every error a helper can produce.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An argument could not be passed to the OS, e.g. a path with an
    /// interior NUL.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A Win32 API call failed.
    #[error("{function} failed (error {code})")]
    Win32 {
        /// The name of the failing function.
        function: &'static str,
        /// The raw Win32 error code (`GetLastError()` value).
        code: u32,
    },

    /// A Win32 API call failed with an HRESULT outside `FACILITY_WIN32`.
    #[error("{function} failed (HRESULT {code:#010x})")]
    Hresult {
        /// The name of the failing function.
        function: &'static str,
        /// The HRESULT, bits reinterpreted as `u32`.
        code: u32,
    },

    /// The OS call succeeded but broke one of the wrapper's own invariants.
    #[error("{function} returned an unexpected result")]
    Unexpected { function: &'static str },
}

impl Error {
    /// Build an error from an HRESULT, unwrapping `FACILITY_WIN32` codes back
    /// into their Win32 form.
    pub fn from_hresult(function: &'static str, hresult: i32) -> Self {
        let bits = hresult as u32;
        if (bits & 0xFFFF_0000) == (0x8000_0000 | (FACILITY_WIN32 << 16)) {
            Self::Win32 {
                function,
                code: bits & 0xFFFF,
            }
        } else {
            Self::Hresult {
                function,
                code: bits,
            }
        }
    }

    /// The equivalent HRESULT.
    pub fn hresult(&self) -> i32 {
        let bits = match self {
            Self::InvalidArgument(_) => E_INVALIDARG,
            Self::Win32 { code, .. } => hresult_from_win32(*code),
            Self::Hresult { code, .. } => *code,
            Self::Unexpected { .. } => E_UNEXPECTED,
        };
        bits as i32
    }

    /// The Win32 error code, if this error carries one.
    pub fn win32_code(&self) -> Option<u32> {
        match self {
            Self::Win32 { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_access_denied(&self) -> bool {
        self.win32_code() == Some(ERROR_ACCESS_DENIED)
    }

    /// `true` for both a missing file and a missing parent directory.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.win32_code(),
            Some(ERROR_FILE_NOT_FOUND | ERROR_PATH_NOT_FOUND)
        )
    }
}

/// `HRESULT_FROM_WIN32`: zero stays zero, everything else lands in
/// `FACILITY_WIN32` with the severity bit set.
fn hresult_from_win32(code: u32) -> u32 {
    if code as i32 <= 0 {
        code
    } else {
        (code & 0x0000_FFFF) | (FACILITY_WIN32 << 16) | 0x8000_0000
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

// ── Tests ─────────────────────────────────────────────────────────────────────
