// ── File attribute set ────────────────────────────────────────────────────────
//
// Pure Rust bitmask mirroring the Win32 `FILE_ATTRIBUTE_*` constants.
// No Win32 imports; the values are fixed by the platform ABI.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Attributes of a file or directory as reported by `FILE_BASIC_INFO`.
    ///
    /// Bits without a name here are kept when read from the OS so that a
    /// read-modify-write never silently drops them; they are only filtered
    /// when writing (see [`FileAttributes::for_set`]).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FileAttributes: u32 {
        const READONLY              = 0x0000_0001;
        const HIDDEN                = 0x0000_0002;
        const SYSTEM                = 0x0000_0004;
        const DIRECTORY             = 0x0000_0010;
        const ARCHIVE               = 0x0000_0020;
        const DEVICE                = 0x0000_0040;
        /// Only meaningful on its own; any other bit overrides it.
        const NORMAL                = 0x0000_0080;
        const TEMPORARY             = 0x0000_0100;
        const SPARSE_FILE           = 0x0000_0200;
        const REPARSE_POINT         = 0x0000_0400;
        const COMPRESSED            = 0x0000_0800;
        const OFFLINE               = 0x0000_1000;
        const NOT_CONTENT_INDEXED   = 0x0000_2000;
        const ENCRYPTED             = 0x0000_4000;
        const INTEGRITY_STREAM      = 0x0000_8000;
        const VIRTUAL               = 0x0001_0000;
        const NO_SCRUB_DATA         = 0x0002_0000;
        const RECALL_ON_OPEN        = 0x0004_0000;
        const PINNED                = 0x0008_0000;
        const UNPINNED              = 0x0010_0000;
        const RECALL_ON_DATA_ACCESS = 0x0040_0000;
    }
}

impl FileAttributes {
    /// The bits `SetFileInformationByHandle(FileBasicInfo)` is allowed to
    /// change through this crate.
    pub const SETTABLE: Self = Self::READONLY
        .union(Self::HIDDEN)
        .union(Self::SYSTEM)
        .union(Self::ARCHIVE)
        .union(Self::TEMPORARY)
        .union(Self::OFFLINE)
        .union(Self::NOT_CONTENT_INDEXED)
        .union(Self::NO_SCRUB_DATA);

    /// The value actually written when `self` is applied to a file.
    ///
    /// Unsettable and unknown bits are dropped and `NORMAL` is always present,
    /// so the result is never zero.  A zero `FileAttributes` field in
    /// `FILE_BASIC_INFO` means "leave unchanged", which would turn clearing
    /// the last attribute into a no-op.
    pub fn for_set(self) -> Self {
        Self::from_bits_retain(self.bits() & Self::SETTABLE.bits()) | Self::NORMAL
    }

    /// `self` with the read-only bit cleared; every other bit is retained.
    pub fn without_readonly(self) -> Self {
        Self::from_bits_retain(self.bits() & !Self::READONLY.bits())
    }

    pub fn is_readonly(self) -> bool {
        self.contains(Self::READONLY)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
