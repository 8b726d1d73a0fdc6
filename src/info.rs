// ── File information snapshot ─────────────────────────────────────────────────
//
// Pure Rust; filled in by `platform::win32::file::file_info` from a single
// handle open.  Serializable so callers can report file state as JSON.

use serde::{Deserialize, Serialize};

use crate::attributes::FileAttributes;

/// Attributes and sizes of a file or directory, read through one handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub attributes: FileAttributes,
    /// Bytes allocated on the volume (`FILE_STANDARD_INFO::AllocationSize`).
    pub allocation_size: u64,
    /// Logical size in bytes (`FILE_STANDARD_INFO::EndOfFile`).
    pub size: u64,
    /// Number of hard links.
    pub links: u32,
    #[serde(default)]
    pub directory: bool,
}

impl FileInfo {
    pub fn is_readonly(&self) -> bool {
        self.attributes.is_readonly()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_names_attribute_flags() {
        let info = FileInfo {
            attributes: FileAttributes::READONLY | FileAttributes::ARCHIVE,
            allocation_size: 4096,
            size: 12,
            links: 1,
            directory: false,
        };
        let json = serde_json::to_string(&info).expect("serialize");
        assert!(json.contains("\"allocation_size\":4096"), "{json}");
        assert!(json.contains("READONLY"), "{json}");

        let back: FileInfo = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, info);
        assert!(back.is_readonly());
    }

    #[test]
    fn directory_defaults_to_false_when_absent() {
        let json = r#"{"attributes":"ARCHIVE","allocation_size":0,"size":0,"links":1}"#;
        let info: FileInfo = serde_json::from_str(json).expect("deserialize");
        assert!(!info.directory);
        assert_eq!(info.attributes, FileAttributes::ARCHIVE);
    }
}
