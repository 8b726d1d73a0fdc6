// ── Forced deletion sequence ──────────────────────────────────────────────────
//
// The OS-independent part of `delete_file`: unprotect, mark for deletion,
// restore on failure.  The Win32 handle in `platform::win32::file` is the only
// production `DeletionTarget`; tests drive the sequence with a fake.
//
// No `unsafe` here.

use log::{debug, warn};

use crate::{attributes::FileAttributes, error::Result};

/// An open file or directory that can be marked delete-on-close.
pub(crate) trait DeletionTarget {
    fn attributes(&mut self) -> Result<FileAttributes>;
    fn set_attributes(&mut self, attributes: FileAttributes) -> Result<()>;
    fn mark_for_deletion(&mut self) -> Result<()>;
}

/// Mark `target` for deletion, clearing the read-only bit first when `force`
/// is set.
///
/// If the read-only bit was cleared and marking then fails, the attributes
/// read before the change are written back.  The result is always the outcome
/// of marking; failures of the unprotect and restore steps are logged and
/// otherwise ignored.
pub(crate) fn mark_with_restore<T: DeletionTarget>(target: &mut T, force: bool) -> Result<()> {
    // `Some` once the read-only bit may have been cleared.
    let mut previous: Option<FileAttributes> = None;

    if force {
        match target.attributes() {
            Ok(attributes) => {
                if let Err(e) = target.set_attributes(attributes.without_readonly()) {
                    debug!("clearing read-only attribute failed: {e}");
                }
                previous = Some(attributes);
            }
            Err(e) => debug!("reading attributes before forced delete failed: {e}"),
        }
    }

    let result = target.mark_for_deletion();

    if let (Err(e), Some(attributes)) = (&result, previous) {
        debug!("delete-on-close failed ({e}); restoring attributes {attributes:?}");
        if let Err(restore) = target.set_attributes(attributes) {
            warn!("restoring attributes after failed delete failed: {restore}");
        }
    }

    result
}

// ── Tests ─────────────────────────────────────────────────────────────────────
