//! Native file selection for the upload slots

use std::path::PathBuf;

use filegate_core::FileSlot;

/// Ask the user for a file for `slot`. Returns `None` when cancelled.
pub fn pick_file(slot: FileSlot) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title(slot.label())
        .add_filter(slot.label(), &[slot.extension()])
        .pick_file()
}
