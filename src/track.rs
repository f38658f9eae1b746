//! Label track encoding.
//!
//! A label track is the tab-separated text format consumed by audio editors:
//! one header line `0\t0\t<fileName>`, then one `<pos>\t<pos>\t<index>` line
//! per bookmark, lines joined by `\n` with no trailing newline.

use crate::bookmark::{Bookmark, Diagnostics};

/// Suffix appended to the file name to form an archive entry name.
pub const LABEL_TRACK_SUFFIX: &str = "_labelTrack.txt";

/// Archive entry name for one group's label track.
pub fn label_track_name(file_name: &str) -> String {
    format!("{file_name}{LABEL_TRACK_SUFFIX}")
}

/// Render one group's label track text.
///
/// Bookmarks without a position are skipped and counted in
/// `diagnostics.missing_position`; a skipped bookmark does not consume an
/// index, so indices are contiguous over the emitted lines. Deterministic:
/// the same group always renders to byte-identical text.
pub fn encode_label_track(
    file_name: &str,
    bookmarks: &[Bookmark],
    diagnostics: &mut Diagnostics,
) -> String {
    let mut lines = vec![format!("0\t0\t{file_name}")];

    let mut index = 0usize;
    for bookmark in bookmarks {
        match &bookmark.position {
            Some(position) => {
                lines.push(format!("{position}\t{position}\t{index}"));
                index += 1;
            }
            None => diagnostics.missing_position += 1,
        }
    }

    lines.join("\n")
}
