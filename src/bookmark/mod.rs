//! Bookmark data model and diagnostics.

mod groups;
mod parser;

pub use groups::{FileGroup, GroupedBookmarks, group_by_file};
pub use parser::parse_bookmarks;

/// One bookmark record from the export, as resolved from the XML.
///
/// Either field is `None` when the corresponding child element is absent or
/// has empty text content. The parser never drops records; skip policy lives
/// in the grouper (missing file name) and encoder (missing position).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    /// Media file the bookmark points into.
    pub file_name: Option<String>,
    /// Byte/time position inside that file, kept as the source text.
    pub position: Option<String>,
}

impl Bookmark {
    pub fn new(file_name: Option<String>, position: Option<String>) -> Self {
        Self {
            file_name,
            position,
        }
    }
}

/// Aggregated warning counts for one conversion run.
///
/// Warnings accumulate across grouping and encoding and are reported once,
/// at the end of the run, rather than per occurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Diagnostics {
    /// Bookmarks dropped entirely because no file name could be resolved.
    pub missing_file_name: usize,
    /// Grouped bookmarks whose label line was omitted for lack of a position.
    pub missing_position: usize,
}

impl Diagnostics {
    pub fn has_warnings(&self) -> bool {
        self.missing_file_name > 0 || self.missing_position > 0
    }

    /// Single end-of-run warning message, or `None` if the run was clean.
    pub fn summary(&self) -> Option<String> {
        if !self.has_warnings() {
            return None;
        }
        Some(format!(
            "Not all bookmarks could be processed, some data may be missing \
             ({} without file name, {} without position).",
            self.missing_file_name, self.missing_position
        ))
    }
}
