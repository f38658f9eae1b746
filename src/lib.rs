//! # labeltrack
//!
//! Convert bookmark XML exports into label track archives.
//!
//! A bookmark export lists named bookmarks, each pointing at a position
//! inside a referenced media file. This crate parses that XML, groups the
//! bookmarks per media file, renders one tab-separated label track per file,
//! and packages all of them into a single `converted-bookmarks.zip`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use labeltrack::convert_file;
//!
//! let report = convert_file("bookmarks.xml", "converted-bookmarks.zip", None).unwrap();
//! if let Some(warning) = report.diagnostics.summary() {
//!     eprintln!("{warning}");
//! }
//! ```
//!
//! ## In-memory conversion
//!
//! ```
//! use std::io::Cursor;
//! use labeltrack::convert_str;
//!
//! let xml = "<bookmarks>\
//!     <bookmark><fileName>a.mp3</fileName><filePosition>10</filePosition></bookmark>\
//! </bookmarks>";
//! let mut zip = Cursor::new(Vec::new());
//! let report = convert_str(xml, &mut zip).unwrap();
//! assert_eq!(report.entries, 1);
//! ```
//!
//! Bookmarks missing a `fileName` are dropped, and bookmarks missing a
//! `filePosition` are omitted from their track; both losses are tolerated
//! and surfaced once, through [`Diagnostics`], when the run finishes. Only
//! malformed XML aborts a conversion.

pub mod archive;
pub mod bookmark;
pub mod convert;
pub mod error;
pub mod io;
pub mod track;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use archive::{ARCHIVE_NAME, write_archive, write_archive_to_writer};
pub use bookmark::{Bookmark, Diagnostics, FileGroup, GroupedBookmarks, group_by_file, parse_bookmarks};
pub use convert::{Report, convert_file, convert_str};
pub use error::{Error, Result};
pub use track::{LABEL_TRACK_SUFFIX, encode_label_track, label_track_name};
