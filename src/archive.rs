//! Packaging of label tracks into a ZIP archive.

use std::io::{Seek, Write};
use std::path::Path;

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::bookmark::{Diagnostics, GroupedBookmarks};
use crate::error::Result;
use crate::track::{encode_label_track, label_track_name};

/// Canonical name for the output archive.
pub const ARCHIVE_NAME: &str = "converted-bookmarks.zip";

/// Write the archive to a file on disk.
pub fn write_archive<P: AsRef<Path>>(
    grouped: &GroupedBookmarks,
    path: P,
    diagnostics: &mut Diagnostics,
) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_archive_to_writer(grouped, file, diagnostics)
}

/// Write the archive to any [`Write`] + [`Seek`] destination.
///
/// One `<fileName>_labelTrack.txt` entry per group, in group order. An empty
/// map produces a valid archive with zero entries.
pub fn write_archive_to_writer<W: Write + Seek>(
    grouped: &GroupedBookmarks,
    writer: W,
    diagnostics: &mut Diagnostics,
) -> Result<()> {
    let mut zip = ZipWriter::new(writer);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for group in grouped {
        let content = encode_label_track(&group.file_name, &group.bookmarks, diagnostics);
        zip.start_file(label_track_name(&group.file_name), options)?;
        zip.write_all(content.as_bytes())?;
    }

    zip.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use zip::ZipArchive;

    use super::*;
    use crate::bookmark::{Bookmark, group_by_file};

    fn grouped(records: Vec<(&str, &str)>) -> GroupedBookmarks {
        let records = records
            .into_iter()
            .map(|(f, p)| Bookmark::new(Some(f.to_string()), Some(p.to_string())))
            .collect();
        group_by_file(records, &mut Diagnostics::default())
    }

    #[test]
    fn test_entry_per_group_in_order() {
        let grouped = grouped(vec![("b.mp3", "1"), ("a.mp3", "2"), ("b.mp3", "3")]);
        let mut diagnostics = Diagnostics::default();
        let mut buffer = Cursor::new(Vec::new());
        write_archive_to_writer(&grouped, &mut buffer, &mut diagnostics).unwrap();

        let mut archive = ZipArchive::new(buffer).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "b.mp3_labelTrack.txt");
        assert_eq!(archive.by_index(1).unwrap().name(), "a.mp3_labelTrack.txt");

        let mut content = String::new();
        archive
            .by_name("b.mp3_labelTrack.txt")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "0\t0\tb.mp3\n1\t1\t0\n3\t3\t1");
    }

    #[test]
    fn test_empty_map_yields_empty_archive() {
        let grouped = GroupedBookmarks::default();
        let mut diagnostics = Diagnostics::default();
        let mut buffer = Cursor::new(Vec::new());
        write_archive_to_writer(&grouped, &mut buffer, &mut diagnostics).unwrap();

        let archive = ZipArchive::new(buffer).unwrap();
        assert_eq!(archive.len(), 0);
        assert!(!diagnostics.has_warnings());
    }
}
