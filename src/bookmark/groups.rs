//! Grouping of bookmark records by the media file they reference.

use std::collections::HashMap;

use crate::bookmark::{Bookmark, Diagnostics};

/// All bookmarks referencing one media file, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub file_name: String,
    pub bookmarks: Vec<Bookmark>,
}

/// Ordered mapping from file name to its bookmarks.
///
/// Iteration order is first-seen order of the file names; within a group the
/// bookmarks keep their relative document order. File names are unique by
/// construction, so archive entry names derived from them never collide.
#[derive(Debug, Clone, Default)]
pub struct GroupedBookmarks {
    groups: Vec<FileGroup>,
    index: HashMap<String, usize>,
}

impl GroupedBookmarks {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileGroup> {
        self.groups.iter()
    }

    pub fn get(&self, file_name: &str) -> Option<&FileGroup> {
        self.index.get(file_name).map(|&i| &self.groups[i])
    }

    fn push(&mut self, file_name: String, bookmark: Bookmark) {
        match self.index.get(&file_name) {
            Some(&i) => self.groups[i].bookmarks.push(bookmark),
            None => {
                self.index.insert(file_name.clone(), self.groups.len());
                self.groups.push(FileGroup {
                    file_name,
                    bookmarks: vec![bookmark],
                });
            }
        }
    }
}

impl<'a> IntoIterator for &'a GroupedBookmarks {
    type Item = &'a FileGroup;
    type IntoIter = std::slice::Iter<'a, FileGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition records by file name, dropping those without one.
///
/// A record with no resolvable file name never enters any group; each such
/// drop is counted in `diagnostics.missing_file_name`.
pub fn group_by_file(records: Vec<Bookmark>, diagnostics: &mut Diagnostics) -> GroupedBookmarks {
    let mut grouped = GroupedBookmarks::default();

    for record in records {
        match record.file_name.clone() {
            Some(file_name) => grouped.push(file_name, record),
            None => diagnostics.missing_file_name += 1,
        }
    }

    grouped
}
