//! Strict XML parsing for bookmark export documents.
//!
//! The export schema is namespace-sloppy in the wild, so all element matching
//! is on local names: `<bookmark>`, `<nc:bookmark>` and a default-namespaced
//! `<bookmark>` are all the same element.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::bookmark::Bookmark;
use crate::error::{Error, Result};

/// Which bookmark field a text capture feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    FileName,
    Position,
}

/// An in-flight text capture for one `fileName`/`filePosition` element.
///
/// `targets` are the records (all currently open `bookmark` ancestors) for
/// which this element is the first matching descendant. Text accumulates
/// until the element closes at `end_depth`.
struct Capture {
    field: Field,
    targets: Vec<usize>,
    text: String,
    end_depth: usize,
}

/// A `bookmark` element that has not closed yet.
///
/// The seen flags record that a first matching descendant was already found,
/// so a later `fileName`/`filePosition` never overrides it, even when the
/// first one was empty.
struct OpenBookmark {
    record: usize,
    file_name_seen: bool,
    position_seen: bool,
}

impl OpenBookmark {
    fn seen(&self, field: Field) -> bool {
        match field {
            Field::FileName => self.file_name_seen,
            Field::Position => self.position_seen,
        }
    }

    fn mark_seen(&mut self, field: Field) {
        match field {
            Field::FileName => self.file_name_seen = true,
            Field::Position => self.position_seen = true,
        }
    }
}

/// Parse a bookmark export document into records, in document order.
///
/// One record is produced per element with local name `bookmark`, at any
/// depth, in any namespace. Field text content is taken exactly as written
/// (entities resolved, CDATA included, no trimming); an absent child or empty
/// content yields `None` for that field.
///
/// Any well-formedness violation fails the whole parse; no partial results.
pub fn parse_bookmarks(xml: &str) -> Result<Vec<Bookmark>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = true;

    let mut records: Vec<Bookmark> = Vec::new();
    let mut open: Vec<OpenBookmark> = Vec::new();
    let mut captures: Vec<Capture> = Vec::new();
    let mut depth: usize = 0;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                let name = e.name();
                match name.local_name().as_ref() {
                    b"bookmark" => {
                        records.push(Bookmark::new(None, None));
                        open.push(OpenBookmark {
                            record: records.len() - 1,
                            file_name_seen: false,
                            position_seen: false,
                        });
                    }
                    b"fileName" => begin_capture(Field::FileName, &mut open, &mut captures, depth),
                    b"filePosition" => {
                        begin_capture(Field::Position, &mut open, &mut captures, depth)
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(e)) => {
                let name = e.name();
                match name.local_name().as_ref() {
                    b"bookmark" => records.push(Bookmark::new(None, None)),
                    // An empty element still counts as the first matching
                    // descendant; its (empty) content resolves to None.
                    b"fileName" => claim_empty(Field::FileName, &mut open),
                    b"filePosition" => claim_empty(Field::Position, &mut open),
                    _ => {}
                }
            }
            Ok(Event::Text(e)) => {
                if !captures.is_empty() {
                    let chunk = String::from_utf8_lossy(e.as_ref());
                    for capture in &mut captures {
                        capture.text.push_str(&chunk);
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if !captures.is_empty() {
                    let bytes = e.into_inner();
                    let chunk = String::from_utf8_lossy(&bytes);
                    for capture in &mut captures {
                        capture.text.push_str(&chunk);
                    }
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if !captures.is_empty() {
                    let entity = String::from_utf8_lossy(e.as_ref());
                    if let Some(resolved) = resolve_entity(&entity) {
                        for capture in &mut captures {
                            capture.text.push_str(&resolved);
                        }
                    }
                }
            }
            Ok(Event::End(e)) => {
                if depth == 0 {
                    return Err(Error::InvalidXml("end tag without matching start".into()));
                }
                if captures
                    .last()
                    .is_some_and(|capture| capture.end_depth == depth)
                    && let Some(capture) = captures.pop()
                {
                    let value = (!capture.text.is_empty()).then(|| capture.text.clone());
                    for &record in &capture.targets {
                        match capture.field {
                            Field::FileName => records[record].file_name = value.clone(),
                            Field::Position => records[record].position = value.clone(),
                        }
                    }
                }
                if e.name().local_name().as_ref() == b"bookmark" {
                    open.pop();
                }
                depth -= 1;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
    }

    if depth != 0 {
        return Err(Error::InvalidXml(format!("{depth} unclosed element(s)")));
    }

    Ok(records)
}

/// Start capturing text for every open bookmark that has not yet seen a
/// matching descendant. No-op when nothing is waiting on this field.
fn begin_capture(
    field: Field,
    open: &mut [OpenBookmark],
    captures: &mut Vec<Capture>,
    depth: usize,
) {
    let targets: Vec<usize> = open
        .iter_mut()
        .filter(|o| !o.seen(field))
        .map(|o| {
            o.mark_seen(field);
            o.record
        })
        .collect();

    if !targets.is_empty() {
        captures.push(Capture {
            field,
            targets,
            text: String::new(),
            end_depth: depth,
        });
    }
}

fn claim_empty(field: Field, open: &mut [OpenBookmark]) {
    for o in open.iter_mut() {
        if !o.seen(field) {
            o.mark_seen(field);
        }
    }
}

/// Resolve XML entity references.
fn resolve_entity(entity: &str) -> Option<String> {
    let predefined = match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => None,
    };
    if let Some(c) = predefined {
        return Some(c.to_string());
    }

    let code = if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok()
    } else {
        None
    }?;

    char::from_u32(code).map(|c| c.to_string())
}
