//! Input reading and text decoding.
//!
//! Reading is chunked so an observer can follow byte progress from 0 to 100
//! while a file loads. Progress is observation only; the conversion never
//! depends on it.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Observer for read progress, fed whole percentages from 0 to 100.
pub type ProgressFn<'a> = dyn FnMut(u8) + 'a;

const CHUNK_SIZE: usize = 64 * 1024;

/// Read a source document into text, reporting byte progress as it goes.
///
/// The observer always sees 0 first and 100 last, even for empty files.
pub fn read_source<P: AsRef<Path>>(
    path: P,
    mut progress: Option<&mut ProgressFn<'_>>,
) -> Result<String> {
    let mut file = File::open(path)?;
    let total = file.metadata()?.len();

    if let Some(observer) = progress.as_mut() {
        observer(0);
    }

    let mut bytes = Vec::with_capacity(total as usize);
    let mut chunk = vec![0u8; CHUNK_SIZE];
    loop {
        let read = file.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        bytes.extend_from_slice(&chunk[..read]);
        if let Some(observer) = progress.as_mut() {
            let percent = if total == 0 {
                100
            } else {
                (bytes.len() as u64 * 100 / total).min(100) as u8
            };
            observer(percent);
        }
    }

    if let Some(observer) = progress.as_mut() {
        observer(100);
    }

    Ok(decode_text(&bytes))
}

/// Decode raw bytes into text: honor a BOM if present, otherwise accept
/// valid UTF-8, otherwise fall back to Windows-1252 the way browsers decode
/// unlabeled text files.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some((encoding, _bom_len)) = encoding_rs::Encoding::for_bom(bytes) {
        let (text, _, _) = encoding.decode(bytes);
        return text.into_owned();
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
            text.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_decode_plain_utf8() {
        assert_eq!(decode_text("café".as_bytes()), "café");
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"<bookmarks/>");
        assert_eq!(decode_text(&bytes), "<bookmarks/>");
    }

    #[test]
    fn test_decode_falls_back_to_windows_1252() {
        // 0xE9 is é in CP1252 but invalid as a lone UTF-8 byte.
        let bytes = [b'c', b'a', b'f', 0xE9];
        assert_eq!(decode_text(&bytes), "café");
    }

    #[test]
    fn test_read_source_reports_progress() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<bookmarks></bookmarks>").unwrap();

        let mut seen: Vec<u8> = Vec::new();
        let mut observer = |percent: u8| seen.push(percent);
        let text = read_source(file.path(), Some(&mut observer)).unwrap();

        assert_eq!(text, "<bookmarks></bookmarks>");
        assert_eq!(seen.first(), Some(&0));
        assert_eq!(seen.last(), Some(&100));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_read_source_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let mut seen: Vec<u8> = Vec::new();
        let mut observer = |percent: u8| seen.push(percent);
        let text = read_source(file.path(), Some(&mut observer)).unwrap();

        assert_eq!(text, "");
        assert_eq!(seen, vec![0, 100]);
    }
}
