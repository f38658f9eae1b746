//! Error types for labeltrack operations.

use thiserror::Error;

/// Errors that can occur while converting a bookmark export.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid XML: {0}")]
    InvalidXml(String),
}

pub type Result<T> = std::result::Result<T, Error>;
