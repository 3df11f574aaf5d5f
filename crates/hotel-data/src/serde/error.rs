//! Unified error type for hotel encoders and decoders.

use thiserror::Error;

/// Error raised while encoding or decoding a hotel collection.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML encoding error.
    #[error("XML serialization error: {0}")]
    XmlSerialize(#[from] quick_xml::SeError),

    /// XML document could not be read.
    #[error("XML read error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// XML document has content outside the hotel document shape.
    #[error("Unexpected XML content: {0}")]
    UnexpectedXml(String),

    /// A `<hotel>` element lacks a required child element.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Stars value is not a small non-negative integer.
    #[error("Invalid stars value: {0:?}")]
    InvalidStars(String),

    /// Encoded document is not valid UTF-8.
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Shorthand Result type for serde operations.
pub type Result<T> = std::result::Result<T, Error>;
