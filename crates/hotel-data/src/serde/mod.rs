//! Serde-based encodings for hotel collections.
//!
//! Two independent output encodings are provided:
//! - [`json`] — keyed, object-per-hotel encoding (primary)
//! - [`xml`] — tagged markup with one root element (secondary)
//!
//! Both are total over any collection of [`Hotel`]s, emit every attribute in
//! declaration order (`name, address, stars, contact, phone, uri`) and are
//! deterministic for a given input order.
//!
//! # Example
//!
//! ```
//! use hotel_data::hotel::Hotel;
//! use hotel_data::serde::{Json, OutputFormat, Xml};
//!
//! let hotels = vec![Hotel {
//!     name: "The test hotel".to_string(),
//!     address: "01, test street".to_string(),
//!     stars: 5,
//!     contact: "test test".to_string(),
//!     phone: "+33 (0)2 24 56 78 90".to_string(),
//!     uri: "https://test.com/".to_string(),
//! }];
//!
//! let json = Json::encode(&hotels).unwrap();
//! let xml = Xml::encode(&hotels).unwrap();
//!
//! assert_eq!(Json::decode(&json).unwrap(), hotels);
//! assert_eq!(Xml::decode(&xml).unwrap(), hotels);
//! ```

mod error;
pub mod json;
pub mod xml;

use std::fmt;

pub use error::{Error, Result};

use crate::hotel::Hotel;

/// Marker type for JSON format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

/// Marker type for XML format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Xml;

/// Trait for whole-collection encoding of hotels.
///
/// Implemented by marker types (`Json`, `Xml`) to provide format-specific
/// operations with compile-time dispatch.
pub trait OutputFormat {
    /// Runtime descriptor of this format.
    const FORMAT: Format;

    /// Encodes the full ordered collection.
    fn encode(hotels: &[Hotel]) -> Result<Vec<u8>>;

    /// Decodes a document produced by [`encode`][OutputFormat::encode].
    fn decode(bytes: &[u8]) -> Result<Vec<Hotel>>;
}

impl OutputFormat for Json {
    const FORMAT: Format = Format::Json;

    fn encode(hotels: &[Hotel]) -> Result<Vec<u8>> {
        json::to_vec(hotels)
    }

    fn decode(bytes: &[u8]) -> Result<Vec<Hotel>> {
        json::from_slice(bytes)
    }
}

impl OutputFormat for Xml {
    const FORMAT: Format = Format::Xml;

    fn encode(hotels: &[Hotel]) -> Result<Vec<u8>> {
        xml::to_vec(hotels)
    }

    fn decode(bytes: &[u8]) -> Result<Vec<Hotel>> {
        xml::from_slice(bytes)
    }
}

/// Format enum for runtime format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON array of objects.
    Json,
    /// XML document with a `<hotels>` root.
    Xml,
}

impl Format {
    /// All output formats, in the order they are produced.
    pub const ALL: [Self; 2] = [Self::Json, Self::Xml];

    /// File extension (without the dot) for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Xml => f.write_str("XML"),
        }
    }
}
