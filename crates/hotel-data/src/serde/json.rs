//! JSON encoding of hotel collections.
//!
//! # Format
//!
//! A compact top-level array, one object per hotel, keys in declaration order:
//!
//! ```json
//! [{"name":"The test hotel","address":"01, test street","stars":5,"contact":"test test","phone":"+33 (0)2 24 56 78 90","uri":"https://test.com/"}]
//! ```

use super::Result;
use crate::hotel::Hotel;

/// Encodes hotels as a JSON array.
///
/// # Example
///
/// ```ignore
/// let bytes = json::to_vec(&hotels)?;
/// ```
pub fn to_vec(hotels: &[Hotel]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(hotels)?)
}

/// Decodes a JSON array produced by [`to_vec`].
pub fn from_slice(bytes: &[u8]) -> Result<Vec<Hotel>> {
    Ok(serde_json::from_slice(bytes)?)
}
