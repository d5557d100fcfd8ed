//! XML document decoding.

use serde::de::DeserializeOwned;

use super::error::DecodeError;

/// Decode an upstream XML document into a typed DTO.
///
/// Empty (or whitespace-only) input fails with [`DecodeError::Empty`];
/// malformed XML or a root that does not match `T` fails with
/// [`DecodeError::Xml`]. Callers treat both the same way as an empty
/// upstream response.
///
/// Attributes are available to `T` via `@`-prefixed serde renames, so
/// whether they are captured or ignored is decided per DTO shape. None of
/// the realtime feeds carry attribute-linked data, so the shapes in
/// [`super::types`] ignore them.
pub fn decode<T: DeserializeOwned>(xml: &str) -> Result<T, DecodeError> {
    if xml.trim().is_empty() {
        return Err(DecodeError::Empty);
    }

    quick_xml::de::from_str(xml).map_err(|e| DecodeError::Xml(e.to_string()))
}
