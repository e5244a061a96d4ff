//! Route-segment encoding compatible with `encodeURI`/`decodeURI`.

use crate::error::TaxonomyError;
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters `encodeURI` escapes in addition to controls and non-ASCII.
const URI_ESCAPED: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Encodes a category name for use as a static route parameter.
pub fn encode_uri(value: &str) -> String {
    utf8_percent_encode(value, URI_ESCAPED).to_string()
}

/// Decodes a percent-encoded route segment.
///
/// Fails when the escapes do not form valid UTF-8, the same inputs for which
/// `decodeURI` throws.
pub fn decode_uri(segment: &str) -> Result<String, TaxonomyError> {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| TaxonomyError::InvalidUri(segment.to_string()))
}
