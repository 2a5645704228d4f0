//! Text encoder.

use crate::encode_bytes::encode_bytes;
use crate::normalize::apply_normalization;
use crate::options::EncodeOptions;

/// Encodes a string to base64 via its UTF-8 byte representation.
///
/// When [`EncodeOptions::normalize`] is set, the string is normalized to that
/// Unicode form before conversion, so canonically-equivalent inputs encode
/// identically.
///
/// # Example
///
/// ```
/// use b64_codec::{encode_text, EncodeOptions};
///
/// let encoded = encode_text("hello", &EncodeOptions::default());
/// assert_eq!(encoded, "aGVsbG8=");
/// ```
pub fn encode_text(text: &str, options: &EncodeOptions) -> String {
    let normalized = apply_normalization(text, options.normalize);
    encode_bytes(normalized.as_bytes(), options)
}
