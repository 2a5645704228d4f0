//! Text decoder.

use std::borrow::Cow;

use crate::decode_to_bytes::decode_to_bytes;
use crate::error::DecodeError;
use crate::normalize::apply_normalization;
use crate::options::{DecodeOptions, DecodeOutput, Decoded};

/// Decodes a base64 string and converts the result per
/// [`DecodeOptions::output`].
///
/// With [`DecodeOutput::Bytes`] the decoded buffer is returned as-is. With
/// [`DecodeOutput::Text`] the bytes are decoded as UTF-8 and, when
/// [`DecodeOptions::normalize`] is set, normalized to that Unicode form.
///
/// # Errors
///
/// Any [`DecodeError`] from [`decode_to_bytes`], plus
/// [`DecodeError::InvalidUtf8`] when the decoded bytes are not valid UTF-8
/// and text output was requested.
///
/// # Example
///
/// ```
/// use b64_codec::{decode_to_text, DecodeOptions, Decoded};
///
/// let decoded = decode_to_text("aGVsbG8=", &DecodeOptions::default()).unwrap();
/// assert_eq!(decoded, Decoded::Text("hello".to_string()));
/// ```
pub fn decode_to_text(text: &str, options: &DecodeOptions) -> Result<Decoded, DecodeError> {
    let bytes = decode_to_bytes(text, options)?;
    match options.output {
        DecodeOutput::Bytes => Ok(Decoded::Bytes(bytes)),
        DecodeOutput::Text => {
            let decoded = String::from_utf8(bytes)?;
            match apply_normalization(&decoded, options.normalize) {
                Cow::Borrowed(_) => Ok(Decoded::Text(decoded)),
                Cow::Owned(normalized) => Ok(Decoded::Text(normalized)),
            }
        }
    }
}
